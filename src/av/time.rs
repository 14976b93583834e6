use super::AudioSamples;
use crate::error::{BridgeError, Result};
use std::cmp::Ordering;
use std::num::NonZeroU32;
use std::time::Duration;

/// Units a [`TimeValue`] can be expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeUnit {
    /// Seconds.
    Seconds,
    /// Thousandths of a second.
    Milliseconds,
    /// Millionths of a second.
    Microseconds,
    /// Billionths of a second.
    Nanoseconds,
}

impl TimeUnit {
    fn nanos(self) -> i128 {
        match self {
            TimeUnit::Seconds => 1_000_000_000,
            TimeUnit::Milliseconds => 1_000_000,
            TimeUnit::Microseconds => 1_000,
            TimeUnit::Nanoseconds => 1,
        }
    }
}

/// A signed amount of time tagged with its unit.
///
/// Equality and ordering compare the amount of time, so `1s == 1000ms`.
#[derive(Debug, Clone, Copy)]
pub struct TimeValue {
    value: i64,
    unit: TimeUnit,
}

impl TimeValue {
    /// Creates a value of `value` units.
    pub fn new(value: i64, unit: TimeUnit) -> Self {
        Self { value, unit }
    }

    /// The raw amount, in [`unit`](Self::unit).
    pub fn value(&self) -> i64 {
        self.value
    }

    /// The unit this value was created with.
    pub fn unit(&self) -> TimeUnit {
        self.unit
    }

    /// This value converted to `unit`, truncated toward zero and saturated to
    /// the `i64` range.
    pub fn get(&self, unit: TimeUnit) -> i64 {
        let converted = self.as_nanos() / unit.nanos();
        converted.clamp(i64::MIN as i128, i64::MAX as i128) as i64
    }

    fn as_nanos(&self) -> i128 {
        self.value as i128 * self.unit.nanos()
    }
}

impl PartialEq for TimeValue {
    fn eq(&self, other: &Self) -> bool {
        self.as_nanos() == other.as_nanos()
    }
}

impl Eq for TimeValue {}

impl PartialOrd for TimeValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for TimeValue {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_nanos().cmp(&other.as_nanos())
    }
}

impl From<Duration> for TimeValue {
    fn from(duration: Duration) -> Self {
        let nanos = i64::try_from(duration.as_nanos()).unwrap_or(i64::MAX);
        TimeValue::new(nanos, TimeUnit::Nanoseconds)
    }
}

impl TryFrom<TimeValue> for Duration {
    type Error = BridgeError;

    fn try_from(value: TimeValue) -> Result<Self> {
        let nanos = u64::try_from(value.as_nanos()).map_err(|_| {
            BridgeError::InvalidArgument(format!("{:?} does not fit in a Duration", value))
        })?;
        Ok(Duration::from_nanos(nanos))
    }
}

/// How long `num_samples` samples take to play at `sample_rate` Hz, in
/// microseconds.
///
/// ```
/// use mediabridge::av::{samples_to_time_value, TimeUnit};
///
/// let one_second = samples_to_time_value(44_100, 44_100).unwrap();
/// assert_eq!(one_second.get(TimeUnit::Milliseconds), 1000);
/// assert!(samples_to_time_value(1, 0).is_err());
/// ```
pub fn samples_to_time_value(num_samples: i64, sample_rate: i32) -> Result<TimeValue> {
    let rate = positive_rate(sample_rate)?;
    Ok(TimeValue::new(
        AudioSamples::samples_to_default_pts(num_samples, rate),
        TimeUnit::Microseconds,
    ))
}

/// How many samples at `sample_rate` Hz fill `duration`.
pub fn time_value_to_samples(duration: Option<&TimeValue>, sample_rate: i32) -> Result<i64> {
    let duration = duration
        .ok_or_else(|| BridgeError::InvalidArgument("must pass in a valid duration".into()))?;
    let rate = positive_rate(sample_rate)?;
    Ok(AudioSamples::default_pts_to_samples(
        duration.get(TimeUnit::Microseconds),
        rate,
    ))
}

fn positive_rate(sample_rate: i32) -> Result<NonZeroU32> {
    u32::try_from(sample_rate)
        .ok()
        .and_then(NonZeroU32::new)
        .ok_or_else(|| {
            BridgeError::InvalidArgument(format!(
                "sample rate must be greater than zero, got {}",
                sample_rate
            ))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use quickcheck_macros::quickcheck;

    #[test]
    fn test_unit_conversion() {
        let t = TimeValue::new(1500, TimeUnit::Milliseconds);
        assert_eq!(t.get(TimeUnit::Seconds), 1);
        assert_eq!(t.get(TimeUnit::Microseconds), 1_500_000);
        assert_eq!(t.get(TimeUnit::Nanoseconds), 1_500_000_000);
        assert_eq!(TimeValue::new(-1500, TimeUnit::Milliseconds).get(TimeUnit::Seconds), -1);
        assert_eq!(TimeValue::new(i64::MAX, TimeUnit::Seconds).get(TimeUnit::Nanoseconds), i64::MAX);
    }

    #[test]
    fn test_equality_across_units() {
        let a = TimeValue::new(1, TimeUnit::Seconds);
        let b = TimeValue::new(1000, TimeUnit::Milliseconds);
        let c = TimeValue::new(999_999, TimeUnit::Microseconds);
        assert_eq!(a, b);
        assert!(c < a);
        assert_eq!(a.max(c), a);
    }

    #[test]
    fn test_duration_conversion() {
        let t = TimeValue::from(Duration::from_millis(20));
        assert_eq!(t.get(TimeUnit::Microseconds), 20_000);
        assert_eq!(Duration::try_from(t).unwrap(), Duration::from_millis(20));
        assert!(Duration::try_from(TimeValue::new(-1, TimeUnit::Seconds)).is_err());
    }

    #[test]
    fn test_samples_to_time_value() {
        let t = samples_to_time_value(1024, 48_000).unwrap();
        assert_eq!(t.unit(), TimeUnit::Microseconds);
        assert_eq!(t.value(), 21_333);

        assert!(matches!(
            samples_to_time_value(1024, 0),
            Err(BridgeError::InvalidArgument(_))
        ));
        assert!(matches!(
            samples_to_time_value(1024, -44_100),
            Err(BridgeError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_time_value_to_samples() {
        let t = TimeValue::new(1, TimeUnit::Seconds);
        assert_eq!(time_value_to_samples(Some(&t), 22_050).unwrap(), 22_050);

        assert!(matches!(
            time_value_to_samples(None, 22_050),
            Err(BridgeError::InvalidArgument(_))
        ));
        assert!(matches!(
            time_value_to_samples(Some(&t), 0),
            Err(BridgeError::InvalidArgument(_))
        ));
    }

    #[quickcheck]
    fn prop_samples_round_trip(num_samples: u32) -> bool {
        // Rates under 1 MHz lose less than half a sample through microseconds.
        [8_000, 22_050, 44_100, 48_000, 96_000].iter().all(|&rate| {
            let n = num_samples as i64;
            samples_to_time_value(n, rate)
                .and_then(|t| time_value_to_samples(Some(&t), rate))
                .map_or(false, |back| back == n)
        })
    }
}
