use super::time::{TimeUnit, TimeValue};
use super::NO_PTS;
use crate::error::{BridgeError, Result};
use std::num::NonZeroU32;

const MICROS_PER_SECOND: i128 = 1_000_000;

/// A block of interleaved signed 16-bit audio.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioSamples {
    data: Vec<i16>,
    sample_rate: NonZeroU32,
    channels: u16,
    pts: i64,
}

impl AudioSamples {
    /// `data` holds `channels` interleaved values per sample frame, so its
    /// length must be a multiple of `channels`.
    pub fn new(data: Vec<i16>, sample_rate: u32, channels: u16) -> Result<Self> {
        let sample_rate = NonZeroU32::new(sample_rate).ok_or_else(|| {
            BridgeError::InvalidArgument("sample rate must be greater than zero".into())
        })?;
        if channels == 0 {
            return Err(BridgeError::InvalidArgument(
                "channel count must be greater than zero".into(),
            ));
        }
        if data.len() % channels as usize != 0 {
            return Err(BridgeError::InvalidArgument(format!(
                "{} values cannot be split across {} channels",
                data.len(),
                channels
            )));
        }
        Ok(Self {
            data,
            sample_rate,
            channels,
            pts: NO_PTS,
        })
    }

    /// Stamps the block with a presentation time in microseconds.
    pub fn with_pts(mut self, pts: i64) -> Self {
        self.pts = pts;
        self
    }

    /// Interleaved sample values.
    pub fn data(&self) -> &[i16] {
        &self.data
    }

    /// Mutable interleaved sample values.
    pub fn data_mut(&mut self) -> &mut [i16] {
        &mut self.data
    }

    /// Samples per second, per channel.
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate.get()
    }

    /// Number of interleaved channels.
    pub fn channels(&self) -> u16 {
        self.channels
    }

    /// Presentation time of the first sample in microseconds, or [`NO_PTS`].
    pub fn pts(&self) -> i64 {
        self.pts
    }

    /// Samples per channel.
    pub fn num_samples(&self) -> usize {
        self.data.len() / self.channels as usize
    }

    /// Play time of the whole block.
    pub fn duration(&self) -> TimeValue {
        let num_samples = i64::try_from(self.num_samples()).unwrap_or(i64::MAX);
        TimeValue::new(
            Self::samples_to_default_pts(num_samples, self.sample_rate),
            TimeUnit::Microseconds,
        )
    }

    /// Microseconds needed to play `num_samples` at `sample_rate`, rounded to
    /// the nearest microsecond.
    pub fn samples_to_default_pts(num_samples: i64, sample_rate: NonZeroU32) -> i64 {
        rescale(num_samples, MICROS_PER_SECOND, sample_rate.get() as i128)
    }

    /// Samples at `sample_rate` that fit in `pts` microseconds, rounded to the
    /// nearest sample.
    pub fn default_pts_to_samples(pts: i64, sample_rate: NonZeroU32) -> i64 {
        rescale(pts, sample_rate.get() as i128, MICROS_PER_SECOND)
    }
}

/// `value * mul / div` rounded half away from zero, saturated to `i64`.
fn rescale(value: i64, mul: i128, div: i128) -> i64 {
    let product = value as i128 * mul;
    let half = div / 2;
    let rounded = if product >= 0 {
        (product + half) / div
    } else {
        (product - half) / div
    };
    rounded.clamp(i64::MIN as i128, i64::MAX as i128) as i64
}
