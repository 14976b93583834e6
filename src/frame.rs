//! Construction of solid-color YUV420P frames.

use crate::av::{PixelFormat, VideoPicture};
use crate::config::Config;
use crate::error::Result;

/// Returns a new YUV420P frame filled with one color and stamped with `pts`
/// (microseconds, or [`crate::av::NO_PTS`]).
///
/// The luma plane is filled with `y`, the first chroma plane with `u` and the
/// second with `v`. Rows are tightly packed, so a 2x2 frame holds 4 luma
/// bytes and 1 byte per chroma plane.
///
/// ```
/// use mediabridge::frame::blank_frame;
///
/// let frame = blank_frame(2, 2, 16, 128, 128, 0).unwrap();
/// assert_eq!(frame.plane(0).unwrap(), &[16, 16, 16, 16]);
/// assert_eq!(frame.plane(1).unwrap(), &[128]);
/// assert!(frame.is_complete());
/// ```
pub fn blank_frame(width: u32, height: u32, y: u8, u: u8, v: u8, pts: i64) -> Result<VideoPicture> {
    blank_frame_with(&Config::default(), width, height, (y, u, v), pts)
}

/// Same as [`blank_frame`] with every plane filled with zero.
pub fn blank_frame_default(width: u32, height: u32, pts: i64) -> Result<VideoPicture> {
    blank_frame(width, height, 0, 0, 0, pts)
}

/// A blank frame laid out and filled as `config` describes.
///
/// Pass [`crate::config::current()`] to follow the process-wide settings.
pub fn blank_frame_from(config: &Config, width: u32, height: u32, pts: i64) -> Result<VideoPicture> {
    blank_frame_with(config, width, height, config.blank_fill, pts)
}

/// Same as [`blank_frame`] with the row alignment of `config`. Row padding is
/// filled too.
pub fn blank_frame_with(
    config: &Config,
    width: u32,
    height: u32,
    (y, u, v): (u8, u8, u8),
    pts: i64,
) -> Result<VideoPicture> {
    let mut frame =
        VideoPicture::with_alignment(PixelFormat::Yuv420p, width, height, config.stride_alignment)?;

    for (plane, value) in [y, u, v].into_iter().enumerate() {
        if let Some(bytes) = frame.plane_mut(plane) {
            bytes.fill(value);
        }
    }
    frame.set_complete(PixelFormat::Yuv420p, width, height, pts)?;

    log::debug!(
        "blank {}x{} frame filled with y={} u={} v={} at pts {}",
        width,
        height,
        y,
        u,
        v,
        pts
    );
    Ok(frame)
}
