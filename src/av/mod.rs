//! Core media value types: pictures, packets, audio samples, timestamps and
//! the listener hooks that observe them.

use std::fmt;

/// Timestamp value meaning "no presentation time".
pub const NO_PTS: i64 = i64::MIN;

/// Pixel layouts a [`VideoPicture`] can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PixelFormat {
    /// Planar Y, U, V with both chroma planes at half resolution.
    Yuv420p,
    /// Packed 32-bit pixels, read natively as `0xAARRGGBB`.
    Rgb32,
    /// Packed 24-bit R, G, B.
    Rgb24,
    /// Packed 24-bit B, G, R.
    Bgr24,
    /// Single 8-bit luma plane.
    Gray8,
}

impl PixelFormat {
    /// Number of separate planes in the buffer.
    pub fn num_planes(self) -> usize {
        match self {
            PixelFormat::Yuv420p => 3,
            _ => 1,
        }
    }

    /// Visible bytes per row and number of rows of `plane` for a picture of
    /// `width` by `height`. Returns `None` for a plane the format doesn't have.
    pub fn plane_geometry(self, plane: usize, width: usize, height: usize) -> Option<(usize, usize)> {
        if plane >= self.num_planes() {
            return None;
        }
        let geometry = match (self, plane) {
            (PixelFormat::Yuv420p, 0) => (width, height),
            (PixelFormat::Yuv420p, _) => ((width + 1) / 2, (height + 1) / 2),
            (PixelFormat::Rgb32, _) => (width * 4, height),
            (PixelFormat::Rgb24 | PixelFormat::Bgr24, _) => (width * 3, height),
            (PixelFormat::Gray8, _) => (width, height),
        };
        Some(geometry)
    }
}

impl fmt::Display for PixelFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PixelFormat::Yuv420p => "YUV420P",
            PixelFormat::Rgb32 => "RGB32",
            PixelFormat::Rgb24 => "RGB24",
            PixelFormat::Bgr24 => "BGR24",
            PixelFormat::Gray8 => "GRAY8",
        };
        f.write_str(name)
    }
}

/// Pass-through packet and audio-sample hooks
pub mod listener;

/// Time values and sample/duration arithmetic
pub mod time;

mod packet;
mod picture;
mod samples;

pub use listener::{AudioSamplesListener, ListenerChain, PacketListener, PassThroughListener};
pub use packet::*;
pub use picture::*;
pub use samples::*;
pub use time::{samples_to_time_value, time_value_to_samples, TimeUnit, TimeValue};
