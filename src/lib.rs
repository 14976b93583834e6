#![doc(html_root_url = "https://docs.rs/mediabridge/0.1.0")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(missing_docs)]
#![deny(rustdoc::missing_crate_level_docs)]

//! # mediabridge - raw frame and packed image helpers
//!
//! `mediabridge` moves pixel and audio data between a native decoder's raw
//! frame buffers and application-side types. It does no decoding itself; it
//! only reads and writes bytes a decoder produced or will consume.
//!
//! ## Features
//!
//! - Endian-aware packing of byte buffers into 32-bit pixels and back
//! - RGB32 picture to packed ARGB image conversion, and the reverse
//! - Solid-color YUV420P frame construction
//! - Audio sample count to duration arithmetic
//! - Pass-through listener hooks for packet and audio pipelines
//!
//! ## Quick Start
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! mediabridge = "0.1.0"
//! ```
//!
//! ### Picture to Image
//!
//! ```rust
//! use mediabridge::av::{PixelFormat, VideoPicture};
//! use mediabridge::raster::{image_to_picture, picture_to_image};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut picture = VideoPicture::new(PixelFormat::Rgb32, 4, 4)?;
//! picture.set_complete(PixelFormat::Rgb32, 4, 4, 0)?;
//!
//! let image = picture_to_image(&picture)?;
//! assert_eq!(image.pixel(0, 0), Some(0xff00_0000));
//!
//! let back = image_to_picture(&image, 40_000)?;
//! assert_eq!(back.pts(), 40_000);
//! # Ok(())
//! # }
//! ```
//!
//! ### Blank Frames and Sample Timing
//!
//! ```rust
//! use mediabridge::av::{samples_to_time_value, TimeUnit};
//! use mediabridge::frame::blank_frame;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let frame = blank_frame(320, 240, 16, 128, 128, 0)?;
//! assert!(frame.is_complete());
//!
//! let duration = samples_to_time_value(1024, 44_100)?;
//! assert_eq!(duration.get(TimeUnit::Milliseconds), 23);
//! # Ok(())
//! # }
//! ```
//!
//! ## Module Overview
//!
//! - `av`: pictures, packets, audio samples, time values and listener hooks
//! - `raster`: RGB32 picture <-> packed image conversion
//! - `frame`: blank YUV420P frames
//! - `utils`: byte/integer packing
//! - `config`: process-wide defaults for configured blank frames
//! - `error`: error type and result alias
//!
/// Audio/Video base types and utilities
pub mod av;

/// Configuration module
pub mod config;

/// Error types and utilities
pub mod error;

/// Blank YUV420P frames
pub mod frame;

/// RGB32 picture and packed image conversion
pub mod raster;

/// Common utilities and helper functions
pub mod utils;

pub use error::{BridgeError, Result};
