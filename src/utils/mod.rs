//! # Utility Functions and Types
//!
//! Helpers shared by the picture and image conversions.
//!
//! ## Byte/Integer Packing
//!
//! The packing module reinterprets byte buffers as packed 32-bit pixels and
//! back, following the host's native byte order:
//!
//! ```rust
//! use mediabridge::utils::{bytes_to_ints, ints_to_bytes};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let bytes = vec![0xff, 0x00, 0x00, 0xff, 0x00, 0xff, 0x00, 0xff];
//! let pixels = bytes_to_ints(&bytes)?;
//! assert_eq!(pixels.len(), 2);
//! assert_eq!(ints_to_bytes(&pixels), bytes);
//! # Ok(())
//! # }
//! ```

/// Endian-aware byte/`u32` array packing
pub mod packing;

pub use packing::*;
