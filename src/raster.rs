//! Conversions between RGB32 [`VideoPicture`]s and [`PackedImage`]s, the
//! application-side image type with one packed ARGB integer per pixel.

use crate::av::{PixelFormat, VideoPicture};
use crate::error::{BridgeError, Result};
use crate::utils::{bytes_to_ints, ints_to_bytes};
use image::RgbaImage;

/// Bit masks locating each channel inside a packed pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChannelMasks {
    /// Red channel bits.
    pub red: u32,
    /// Green channel bits.
    pub green: u32,
    /// Blue channel bits.
    pub blue: u32,
    /// Alpha channel bits.
    pub alpha: u32,
}

/// The layout RGB32 pictures decode to: `0xAARRGGBB`.
pub const ARGB_MASKS: ChannelMasks = ChannelMasks {
    red: 0x00ff_0000,
    green: 0x0000_ff00,
    blue: 0x0000_00ff,
    alpha: 0xff00_0000,
};

const OPAQUE: u32 = 0xff00_0000;

/// Backing storage of a [`PackedImage`].
///
/// Only [`Bytes`](Self::Bytes) and [`Ints`](Self::Ints) can be turned back
/// into a picture.
#[derive(Debug, Clone, PartialEq)]
pub enum ImageStorage {
    /// Raw pixel bytes in native RGB32 order.
    Bytes(Vec<u8>),
    /// One packed pixel per integer.
    Ints(Vec<u32>),
    /// 16 bits per sample.
    Shorts(Vec<u16>),
    /// Floating point samples.
    Floats(Vec<f32>),
}

impl ImageStorage {
    fn kind(&self) -> &'static str {
        match self {
            ImageStorage::Bytes(_) => "bytes",
            ImageStorage::Ints(_) => "ints",
            ImageStorage::Shorts(_) => "shorts",
            ImageStorage::Floats(_) => "floats",
        }
    }
}

/// A fixed-layout image of packed 32-bit pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct PackedImage {
    width: u32,
    height: u32,
    masks: ChannelMasks,
    storage: ImageStorage,
}

impl PackedImage {
    /// Wraps `storage` as a `width` by `height` image with [`ARGB_MASKS`].
    pub fn new(width: u32, height: u32, storage: ImageStorage) -> Self {
        Self {
            width,
            height,
            masks: ARGB_MASKS,
            storage,
        }
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Where each channel sits inside a packed pixel.
    pub fn masks(&self) -> ChannelMasks {
        self.masks
    }

    /// The backing pixel storage.
    pub fn storage(&self) -> &ImageStorage {
        &self.storage
    }

    /// The packed pixel at (`x`, `y`), if the storage holds packed pixels and
    /// the coordinates are inside the image.
    pub fn pixel(&self, x: u32, y: u32) -> Option<u32> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let index = y as usize * self.width as usize + x as usize;
        match &self.storage {
            ImageStorage::Ints(ints) => ints.get(index).copied(),
            ImageStorage::Bytes(bytes) => {
                let start = index * 4;
                let group: [u8; 4] = bytes.get(start..start + 4)?.try_into().ok()?;
                Some(u32::from_ne_bytes(group))
            }
            _ => None,
        }
    }

    /// Copies the pixels into an [`RgbaImage`].
    pub fn to_rgba_image(&self) -> Result<RgbaImage> {
        let ints = self.packed_pixels()?;
        let mut rgba = Vec::with_capacity(ints.len() * 4);
        for pixel in ints {
            rgba.extend_from_slice(&[
                (pixel >> 16) as u8,
                (pixel >> 8) as u8,
                pixel as u8,
                (pixel >> 24) as u8,
            ]);
        }
        RgbaImage::from_raw(self.width, self.height, rgba).ok_or_else(|| {
            BridgeError::InvalidArgument(format!(
                "image storage does not hold {}x{} pixels",
                self.width, self.height
            ))
        })
    }

    /// Packs an [`RgbaImage`] into integer storage.
    pub fn from_rgba_image(image: &RgbaImage) -> Self {
        let ints = image
            .pixels()
            .map(|p| {
                let [r, g, b, a] = p.0;
                (a as u32) << 24 | (r as u32) << 16 | (g as u32) << 8 | b as u32
            })
            .collect();
        Self::new(image.width(), image.height(), ImageStorage::Ints(ints))
    }

    fn packed_pixels(&self) -> Result<Vec<u32>> {
        match &self.storage {
            ImageStorage::Ints(ints) => Ok(ints.clone()),
            ImageStorage::Bytes(bytes) => bytes_to_ints(bytes),
            other => Err(unsupported_storage(other)),
        }
    }
}

/// Converts an RGB32 picture into a [`PackedImage`] with integer storage.
///
/// Row padding is dropped and every pixel is made fully opaque. Pictures in
/// any other format are rejected rather than converted.
pub fn picture_to_image(picture: &VideoPicture) -> Result<PackedImage> {
    if picture.format() != PixelFormat::Rgb32 {
        return Err(BridgeError::InvalidArgument(format!(
            "the video picture is of type {} but is required to be of type {}",
            picture.format(),
            PixelFormat::Rgb32
        )));
    }

    let (width, height) = (picture.width(), picture.height());
    let mut bytes = Vec::with_capacity(width as usize * height as usize * 4);
    for row in picture.rows(0) {
        bytes.extend_from_slice(row);
    }

    let mut ints = bytes_to_ints(&bytes)?;
    for pixel in &mut ints {
        *pixel |= OPAQUE;
    }

    log::debug!("converted {}x{} picture to packed image", width, height);
    Ok(PackedImage::new(width, height, ImageStorage::Ints(ints)))
}

/// Converts a [`PackedImage`] into a new RGB32 picture stamped with `pts`.
///
/// Byte storage is copied as is, integer storage is unpacked in native byte
/// order. Other storage kinds, or storage that doesn't hold exactly
/// `width * height` pixels, are rejected.
pub fn image_to_picture(image: &PackedImage, pts: i64) -> Result<VideoPicture> {
    let bytes = match &image.storage {
        ImageStorage::Bytes(bytes) => bytes.clone(),
        ImageStorage::Ints(ints) => ints_to_bytes(ints),
        other => return Err(unsupported_storage(other)),
    };

    let (width, height) = (image.width, image.height);
    let row_bytes = width as usize * 4;
    let expected = row_bytes * height as usize;
    if bytes.len() != expected {
        return Err(BridgeError::InvalidArgument(format!(
            "{}x{} image needs {} bytes of pixels, storage has {}",
            width,
            height,
            expected,
            bytes.len()
        )));
    }

    let mut picture = VideoPicture::new(PixelFormat::Rgb32, width, height)?;
    for (dst, src) in picture.rows_mut(0).zip(bytes.chunks_exact(row_bytes)) {
        dst.copy_from_slice(src);
    }
    picture.set_complete(PixelFormat::Rgb32, width, height, pts)?;

    log::debug!("converted {}x{} packed image to picture", width, height);
    Ok(picture)
}

fn unsupported_storage(storage: &ImageStorage) -> BridgeError {
    BridgeError::InvalidArgument(format!(
        "unsupported image storage type: {}",
        storage.kind()
    ))
}
