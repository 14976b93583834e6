use super::{PixelFormat, NO_PTS};
use crate::error::{BridgeError, Result};

const MAX_PLANES: usize = 3;

/// A raw video frame: one contiguous byte buffer split into planes.
///
/// Each plane starts right after the previous one and every row of a plane
/// occupies [`line_size`](Self::line_size) bytes, which may be larger than the
/// visible row when rows are aligned. A picture starts out incomplete; writers
/// fill the bytes and then call [`set_complete`](Self::set_complete).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoPicture {
    format: PixelFormat,
    width: u32,
    height: u32,
    line_sizes: [usize; MAX_PLANES],
    data: Vec<u8>,
    pts: i64,
    complete: bool,
}

impl VideoPicture {
    /// Allocates a zeroed picture with tightly packed rows.
    pub fn new(format: PixelFormat, width: u32, height: u32) -> Result<Self> {
        Self::with_alignment(format, width, height, 1)
    }

    /// Allocates a zeroed picture whose line sizes are rounded up to a
    /// multiple of `alignment`.
    pub fn with_alignment(
        format: PixelFormat,
        width: u32,
        height: u32,
        alignment: usize,
    ) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(BridgeError::InvalidArgument(format!(
                "picture dimensions must be non-zero, got {}x{}",
                width, height
            )));
        }
        if !alignment.is_power_of_two() {
            return Err(BridgeError::InvalidArgument(format!(
                "alignment must be a power of two, got {}",
                alignment
            )));
        }

        let mut line_sizes = [0usize; MAX_PLANES];
        let mut size = 0usize;
        for (plane, line_size) in line_sizes.iter_mut().enumerate().take(format.num_planes()) {
            let (row_bytes, rows) = format
                .plane_geometry(plane, width as usize, height as usize)
                .ok_or(BridgeError::Allocation(usize::MAX))?;
            *line_size = align_up(row_bytes, alignment).ok_or(BridgeError::Allocation(usize::MAX))?;
            size = line_size
                .checked_mul(rows)
                .and_then(|plane_size| size.checked_add(plane_size))
                .ok_or(BridgeError::Allocation(usize::MAX))?;
        }

        let mut data = Vec::new();
        data.try_reserve_exact(size)
            .map_err(|_| BridgeError::Allocation(size))?;
        data.resize(size, 0);

        log::debug!(
            "allocated {} picture {}x{} ({} bytes, line sizes {:?})",
            format,
            width,
            height,
            size,
            &line_sizes[..format.num_planes()]
        );

        Ok(Self {
            format,
            width,
            height,
            line_sizes,
            data,
            pts: NO_PTS,
            complete: false,
        })
    }

    /// Pixel layout of the buffer.
    pub fn format(&self) -> PixelFormat {
        self.format
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Presentation time in microseconds, or [`NO_PTS`].
    pub fn pts(&self) -> i64 {
        self.pts
    }

    /// Whether [`set_complete`](Self::set_complete) has been called.
    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// Total buffer size in bytes, padding included.
    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// Bytes per row of `plane`, padding included. Zero for planes the format
    /// doesn't have.
    pub fn line_size(&self, plane: usize) -> usize {
        self.line_sizes.get(plane).copied().unwrap_or(0)
    }

    /// The whole buffer, every plane and padding included.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Mutable access to the whole buffer.
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// The bytes of one plane, padding included.
    pub fn plane(&self, plane: usize) -> Option<&[u8]> {
        let range = self.plane_range(plane)?;
        Some(&self.data[range])
    }

    /// Mutable bytes of one plane, padding included.
    pub fn plane_mut(&mut self, plane: usize) -> Option<&mut [u8]> {
        let range = self.plane_range(plane)?;
        Some(&mut self.data[range])
    }

    /// Iterates the visible part of every row of `plane`, skipping padding.
    pub fn rows(&self, plane: usize) -> impl Iterator<Item = &[u8]> + '_ {
        let (row_bytes, _) = self
            .format
            .plane_geometry(plane, self.width as usize, self.height as usize)
            .unwrap_or((0, 0));
        let line_size = self.line_size(plane);
        self.plane(plane)
            .unwrap_or(&[])
            .chunks_exact(line_size.max(1))
            .map(move |row| &row[..row_bytes])
    }

    /// Mutable counterpart of [`rows`](Self::rows).
    pub fn rows_mut(&mut self, plane: usize) -> impl Iterator<Item = &mut [u8]> + '_ {
        let (row_bytes, _) = self
            .format
            .plane_geometry(plane, self.width as usize, self.height as usize)
            .unwrap_or((0, 0));
        let line_size = self.line_size(plane);
        self.plane_mut(plane)
            .unwrap_or(&mut [])
            .chunks_exact_mut(line_size.max(1))
            .map(move |row| &mut row[..row_bytes])
    }

    /// Marks the picture complete and stamps its timestamp.
    ///
    /// The format and dimensions must describe the buffer that was allocated;
    /// the picture is never reinterpreted as a different layout.
    pub fn set_complete(&mut self, format: PixelFormat, width: u32, height: u32, pts: i64) -> Result<()> {
        if format != self.format || width != self.width || height != self.height {
            return Err(BridgeError::InvalidArgument(format!(
                "cannot complete a {} {}x{} picture as {} {}x{}",
                self.format, self.width, self.height, format, width, height
            )));
        }
        self.pts = pts;
        self.complete = true;
        Ok(())
    }

    fn plane_range(&self, plane: usize) -> Option<std::ops::Range<usize>> {
        if plane >= self.format.num_planes() {
            return None;
        }
        let mut start = 0;
        for p in 0..=plane {
            let (_, rows) = self
                .format
                .plane_geometry(p, self.width as usize, self.height as usize)?;
            let len = self.line_sizes[p] * rows;
            if p == plane {
                return Some(start..start + len);
            }
            start += len;
        }
        None
    }
}

fn align_up(value: usize, alignment: usize) -> Option<usize> {
    let mask = alignment - 1;
    value.checked_add(mask).map(|v| v & !mask)
}
