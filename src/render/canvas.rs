use std::path::Path;

use tracing::debug;

use crate::error::{PlotError, PlotResult};
use crate::render::Color;
use crate::render::sink::ImageSink;

/// Number of interleaved channels per pixel.
pub const CHANNELS: usize = 3;

/// Fixed-size RGB pixel buffer, row-major, 3 bytes per pixel.
///
/// The buffer length is always `3 * width * height`. Writes outside
/// `[0, width) x [0, height)` are dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl Canvas {
    /// Creates a white canvas.
    pub fn new(width: u32, height: u32) -> PlotResult<Self> {
        Self::with_background(width, height, Color::WHITE)
    }

    pub fn with_background(width: u32, height: u32, background: Color) -> PlotResult<Self> {
        let invalid = || PlotError::InvalidCanvas { width, height };
        if width == 0 || height == 0 {
            return Err(invalid());
        }
        let bytes = usize::try_from(width)
            .ok()
            .and_then(|w| w.checked_mul(usize::try_from(height).ok()?))
            .and_then(|area| area.checked_mul(CHANNELS))
            .ok_or_else(invalid)?;

        let mut pixels = Vec::new();
        pixels
            .try_reserve_exact(bytes)
            .map_err(|_| PlotError::AllocationFailed { bytes })?;
        pixels.resize(bytes, 0);

        let mut canvas = Self {
            width,
            height,
            pixels,
        };
        canvas.clear(background);
        debug!(width, height, "created canvas");
        Ok(canvas)
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Bytes per pixel row.
    #[must_use]
    pub fn row_stride(&self) -> usize {
        self.width as usize * CHANNELS
    }

    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.pixels
    }

    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.pixels
    }

    pub fn clear(&mut self, color: Color) {
        let bytes = color.to_bytes();
        for pixel in self.pixels.chunks_exact_mut(CHANNELS) {
            pixel.copy_from_slice(&bytes);
        }
    }

    /// Writes one pixel; a no-op outside the canvas.
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        if let Some(offset) = self.offset(x, y) {
            self.pixels[offset..offset + CHANNELS].copy_from_slice(&color.to_bytes());
        }
    }

    #[must_use]
    pub fn pixel(&self, x: i32, y: i32) -> Option<Color> {
        let offset = self.offset(x, y)?;
        Some(Color::rgb(
            self.pixels[offset],
            self.pixels[offset + 1],
            self.pixels[offset + 2],
        ))
    }

    /// Paints a run of pixels on row `y` from `x_start` to `x_end` inclusive.
    ///
    /// Both ends must already be clipped to the canvas.
    pub(crate) fn fill_span(&mut self, y: i32, x_start: i32, x_end: i32, color: Color) {
        let (Some(start), Some(end)) = (self.offset(x_start, y), self.offset(x_end, y)) else {
            return;
        };
        let bytes = color.to_bytes();
        for pixel in self.pixels[start..end + CHANNELS].chunks_exact_mut(CHANNELS) {
            pixel.copy_from_slice(&bytes);
        }
    }

    /// Hands the pixel buffer to `sink`, which encodes it to `path`.
    pub fn save<S: ImageSink + ?Sized>(&self, path: impl AsRef<Path>, sink: &mut S) -> PlotResult<()> {
        let path = path.as_ref();
        debug!(path = %path.display(), width = self.width, height = self.height, "saving canvas");
        sink.write_rgb(
            path,
            self.width,
            self.height,
            CHANNELS as u8,
            &self.pixels,
            self.row_stride(),
        )
    }

    fn offset(&self, x: i32, y: i32) -> Option<usize> {
        let x = u32::try_from(x).ok().filter(|&x| x < self.width)?;
        let y = u32::try_from(y).ok().filter(|&y| y < self.height)?;
        Some((y as usize * self.width as usize + x as usize) * CHANNELS)
    }
}
