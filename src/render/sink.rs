use std::path::Path;

use crate::error::PlotResult;

/// Destination for a finished RGB raster.
///
/// `pixels` holds `height` rows of `row_stride` bytes each, with `channels`
/// interleaved bytes per pixel at the start of each row.
pub trait ImageSink {
    fn write_rgb(
        &mut self,
        path: &Path,
        width: u32,
        height: u32,
        channels: u8,
        pixels: &[u8],
        row_stride: usize,
    ) -> PlotResult<()>;
}

#[cfg(feature = "png-backend")]
mod png_sink {
    use std::borrow::Cow;
    use std::fs::File;
    use std::io::{BufWriter, Write};
    use std::path::Path;

    use tracing::debug;

    use super::ImageSink;
    use crate::error::{PlotError, PlotResult};

    /// Writes 8-bit PNG files through the `png` encoder.
    #[derive(Debug, Default, Clone, Copy)]
    pub struct PngSink;

    impl PngSink {
        #[must_use]
        pub fn new() -> Self {
            Self
        }

        /// Encodes the raster as a PNG stream into `writer`.
        pub fn encode<W: Write>(
            writer: W,
            width: u32,
            height: u32,
            channels: u8,
            pixels: &[u8],
            row_stride: usize,
        ) -> PlotResult<()> {
            let color = match channels {
                1 => png::ColorType::Grayscale,
                3 => png::ColorType::Rgb,
                4 => png::ColorType::Rgba,
                other => {
                    return Err(PlotError::Encoding(format!(
                        "unsupported channel count {other}"
                    )));
                }
            };
            if width == 0 || height == 0 {
                return Err(PlotError::InvalidCanvas { width, height });
            }
            let row_len = packed_row_len(width, height, channels, pixels, row_stride)?;

            let data: Cow<'_, [u8]> = if row_stride == row_len {
                Cow::Borrowed(&pixels[..row_len * height as usize])
            } else {
                Cow::Owned(
                    pixels
                        .chunks(row_stride)
                        .take(height as usize)
                        .flat_map(|row| &row[..row_len])
                        .copied()
                        .collect(),
                )
            };

            let mut encoder = png::Encoder::new(writer, width, height);
            encoder.set_color(color);
            encoder.set_depth(png::BitDepth::Eight);
            let mut png_writer = encoder
                .write_header()
                .map_err(|err| PlotError::Encoding(err.to_string()))?;
            png_writer
                .write_image_data(&data)
                .map_err(|err| PlotError::Encoding(err.to_string()))?;
            png_writer
                .finish()
                .map_err(|err| PlotError::Encoding(err.to_string()))
        }
    }

    /// Checks that a raster description fits its buffer and returns the packed row length.
    fn packed_row_len(
        width: u32,
        height: u32,
        channels: u8,
        pixels: &[u8],
        row_stride: usize,
    ) -> PlotResult<usize> {
        let row_len = (width as usize)
            .checked_mul(usize::from(channels))
            .ok_or(PlotError::InvalidCanvas { width, height })?;
        if row_stride < row_len {
            return Err(PlotError::Encoding(format!(
                "row stride {row_stride} is shorter than a row of {row_len} bytes"
            )));
        }
        let needed = match (height as usize).checked_sub(1) {
            Some(last_row) => last_row
                .checked_mul(row_stride)
                .and_then(|start| start.checked_add(row_len))
                .ok_or(PlotError::InvalidCanvas { width, height })?,
            None => 0,
        };
        if pixels.len() < needed {
            return Err(PlotError::Encoding(format!(
                "pixel buffer holds {} bytes, raster needs {needed}",
                pixels.len()
            )));
        }
        Ok(row_len)
    }

    impl ImageSink for PngSink {
        fn write_rgb(
            &mut self,
            path: &Path,
            width: u32,
            height: u32,
            channels: u8,
            pixels: &[u8],
            row_stride: usize,
        ) -> PlotResult<()> {
            let file = File::create(path)?;
            let mut writer = BufWriter::new(file);
            Self::encode(&mut writer, width, height, channels, pixels, row_stride)?;
            writer.flush()?;
            debug!(path = %path.display(), width, height, "png written");
            Ok(())
        }
    }
}

#[cfg(feature = "png-backend")]
pub use png_sink::PngSink;
