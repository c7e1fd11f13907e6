mod canvas;
mod canvas_renderer;
mod colormap;
pub mod font;
mod frame;
mod null_renderer;
mod primitives;
pub mod raster;
mod sink;
pub mod text;

pub use canvas::{CHANNELS, Canvas};
pub use canvas_renderer::{CanvasRenderer, RasterRenderStats};
pub use colormap::Colormap;
pub use frame::RenderFrame;
pub use null_renderer::NullRenderer;
pub use primitives::{
    CirclePrimitive, Color, LinePrimitive, RectPrimitive, TextOrientation, TextPrimitive,
};
#[cfg(feature = "png-backend")]
pub use sink::PngSink;
pub use sink::ImageSink;

use crate::error::PlotResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized `RenderFrame`, so chart layout code
/// never touches pixels directly.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> PlotResult<()>;
}
