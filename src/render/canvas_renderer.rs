use crate::error::PlotResult;
use crate::render::raster::{draw_line, fill_circle, fill_rect};
use crate::render::text::{draw_text, draw_text_vertical};
use crate::render::{Canvas, RenderFrame, Renderer, TextOrientation};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RasterRenderStats {
    pub rects_drawn: usize,
    pub lines_drawn: usize,
    pub circles_drawn: usize,
    pub texts_drawn: usize,
}

/// Rasterizes frames into a borrowed [`Canvas`].
#[derive(Debug)]
pub struct CanvasRenderer<'a> {
    canvas: &'a mut Canvas,
    last_stats: RasterRenderStats,
}

impl<'a> CanvasRenderer<'a> {
    #[must_use]
    pub fn new(canvas: &'a mut Canvas) -> Self {
        Self {
            canvas,
            last_stats: RasterRenderStats::default(),
        }
    }

    #[must_use]
    pub fn last_stats(&self) -> RasterRenderStats {
        self.last_stats
    }
}

impl Renderer for CanvasRenderer<'_> {
    fn render(&mut self, frame: &RenderFrame) -> PlotResult<()> {
        frame.validate()?;

        for rect in &frame.rects {
            fill_rect(self.canvas, rect.x, rect.y, rect.width, rect.height, rect.color);
        }
        for line in &frame.lines {
            draw_line(self.canvas, line.x1, line.y1, line.x2, line.y2, line.color);
        }
        for circle in &frame.circles {
            fill_circle(self.canvas, circle.cx, circle.cy, circle.radius, circle.color);
        }
        for text in &frame.texts {
            match text.orientation {
                TextOrientation::Horizontal => {
                    draw_text(self.canvas, text.x, text.y, &text.text, text.color);
                }
                TextOrientation::Vertical => {
                    draw_text_vertical(self.canvas, text.x, text.y, &text.text, text.color);
                }
            }
        }

        self.last_stats = RasterRenderStats {
            rects_drawn: frame.rects.len(),
            lines_drawn: frame.lines.len(),
            circles_drawn: frame.circles.len(),
            texts_drawn: frame.texts.len(),
        };
        Ok(())
    }
}
