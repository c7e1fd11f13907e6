use serde::{Deserialize, Serialize};

use crate::core::AutoScaleTuning;
use crate::error::{PlotError, PlotResult};
use crate::render::Color;

use super::{AxisStyle, LegendLayout};

pub const FIGURE_CONFIG_JSON_SCHEMA_V1: u32 = 1;

/// Serializable setup for a [`super::Figure`].
///
/// Missing fields fall back to their defaults when parsed, so a config file
/// only needs to mention what it changes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FigureConfig {
    #[serde(default = "default_width")]
    pub width: u32,
    #[serde(default = "default_height")]
    pub height: u32,
    #[serde(default = "default_background")]
    pub background: Color,
    /// Inset in pixels between the canvas edge and the plot area.
    #[serde(default)]
    pub margin: u32,
    #[serde(default)]
    pub axis: AxisStyle,
    #[serde(default)]
    pub legend: LegendLayout,
    #[serde(default = "default_legend_capacity")]
    pub legend_capacity: usize,
    #[serde(default)]
    pub autoscale: AutoScaleTuning,
}

impl Default for FigureConfig {
    fn default() -> Self {
        Self::new(default_width(), default_height())
    }
}

impl FigureConfig {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            background: default_background(),
            margin: 0,
            axis: AxisStyle::default(),
            legend: LegendLayout::default(),
            legend_capacity: default_legend_capacity(),
            autoscale: AutoScaleTuning::default(),
        }
    }

    #[must_use]
    pub fn with_background(mut self, background: Color) -> Self {
        self.background = background;
        self
    }

    #[must_use]
    pub fn with_margin(mut self, margin: u32) -> Self {
        self.margin = margin;
        self
    }

    #[must_use]
    pub fn with_axis_style(mut self, axis: AxisStyle) -> Self {
        self.axis = axis;
        self
    }

    #[must_use]
    pub fn with_legend_layout(mut self, legend: LegendLayout) -> Self {
        self.legend = legend;
        self
    }

    #[must_use]
    pub fn with_legend_capacity(mut self, legend_capacity: usize) -> Self {
        self.legend_capacity = legend_capacity;
        self
    }

    #[must_use]
    pub fn with_autoscale_tuning(mut self, autoscale: AutoScaleTuning) -> Self {
        self.autoscale = autoscale;
        self
    }

    pub fn validate(&self) -> PlotResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(PlotError::InvalidConfig(format!(
                "figure size must be non-zero, got {}x{}",
                self.width, self.height
            )));
        }
        self.axis.tick_policy.validate()?;
        let tuning = self.autoscale;
        if !tuning.margin_ratio.is_finite()
            || tuning.margin_ratio < 0.0
            || !tuning.fallback_margin.is_finite()
            || tuning.fallback_margin <= 0.0
        {
            return Err(PlotError::InvalidConfig(
                "autoscale margins must be finite, with a positive fallback".to_owned(),
            ));
        }
        Ok(())
    }

    pub fn to_json_pretty(&self) -> PlotResult<String> {
        let payload = FigureConfigJsonContractV1 {
            schema_version: FIGURE_CONFIG_JSON_SCHEMA_V1,
            config: *self,
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            PlotError::InvalidConfig(format!("failed to serialize figure config: {e}"))
        })
    }

    /// Parses either a versioned contract or a bare config object.
    pub fn from_json_str(input: &str) -> PlotResult<Self> {
        let value: serde_json::Value = serde_json::from_str(input).map_err(|e| {
            PlotError::InvalidConfig(format!("failed to parse figure config json: {e}"))
        })?;

        let config = if value.get("schema_version").is_some() {
            let payload: FigureConfigJsonContractV1 =
                serde_json::from_value(value).map_err(|e| {
                    PlotError::InvalidConfig(format!("invalid figure config contract: {e}"))
                })?;
            if payload.schema_version != FIGURE_CONFIG_JSON_SCHEMA_V1 {
                return Err(PlotError::InvalidConfig(format!(
                    "unsupported figure config schema version: {}",
                    payload.schema_version
                )));
            }
            payload.config
        } else {
            serde_json::from_value(value)
                .map_err(|e| PlotError::InvalidConfig(format!("invalid figure config: {e}")))?
        };

        config.validate()?;
        Ok(config)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
struct FigureConfigJsonContractV1 {
    schema_version: u32,
    config: FigureConfig,
}

fn default_width() -> u32 {
    800
}

fn default_height() -> u32 {
    600
}

fn default_background() -> Color {
    Color::WHITE
}

fn default_legend_capacity() -> usize {
    8
}
