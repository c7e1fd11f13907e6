use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::core::series::{Series, SeriesSource};
use crate::core::types::AxisLimits;

/// Margin policy used when fitting axis limits to data.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AutoScaleTuning {
    /// Fraction of the data span added on each side.
    pub margin_ratio: f64,
    /// Margin used instead when the computed margin is exactly zero.
    pub fallback_margin: f64,
}

impl Default for AutoScaleTuning {
    fn default() -> Self {
        Self {
            margin_ratio: 0.05,
            fallback_margin: 1.0,
        }
    }
}

/// Running min/max over finite samples.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Extent {
    min: f64,
    max: f64,
}

impl Extent {
    fn empty() -> Self {
        Self {
            min: f64::INFINITY,
            max: f64::NEG_INFINITY,
        }
    }

    fn include(&mut self, value: f64) {
        self.min = self.min.min(value);
        self.max = self.max.max(value);
    }

    fn is_empty(self) -> bool {
        self.min > self.max
    }

    /// Expands by `margin_ratio * span` per side, or by the fallback margin
    /// when that is zero. An empty extent behaves as a single sample at 0.
    fn padded(self, tuning: AutoScaleTuning) -> (f64, f64) {
        let (min, max) = if self.is_empty() {
            (0.0, 0.0)
        } else {
            (self.min, self.max)
        };

        let mut margin = (max - min) * tuning.margin_ratio;
        if margin == 0.0 {
            margin = tuning.fallback_margin;
        }
        (min - margin, max + margin)
    }
}

/// Fits axis limits to one series with the default 5% margin.
#[must_use]
pub fn auto_scale<X, Y>(series: Series<'_, X, Y>) -> AxisLimits
where
    X: SeriesSource + ?Sized,
    Y: SeriesSource + ?Sized,
{
    auto_scale_multi_tuned([series], AutoScaleTuning::default())
}

/// Fits axis limits to the union of several series with the default 5% margin.
#[must_use]
pub fn auto_scale_multi<'a, X, Y, I>(series: I) -> AxisLimits
where
    X: SeriesSource + ?Sized + 'a,
    Y: SeriesSource + ?Sized + 'a,
    I: IntoIterator<Item = Series<'a, X, Y>>,
{
    auto_scale_multi_tuned(series, AutoScaleTuning::default())
}

/// Fits axis limits to the union of several series.
///
/// Non-finite samples are ignored. Each axis is padded independently; a
/// constant axis (or no finite samples at all) gets the fallback margin.
#[must_use]
pub fn auto_scale_multi_tuned<'a, X, Y, I>(series: I, tuning: AutoScaleTuning) -> AxisLimits
where
    X: SeriesSource + ?Sized + 'a,
    Y: SeriesSource + ?Sized + 'a,
    I: IntoIterator<Item = Series<'a, X, Y>>,
{
    let mut x_extent = Extent::empty();
    let mut y_extent = Extent::empty();
    let mut series_count = 0usize;
    let mut skipped = 0usize;

    for current in series {
        series_count += 1;
        for point in current.points() {
            if !point.is_finite() {
                skipped += 1;
                continue;
            }
            x_extent.include(point.x);
            y_extent.include(point.y);
        }
    }

    if skipped > 0 {
        trace!(skipped, "ignored non-finite samples during autoscale");
    }

    let (xmin, xmax) = x_extent.padded(tuning);
    let (ymin, ymax) = y_extent.padded(tuning);
    let limits = AxisLimits::new(xmin, xmax, ymin, ymax);
    debug!(series_count, ?limits, "autoscaled axis limits");
    limits
}

/// Fits a padded `(min, max)` range to raw samples, as used for histogram x ranges.
#[must_use]
pub fn auto_range<S: SeriesSource + ?Sized>(samples: &S, tuning: AutoScaleTuning) -> (f64, f64) {
    let mut extent = Extent::empty();
    for index in 0..samples.len() {
        if let Some(value) = samples.value(index).filter(|value| value.is_finite()) {
            extent.include(value);
        }
    }
    extent.padded(tuning)
}
