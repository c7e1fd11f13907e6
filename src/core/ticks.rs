use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{PlotError, PlotResult};

/// Upper bound on ticks generated for one axis by a fixed stride.
pub const MAX_FIXED_STRIDE_TICKS: usize = 1_000;
/// Upper bound on divisions requested from [`TickPolicy::Count`].
pub const MAX_COUNT_TICKS: usize = 1_000;

/// How tick positions along an axis are chosen.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TickPolicy {
    /// Ticks at every multiple of `step` inside the range, labeled with one decimal.
    FixedStride { step: f64 },
    /// `ticks` equal divisions of the range (`ticks + 1` positions), labeled `%.2g`-style.
    Count { ticks: usize },
}

impl Default for TickPolicy {
    fn default() -> Self {
        Self::FixedStride { step: 0.5 }
    }
}

impl TickPolicy {
    /// Tick values between `min` and `max` for this policy.
    #[must_use]
    pub fn ticks(self, min: f64, max: f64) -> Vec<f64> {
        match self {
            Self::FixedStride { step } => fixed_stride_ticks(min, max, step),
            Self::Count { ticks } => count_ticks(min, max, ticks),
        }
    }

    /// Rejects a zero or unbounded count and a non-positive or non-finite stride.
    pub fn validate(self) -> PlotResult<()> {
        match self {
            Self::FixedStride { step } if !step.is_finite() || step <= 0.0 => Err(
                PlotError::InvalidConfig(format!("tick step must be finite and > 0, got {step}")),
            ),
            Self::Count { ticks } if ticks == 0 || ticks > MAX_COUNT_TICKS => {
                Err(PlotError::InvalidConfig(format!(
                    "tick count must be in 1..={MAX_COUNT_TICKS}, got {ticks}"
                )))
            }
            _ => Ok(()),
        }
    }

    #[must_use]
    pub fn format(self, value: f64) -> String {
        match self {
            Self::FixedStride { .. } => format!("{:.1}", value + 0.0),
            Self::Count { .. } => format_general(value, 2),
        }
    }
}

/// Smallest multiple of `step` that is `>= value`.
///
/// Ceiling semantics hold for negative input as well: `-0.7` with step `0.5`
/// gives `-0.5`.
#[must_use]
pub fn ceil_to_step(value: f64, step: f64) -> f64 {
    (value / step).ceil() * step
}

/// Ticks at `start + k * step` for `start = ceil_to_step(min, step)` while `<= max`.
///
/// When the range would produce more than [`MAX_FIXED_STRIDE_TICKS`] ticks the
/// stride is widened tenfold until it fits.
#[must_use]
pub fn fixed_stride_ticks(min: f64, max: f64, step: f64) -> Vec<f64> {
    if !(max - min).is_finite() || !step.is_finite() || step <= 0.0 || max < min {
        return Vec::new();
    }

    let mut step = step;
    if (max - min) / step > MAX_FIXED_STRIDE_TICKS as f64 {
        warn!(
            requested_step = step,
            min, max, "tick stride widened to keep the tick count bounded"
        );
        while (max - min) / step > MAX_FIXED_STRIDE_TICKS as f64 {
            step *= 10.0;
        }
    }

    let start = ceil_to_step(min, step);
    let mut ticks = Vec::new();
    let mut k = 0u32;
    loop {
        let value = start + f64::from(k) * step;
        if value > max {
            break;
        }
        ticks.push(value);
        k += 1;
    }
    ticks
}

/// `ticks + 1` evenly spaced values from `min` to `max` inclusive.
///
/// Counts above [`MAX_COUNT_TICKS`] are clamped to it.
#[must_use]
pub fn count_ticks(min: f64, max: f64, ticks: usize) -> Vec<f64> {
    if ticks == 0 || !min.is_finite() || !max.is_finite() {
        return Vec::new();
    }
    if ticks > MAX_COUNT_TICKS {
        warn!(requested = ticks, "tick count clamped to {MAX_COUNT_TICKS}");
    }
    let ticks = ticks.min(MAX_COUNT_TICKS);
    let span = max - min;
    (0..=ticks)
        .map(|i| min + i as f64 * span / ticks as f64)
        .collect()
}

/// Formats like C's `%.{precision}g`: `precision` significant digits, trailing
/// zeros removed, exponent notation for very small or large magnitudes.
#[must_use]
pub fn format_general(value: f64, precision: usize) -> String {
    if !value.is_finite() {
        return format!("{value}");
    }
    let precision = precision.max(1);
    if value == 0.0 {
        return "0".to_owned();
    }

    // Exponent after rounding to `precision` significant digits.
    let scientific = format!("{:.*e}", precision - 1, value);
    let (mantissa, exponent) = match scientific.split_once('e') {
        Some(parts) => parts,
        None => return scientific,
    };
    let exponent: i32 = exponent.parse().unwrap_or(0);

    if exponent < -4 || exponent >= precision as i32 {
        let mantissa = trim_fraction(mantissa);
        let sign = if exponent < 0 { '-' } else { '+' };
        return format!("{mantissa}e{sign}{:02}", exponent.abs());
    }

    let decimals = (precision as i32 - 1 - exponent).max(0) as usize;
    trim_fraction(&format!("{value:.decimals$}")).to_owned()
}

fn trim_fraction(text: &str) -> &str {
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.')
    } else {
        text
    }
}
