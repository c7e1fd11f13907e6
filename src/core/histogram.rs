use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::scale::LinearScale;
use crate::core::series::SeriesSource;
use crate::error::{PlotError, PlotResult};

/// Bin counts for samples falling inside `[min, max]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Histogram {
    counts: Vec<usize>,
    dropped: usize,
}

impl Histogram {
    /// Assigns each sample to `floor((value - min) / (max - min) * bins)`.
    ///
    /// A sample exactly on `max` lands in the last bin. Samples outside the
    /// range and non-finite samples are dropped and counted in [`Histogram::dropped`].
    pub fn compute<S: SeriesSource + ?Sized>(
        samples: &S,
        bins: usize,
        min: f64,
        max: f64,
    ) -> PlotResult<Self> {
        if bins == 0 {
            return Err(PlotError::InvalidData(
                "histogram needs at least one bin".to_owned(),
            ));
        }
        let scale = LinearScale::new(min, max)?;

        let mut counts = Vec::new();
        counts
            .try_reserve_exact(bins)
            .map_err(|_| PlotError::AllocationFailed {
                bytes: bins.saturating_mul(std::mem::size_of::<usize>()),
            })?;
        counts.resize(bins, 0);

        let mut dropped = 0usize;
        for index in 0..samples.len() {
            let Some(value) = samples.value(index) else {
                continue;
            };
            if !value.is_finite() || value < min || value > max {
                dropped += 1;
                continue;
            }

            let bin = (scale.normalize(value) * bins as f64).floor() as usize;
            counts[bin.min(bins - 1)] += 1;
        }

        debug!(bins, total = samples.len(), dropped, "computed histogram");
        Ok(Self { counts, dropped })
    }

    #[must_use]
    pub fn counts(&self) -> &[usize] {
        &self.counts
    }

    #[must_use]
    pub fn bins(&self) -> usize {
        self.counts.len()
    }

    /// Number of samples counted into some bin.
    #[must_use]
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// Number of samples rejected as out of range or non-finite.
    #[must_use]
    pub fn dropped(&self) -> usize {
        self.dropped
    }

    /// Largest bin count, or 1 when every bin is empty so it can divide safely.
    #[must_use]
    pub fn scale_max(&self) -> usize {
        self.counts.iter().copied().max().unwrap_or(0).max(1)
    }
}
