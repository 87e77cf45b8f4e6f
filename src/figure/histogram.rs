//! Equal-width histogram binning.

use crate::error::{CellplotError, Result};

/// Largest accepted bin count.
pub const MAX_BINS: usize = 10_000;

/// One histogram bin, `[start, end)` except the last which is closed.
#[derive(Debug, Clone, PartialEq)]
pub struct HistogramBin {
    /// Left edge.
    pub start: f64,
    /// Right edge.
    pub end: f64,
    /// Number of samples in the bin.
    pub count: usize,
}

/// Count `data` into `bins` equal-width bins spanning its range.
///
/// NaN samples are ignored. An empty sample set spans `[0, 1]` and a
/// constant one is widened by half a unit on each side.
pub fn bin_counts(data: &[f64], bins: usize) -> Result<Vec<HistogramBin>> {
    if bins == 0 {
        return Err(CellplotError::NonPositiveBins { bins: 0 });
    }
    if bins > MAX_BINS {
        return Err(CellplotError::TooManyBins {
            bins: bins as u64,
            max: MAX_BINS,
        });
    }

    let samples: Vec<f64> = data.iter().copied().filter(|v| !v.is_nan()).collect();
    if let Some(v) = samples.iter().find(|v| v.is_infinite()) {
        return Err(CellplotError::NonFiniteRange { value: *v });
    }

    let (mut lo, mut hi) = samples
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), &v| {
            (min.min(v), max.max(v))
        });
    if samples.is_empty() {
        lo = 0.0;
        hi = 1.0;
    } else if lo == hi {
        lo -= 0.5;
        hi += 0.5;
    }

    let width = (hi - lo) / bins as f64;
    let mut result: Vec<HistogramBin> = (0..bins)
        .map(|i| HistogramBin {
            start: lo + width * i as f64,
            end: if i + 1 == bins {
                hi
            } else {
                lo + width * (i + 1) as f64
            },
            count: 0,
        })
        .collect();

    for v in samples {
        let idx = (((v - lo) / width) as usize).min(bins - 1);
        result[idx].count += 1;
    }

    Ok(result)
}
