// Streaming absolute/relative error accumulator

use crate::diff::decades::DecadeHistogram;
use crate::diff::tolerance::pair_error;

/// Largest value seen so far and the position where it first appeared.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MaxTracker {
    pub value: f32,
    pub position: u64,
}

impl MaxTracker {
    /// Record `value` at `position` if it strictly beats the current maximum.
    ///
    /// Equal values never displace the earlier position, so the first
    /// occurrence of the final maximum is kept.
    #[inline]
    pub fn offer(&mut self, value: f32, position: u64) {
        if value > self.value {
            self.value = value;
            self.position = position;
        }
    }
}

/// Running error aggregates over a stream of `(a, b)` pairs.
///
/// Sums are kept in single precision. NaN inputs are accepted: they still
/// advance `count` and poison the sums, but never win a maximum or enter the
/// histogram.
#[derive(Debug, Clone, Default)]
pub struct ErrorAccumulator {
    count: u64,
    abs_sum: f32,
    abs_max: MaxTracker,
    rel_sum: f32,
    rel_max: MaxTracker,
    decades: DecadeHistogram,
}

impl ErrorAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one pair into the aggregates. Its position is the current count.
    pub fn observe(&mut self, a: f32, b: f32) {
        let position = self.count;
        let err = pair_error(a, b);

        self.abs_sum += err.abs;
        self.abs_max.offer(err.abs, position);

        self.rel_sum += err.rel;
        self.rel_max.offer(err.rel, position);

        self.decades.observe(err.rel);

        self.count += 1;
    }

    #[inline]
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Snapshot the aggregates. Averages are `None` when nothing was observed.
    pub fn report(&self) -> DiffReport {
        let (abs_avg, rel_avg) = if self.count == 0 {
            (None, None)
        } else {
            let n = self.count as f32;
            (Some(self.abs_sum / n), Some(self.rel_sum / n))
        };
        DiffReport {
            count: self.count,
            abs_avg,
            abs_max: self.abs_max,
            rel_avg,
            rel_max: self.rel_max,
            decades: self.decades,
        }
    }
}

/// Final error statistics, detached from the accumulator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiffReport {
    pub count: u64,
    pub abs_avg: Option<f32>,
    pub abs_max: MaxTracker,
    pub rel_avg: Option<f32>,
    pub rel_max: MaxTracker,
    pub decades: DecadeHistogram,
}
