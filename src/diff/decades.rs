// Relative-error decade histogram

/// Number of decade thresholds tracked.
pub const DECADE_COUNT: usize = 5;

/// Relative-error cutoffs, 1e-1 down to 1e-5.
pub const DECADE_THRESHOLDS: [f32; DECADE_COUNT] = [1e-1, 1e-2, 1e-3, 1e-4, 1e-5];

/// Count of pairs whose relative error strictly exceeds each decade threshold.
///
/// Slot `i` holds the count for `10^-(i + 1)`. A pair counted in slot `i` is
/// counted in every later slot, so counts never decrease along the slots.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DecadeHistogram {
    counts: [u64; DECADE_COUNT],
}

impl DecadeHistogram {
    pub const fn new() -> Self {
        Self {
            counts: [0; DECADE_COUNT],
        }
    }

    /// Bump every slot whose threshold `rel` exceeds. NaN bumps nothing.
    #[inline]
    pub fn observe(&mut self, rel: f32) {
        for (count, threshold) in self.counts.iter_mut().zip(DECADE_THRESHOLDS) {
            if rel > threshold {
                *count += 1;
            }
        }
    }

    #[inline]
    pub fn counts(&self) -> [u64; DECADE_COUNT] {
        self.counts
    }

    /// Iterate `(exponent, count)` pairs, exponent running 1 through 5.
    pub fn iter(&self) -> impl Iterator<Item = (usize, u64)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .map(|(idx, count)| (idx + 1, *count))
    }
}
