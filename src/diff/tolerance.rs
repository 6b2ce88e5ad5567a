// Zero handling & per-pair error policy

/// Magnitudes strictly below this are treated as zero when deciding whether a
/// relative error is defined.
pub const ZERO_TOLERANCE: f32 = 1e-30;

/// Returns true if `value` lies within [`ZERO_TOLERANCE`] of zero.
///
/// NaN is never near zero.
#[inline]
pub fn is_near_zero(value: f32) -> bool {
    value.abs() < ZERO_TOLERANCE
}

/// Per-pair error terms.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PairError {
    pub abs: f32,
    pub rel: f32,
}

/// Absolute and relative error of one pair.
///
/// Relative error is `|a - b| / max(|a|, |b|)`, or exactly zero when both
/// magnitudes are near zero. Only one side being near zero is not guarded and
/// may produce a very large relative error.
#[inline]
pub fn pair_error(a: f32, b: f32) -> PairError {
    let abs = (a - b).abs();
    let fa = a.abs();
    let fb = b.abs();
    let max = if fa > fb { fa } else { fb };
    let rel = if is_near_zero(fa) && is_near_zero(fb) {
        0.0
    } else {
        abs / max
    };
    PairError { abs, rel }
}
