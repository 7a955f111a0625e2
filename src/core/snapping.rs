/// Relative tolerance used when testing tick values for step alignment.
const ALIGNMENT_EPSILON_RATIO: f64 = 1e-9;

/// Rounds `value` to the nearest multiple of `step`.
///
/// Remainders use the floored convention (`rem_euclid`), so values before the
/// origin round the same way as values after it. A remainder of exactly half a
/// step rounds toward negative infinity.
#[must_use]
pub fn snap_to_step(value: f64, step: f64) -> f64 {
    let remainder = value.rem_euclid(step);
    let rounded = value - remainder;
    if remainder > 0.5 * step {
        rounded + step
    } else {
        rounded
    }
}

/// Returns whether `value` lies on a multiple of `step`, within a small
/// tolerance relative to `step`.
#[must_use]
pub fn is_multiple_of(value: f64, step: f64) -> bool {
    if !value.is_finite() || !step.is_finite() || step <= 0.0 {
        return false;
    }
    let remainder = value.rem_euclid(step);
    let epsilon = step * ALIGNMENT_EPSILON_RATIO;
    remainder <= epsilon || step - remainder <= epsilon
}

/// Iteration bounds padded by one step on each side and snapped to the step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnappedMargins {
    pub start: f64,
    pub end: f64,
    pub range: f64,
}

#[must_use]
pub fn snap_margins(start: f64, end: f64, step: f64) -> SnappedMargins {
    let margin_start = snap_to_step(start - step, step);
    let margin_end = snap_to_step(end + step, step);
    SnappedMargins {
        start: margin_start,
        end: margin_end,
        range: margin_end - margin_start,
    }
}
