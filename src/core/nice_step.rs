use tracing::debug;

use crate::core::TimeUnit;
use crate::error::{ScaleError, ScaleResult};

/// Minor step multiplier paired with the major multiplier used alongside it.
///
/// Both values are relative to the same power-of-ten magnitude.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepMultiplier {
    pub minor: f64,
    pub major: f64,
}

/// Allowed multipliers within one order of magnitude, ascending by `minor`.
pub const STEP_MULTIPLIERS: [StepMultiplier; 4] = [
    StepMultiplier {
        minor: 0.25,
        major: 1.0,
    },
    StepMultiplier {
        minor: 0.5,
        major: 2.0,
    },
    StepMultiplier {
        minor: 1.0,
        major: 5.0,
    },
    StepMultiplier {
        minor: 2.0,
        major: 10.0,
    },
];

/// Padding applied to the range so the last tick does not sit on the boundary.
pub const RANGE_SAFETY_FACTOR: f64 = 1.1;

/// Index of the `x1` multiplier, used for the day scale and forced steps.
const UNIT_MULTIPLIER_INDEX: usize = 2;

/// A point of the nice-number lattice: `magnitude * STEP_MULTIPLIERS[index].minor`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleStep {
    multiplier_index: usize,
    magnitude: f64,
}

impl ScaleStep {
    pub fn new(multiplier_index: usize, magnitude: f64) -> ScaleResult<Self> {
        if multiplier_index >= STEP_MULTIPLIERS.len() {
            return Err(ScaleError::invalid(format!(
                "multiplier index {multiplier_index} is out of range"
            )));
        }
        if !magnitude.is_finite() || magnitude <= 0.0 {
            return Err(ScaleError::invalid("step magnitude must be finite and > 0"));
        }

        Ok(Self {
            multiplier_index,
            magnitude,
        })
    }

    /// Default scale when no minimum-step hint is supplied: one tick per day.
    #[must_use]
    pub fn day(unit: TimeUnit) -> Self {
        Self {
            multiplier_index: UNIT_MULTIPLIER_INDEX,
            magnitude: unit.day_length(),
        }
    }

    /// Uses `step` as-is, bypassing the lattice search.
    pub fn forced(step: f64) -> ScaleResult<Self> {
        if !step.is_finite() || step <= 0.0 {
            return Err(ScaleError::invalid("forced step must be finite and > 0"));
        }
        Self::new(UNIT_MULTIPLIER_INDEX, step)
    }

    #[must_use]
    pub fn multiplier_index(self) -> usize {
        self.multiplier_index
    }

    #[must_use]
    pub fn magnitude(self) -> f64 {
        self.magnitude
    }

    #[must_use]
    pub fn multiplier(self) -> StepMultiplier {
        STEP_MULTIPLIERS[self.multiplier_index]
    }

    /// Distance between two consecutive ticks.
    #[must_use]
    pub fn step(self) -> f64 {
        self.magnitude * self.multiplier().minor
    }

    /// Distance between two consecutive major ticks.
    #[must_use]
    pub fn major_step(self) -> f64 {
        self.magnitude * self.multiplier().major
    }

    #[must_use]
    pub fn minor_ticks_per_major(self) -> f64 {
        let multiplier = self.multiplier();
        multiplier.major / multiplier.minor
    }
}

/// Smallest step a range needs so ticks stay `min_step_hint` screen units apart.
///
/// `container_extent` is the on-screen size of the axis in the unit the hint
/// is expressed against.
pub fn required_step(start: f64, end: f64, min_step_hint: f64, container_extent: f64) -> f64 {
    let safe_size = (end - start) * RANGE_SAFETY_FACTOR;
    min_step_hint * (safe_size / container_extent)
}

/// Picks the smallest lattice step `10^i * minor` (with `i >= 0`) that is at
/// least the required step for the given range and on-screen extent.
///
/// Magnitudes are searched up to `round(log10(1.1 * (end - start)))`; ranges
/// too narrow for any magnitude, or hints too coarse for the range, are
/// rejected instead of producing a non-positive or non-finite step.
pub fn select_scale_step(
    start: f64,
    end: f64,
    min_step_hint: f64,
    container_extent: f64,
) -> ScaleResult<ScaleStep> {
    if !start.is_finite() || !end.is_finite() {
        return Err(ScaleError::invalid("tick range must be finite"));
    }
    if start > end {
        return Err(ScaleError::invalid("tick range start must be <= end"));
    }
    if !min_step_hint.is_finite() || min_step_hint < 0.0 {
        return Err(ScaleError::invalid("minimum step hint must be finite and >= 0"));
    }
    if !container_extent.is_finite() || container_extent <= 0.0 {
        return Err(ScaleError::invalid("container extent must be finite and > 0"));
    }

    let required = required_step(start, end, min_step_hint, container_extent);
    if !required.is_finite() {
        return Err(ScaleError::invalid("required step is not finite"));
    }

    let safe_size = (end - start) * RANGE_SAFETY_FACTOR;
    let upper_exponent = safe_size.log10().round();
    if !upper_exponent.is_finite() || upper_exponent < 0.0 {
        return Err(ScaleError::invalid(format!(
            "tick range of size {} is too narrow for a step >= 0.25",
            end - start
        )));
    }

    for exponent in 0..=(upper_exponent as i32) {
        let magnitude = 10f64.powi(exponent);
        for (multiplier_index, multiplier) in STEP_MULTIPLIERS.iter().enumerate() {
            let candidate = magnitude * multiplier.minor;
            if !candidate.is_finite() {
                break;
            }
            if candidate >= required {
                debug!(
                    required_step = required,
                    magnitude,
                    multiplier = multiplier.minor,
                    "selected tick scale step"
                );
                return Ok(ScaleStep {
                    multiplier_index,
                    magnitude,
                });
            }
        }
    }

    Err(ScaleError::invalid(format!(
        "no nice step >= {required} up to magnitude 1e{upper_exponent}"
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multiplier_table_is_ascending_and_paired() {
        for pair in STEP_MULTIPLIERS.windows(2) {
            assert!(pair[0].minor < pair[1].minor);
            assert!(pair[0].major < pair[1].major);
        }
        assert_eq!(STEP_MULTIPLIERS[0].major / STEP_MULTIPLIERS[0].minor, 4.0);
        assert_eq!(STEP_MULTIPLIERS[3].major / STEP_MULTIPLIERS[3].minor, 5.0);
    }

    #[test]
    fn lattice_is_strictly_increasing_across_magnitudes() {
        let lattice: Vec<f64> = (0..6)
            .flat_map(|exponent| {
                let magnitude = 10f64.powi(exponent);
                STEP_MULTIPLIERS.iter().map(move |m| magnitude * m.minor)
            })
            .collect();

        for pair in lattice.windows(2) {
            assert!(pair[0] < pair[1], "{} !< {}", pair[0], pair[1]);
        }
        assert_eq!(lattice[3], 2.0);
        assert_eq!(lattice[4], 2.5);
    }

    #[test]
    fn overflowing_candidates_are_skipped() {
        // 2 * 1e308 overflows; 1e308 alone is below 1.1e308.
        let result = select_scale_step(0.0, 1e308, 1.0, 1.0);
        assert!(matches!(result, Err(ScaleError::InvalidConfiguration(_))));
    }

    #[test]
    fn scale_step_rejects_out_of_range_index() {
        assert!(ScaleStep::new(4, 1.0).is_err());
        assert!(ScaleStep::new(0, 0.0).is_err());
        assert!(ScaleStep::new(0, f64::NAN).is_err());
    }

    #[test]
    fn negative_upper_exponent_is_rejected() {
        // 1.1 * 0.1 = 0.11 -> log10 rounds to -1.
        let result = select_scale_step(0.0, 0.1, 1.0, 100.0);
        assert!(matches!(result, Err(ScaleError::InvalidConfiguration(_))));
    }
}
