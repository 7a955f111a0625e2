use tracing::{debug, trace, warn};

use crate::core::{
    ScaleStep, SnappedMargins, TickScaleConfig, Ticks, TimeUnit, is_multiple_of, snap_margins,
    snap_to_step,
};
use crate::error::{ScaleError, ScaleResult};

/// Axis tick scale with a descending cursor.
///
/// The scale owns the logical range, the step chosen for it and the margins
/// snapped to that step. The cursor starts at `margin_end` and walks down by one
/// step per [`advance`](Self::advance) until it passes `margin_start`.
///
/// Instances are not shared: every cursor call mutates the scale in place.
#[derive(Debug, Clone, PartialEq)]
pub struct TickScale {
    start: f64,
    end: f64,
    time_unit: TimeUnit,
    scale_step: ScaleStep,
    margins: SnappedMargins,
    current: f64,
    auto_scale: bool,
    clamp_count: u64,
}

impl TickScale {
    /// Builds a scale, resolves its step and places the cursor on `margin_end`.
    pub fn new(config: TickScaleConfig) -> ScaleResult<Self> {
        let scale_step = config.resolve_step().inspect_err(|err| {
            warn!(error = %err, "rejected tick scale configuration");
        })?;

        let margins = checked_margins(config.start, config.end, scale_step).inspect_err(|err| {
            warn!(error = %err, "rejected tick scale configuration");
        })?;
        debug!(
            start = config.start,
            end = config.end,
            step = scale_step.step(),
            margin_start = margins.start,
            margin_end = margins.end,
            "built tick scale"
        );

        Ok(Self {
            start: config.start,
            end: config.end,
            time_unit: config.time_unit,
            scale_step,
            margins,
            current: margins.end,
            auto_scale: true,
            clamp_count: 0,
        })
    }

    /// Re-ranges the scale and resets the cursor to the new `margin_end`.
    ///
    /// With auto-scaling disabled and no forced step in `config`, the step in
    /// effect is kept; the margins are always re-snapped. On error the scale is
    /// left untouched.
    pub fn set_range(&mut self, config: TickScaleConfig) -> ScaleResult<()> {
        let config = config.validate().inspect_err(|err| {
            warn!(error = %err, "rejected tick scale re-range");
        })?;

        let scale_step = if self.auto_scale || config.forced_step.is_some() {
            config.resolve_step().inspect_err(|err| {
                warn!(error = %err, "rejected tick scale re-range");
            })?
        } else {
            self.scale_step
        };
        let margins = checked_margins(config.start, config.end, scale_step).inspect_err(|err| {
            warn!(error = %err, "rejected tick scale re-range");
        })?;

        self.start = config.start;
        self.end = config.end;
        self.time_unit = config.time_unit;
        self.scale_step = scale_step;
        self.margins = margins;
        self.current = margins.end;
        debug!(
            start = self.start,
            end = self.end,
            step = self.step(),
            auto_scale = self.auto_scale,
            "re-ranged tick scale"
        );
        Ok(())
    }

    /// Enables or disables step selection on re-range.
    pub fn set_auto_scale(&mut self, enabled: bool) {
        self.auto_scale = enabled;
    }

    #[must_use]
    pub fn is_auto_scale(&self) -> bool {
        self.auto_scale
    }

    /// Returns `true` while the cursor has not passed `margin_start`.
    #[must_use]
    pub fn has_next(&self) -> bool {
        self.current >= self.margins.start
    }

    /// Moves the cursor one step toward `margin_start`.
    ///
    /// When the step is too small to change the cursor value, the cursor is
    /// moved past `margin_start` so iteration still terminates. Such clamps are
    /// counted in [`clamp_count`](Self::clamp_count) and logged at `warn`.
    pub fn advance(&mut self) {
        let previous = self.current;
        let step = self.step();
        self.current -= step;

        if self.current == previous && previous >= self.margins.start {
            self.clamp_count += 1;
            warn!(
                current = previous,
                step, "tick step does not perturb the cursor; ending iteration"
            );
            self.current = f64::NEG_INFINITY;
        }
        trace!(current = self.current, "advanced tick cursor");
    }

    /// Moves the cursor one step up and grows the window by that step.
    ///
    /// Unlike [`advance`](Self::advance) this mutates `margin_end` (and
    /// `margin_range`). An `advance` right after a `retreat` restores the
    /// cursor, but the margin stays extended until the next re-range.
    pub fn retreat(&mut self) {
        let step = self.step();
        self.current += step;
        self.margins.end += step;
        self.margins.range = self.margins.end - self.margins.start;
        trace!(
            current = self.current,
            margin_end = self.margins.end,
            "retreated tick cursor"
        );
    }

    /// Puts the cursor back on `margin_end` without touching the margins.
    pub fn reset_cursor(&mut self) {
        self.current = self.margins.end;
    }

    #[must_use]
    pub fn current_value(&self) -> f64 {
        self.current
    }

    /// Whether the cursor sits on a major tick, i.e. a multiple of
    /// [`major_step`](Self::major_step).
    #[must_use]
    pub fn is_major(&self) -> bool {
        is_multiple_of(self.current, self.major_step())
    }

    /// Rounds `value` to the nearest tick of this scale.
    #[must_use]
    pub fn snap_to_step(&self, value: f64) -> f64 {
        snap_to_step(value, self.step())
    }

    /// Iterates every tick from `margin_end` down to `margin_start`.
    ///
    /// The iterator walks its own copy; this scale's cursor is not moved.
    #[must_use]
    pub fn ticks(&self) -> Ticks {
        let mut walker = self.clone();
        walker.reset_cursor();
        Ticks::new(walker)
    }

    #[must_use]
    pub fn range(&self) -> (f64, f64) {
        (self.start, self.end)
    }

    #[must_use]
    pub fn margin_start(&self) -> f64 {
        self.margins.start
    }

    #[must_use]
    pub fn margin_end(&self) -> f64 {
        self.margins.end
    }

    #[must_use]
    pub fn margin_range(&self) -> f64 {
        self.margins.range
    }

    #[must_use]
    pub fn margins(&self) -> SnappedMargins {
        self.margins
    }

    #[must_use]
    pub fn step(&self) -> f64 {
        self.scale_step.step()
    }

    #[must_use]
    pub fn major_step(&self) -> f64 {
        self.scale_step.major_step()
    }

    #[must_use]
    pub fn scale_step(&self) -> ScaleStep {
        self.scale_step
    }

    #[must_use]
    pub fn time_unit(&self) -> TimeUnit {
        self.time_unit
    }

    /// Number of times [`advance`](Self::advance) had to force termination.
    #[must_use]
    pub fn clamp_count(&self) -> u64 {
        self.clamp_count
    }
}

/// Snaps the margins, rejecting steps whose padding overflows the float range.
fn checked_margins(start: f64, end: f64, scale_step: ScaleStep) -> ScaleResult<SnappedMargins> {
    let margins = snap_margins(start, end, scale_step.step());
    if !margins.start.is_finite() || !margins.end.is_finite() {
        return Err(ScaleError::invalid(format!(
            "step {} overflows the margins of [{start}, {end}]",
            scale_step.step()
        )));
    }
    Ok(margins)
}
