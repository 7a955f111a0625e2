use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::{ScaleStep, TimeUnit, select_scale_step};
use crate::error::{ScaleError, ScaleResult};

/// Inputs for building or re-ranging a [`TickScale`](crate::core::TickScale).
///
/// Step resolution order:
/// - `forced_step` is used verbatim when present
/// - otherwise `min_step_hint` drives the nice-number search against `container_extent`
/// - otherwise the step is one day in `time_unit`
///
/// This type is serializable so hosts can persist axis setup next to their
/// own chart configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TickScaleConfig {
    pub start: f64,
    pub end: f64,
    pub container_extent: f64,
    #[serde(default)]
    pub min_step_hint: Option<f64>,
    #[serde(default)]
    pub forced_step: Option<f64>,
    #[serde(default)]
    pub time_unit: TimeUnit,
}

impl TickScaleConfig {
    /// Creates a config using the default one-day step.
    #[must_use]
    pub fn new(start: f64, end: f64, container_extent: f64) -> Self {
        Self {
            start,
            end,
            container_extent,
            min_step_hint: None,
            forced_step: None,
            time_unit: TimeUnit::default(),
        }
    }

    /// Creates a config from UTC datetimes expressed in `time_unit`.
    #[must_use]
    pub fn from_datetimes(
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        container_extent: f64,
        time_unit: TimeUnit,
    ) -> Self {
        Self::new(
            time_unit.datetime_to_value(start),
            time_unit.datetime_to_value(end),
            container_extent,
        )
        .with_time_unit(time_unit)
    }

    #[must_use]
    pub fn with_min_step_hint(mut self, min_step_hint: f64) -> Self {
        self.min_step_hint = Some(min_step_hint);
        self
    }

    #[must_use]
    pub fn with_forced_step(mut self, forced_step: f64) -> Self {
        self.forced_step = Some(forced_step);
        self
    }

    #[must_use]
    pub fn with_time_unit(mut self, time_unit: TimeUnit) -> Self {
        self.time_unit = time_unit;
        self
    }

    /// Whether the step comes from the nice-number search.
    #[must_use]
    pub fn is_auto_scaled(self) -> bool {
        self.forced_step.is_none() && self.min_step_hint.is_some()
    }

    pub fn validate(self) -> ScaleResult<Self> {
        if !self.start.is_finite() || !self.end.is_finite() {
            return Err(ScaleError::invalid("tick range must be finite"));
        }
        if self.start > self.end {
            return Err(ScaleError::invalid("tick range start must be <= end"));
        }

        if let Some(forced_step) = self.forced_step {
            if !forced_step.is_finite() || forced_step <= 0.0 {
                return Err(ScaleError::invalid("forced step must be finite and > 0"));
            }
        }

        if let Some(min_step_hint) = self.min_step_hint {
            if !min_step_hint.is_finite() || min_step_hint < 0.0 {
                return Err(ScaleError::invalid("minimum step hint must be finite and >= 0"));
            }
        }

        // The extent only matters when it scales the hint.
        if self.is_auto_scaled()
            && (!self.container_extent.is_finite() || self.container_extent <= 0.0)
        {
            return Err(ScaleError::invalid("container extent must be finite and > 0"));
        }

        Ok(self)
    }

    /// Resolves the step this config asks for, without touching any scale.
    pub fn resolve_step(self) -> ScaleResult<ScaleStep> {
        let config = self.validate()?;
        match (config.forced_step, config.min_step_hint) {
            (Some(forced_step), _) => ScaleStep::forced(forced_step),
            (None, Some(min_step_hint)) => select_scale_step(
                config.start,
                config.end,
                min_step_hint,
                config.container_extent,
            ),
            (None, None) => Ok(ScaleStep::day(config.time_unit)),
        }
    }
}
