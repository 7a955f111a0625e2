use serde::{Deserialize, Serialize};

use crate::core::{Tick, TickScale, TimeUnit};

/// Serializable deterministic view of a scale, used by regression tests and
/// by hosts that lay out gridlines out of process.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickScaleSnapshot {
    pub range: (f64, f64),
    pub margin_start: f64,
    pub margin_end: f64,
    pub margin_range: f64,
    pub step: f64,
    pub major_step: f64,
    pub multiplier_index: usize,
    pub magnitude: f64,
    pub time_unit: TimeUnit,
    pub ticks: Vec<Tick>,
}

impl TickScale {
    /// Captures the scale and every tick between its margins.
    ///
    /// The cursor of `self` is not moved.
    #[must_use]
    pub fn snapshot(&self) -> TickScaleSnapshot {
        let scale_step = self.scale_step();
        TickScaleSnapshot {
            range: self.range(),
            margin_start: self.margin_start(),
            margin_end: self.margin_end(),
            margin_range: self.margin_range(),
            step: scale_step.step(),
            major_step: scale_step.major_step(),
            multiplier_index: scale_step.multiplier_index(),
            magnitude: scale_step.magnitude(),
            time_unit: self.time_unit(),
            ticks: self.ticks().collect(),
        }
    }
}

impl TickScaleSnapshot {
    #[must_use]
    pub fn major_ticks(&self) -> impl Iterator<Item = &Tick> {
        self.ticks.iter().filter(|tick| tick.major)
    }
}
