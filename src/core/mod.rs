pub mod nice_step;
pub mod snapping;
pub mod tick_scale;
pub mod tick_scale_config;
pub mod ticks;
pub mod time_unit;

pub use nice_step::{
    RANGE_SAFETY_FACTOR, STEP_MULTIPLIERS, ScaleStep, StepMultiplier, required_step,
    select_scale_step,
};
pub use snapping::{SnappedMargins, is_multiple_of, snap_margins, snap_to_step};
pub use tick_scale::TickScale;
pub use tick_scale_config::TickScaleConfig;
pub use ticks::{Tick, Ticks};
pub use time_unit::TimeUnit;
