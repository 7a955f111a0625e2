//! tick-scale: human-friendly axis ticks for time-series charts.
//!
//! A [`TickScale`] picks a step from the "nice" lattice `{0.25, 0.5, 1, 2} x 10^n`,
//! snaps the visible range outward to whole steps and exposes a cursor that
//! walks the ticks from the last one back to the first, flagging major ticks.
//! Drawing and label formatting are left to the caller.
//!
//! ```
//! use tick_scale::{TickScale, TickScaleConfig};
//!
//! let config = TickScaleConfig::new(0.0, 10_000.0, 100.0).with_min_step_hint(1.0);
//! let mut scale = TickScale::new(config).expect("valid scale");
//! assert_eq!(scale.step(), 200.0);
//!
//! let mut ticks = Vec::new();
//! while scale.has_next() {
//!     ticks.push((scale.current_value(), scale.is_major()));
//!     scale.advance();
//! }
//! assert_eq!(ticks.first(), Some(&(10_200.0, false)));
//! assert_eq!(ticks.last(), Some(&(-200.0, false)));
//! ```

pub mod api;
pub mod core;
pub mod error;
pub mod telemetry;

pub use api::TickScaleSnapshot;
pub use crate::core::{Tick, TickScale, TickScaleConfig, TimeUnit};
pub use error::{ScaleError, ScaleResult};
