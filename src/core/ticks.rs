use serde::{Deserialize, Serialize};

use crate::core::TickScale;

/// A tick position and whether it deserves emphasis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tick {
    pub value: f64,
    pub major: bool,
}

/// Descending tick iterator returned by [`TickScale::ticks`].
#[derive(Debug, Clone)]
pub struct Ticks {
    walker: TickScale,
}

impl Ticks {
    pub(crate) fn new(walker: TickScale) -> Self {
        Self { walker }
    }
}

impl Iterator for Ticks {
    type Item = Tick;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.walker.has_next() {
            return None;
        }

        let tick = Tick {
            value: self.walker.current_value(),
            major: self.walker.is_major(),
        };
        self.walker.advance();
        Some(tick)
    }
}

impl std::iter::FusedIterator for Ticks {}
