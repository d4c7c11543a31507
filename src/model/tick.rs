use std::fmt;

use serde::{Deserialize, Serialize};

pub const HOURS_PER_DAY: u32 = 24;

/// Round-relative game time, counted in hourly ticks since the round started.
///
/// Tick 0 is day 1, hour 0. Natural `u32` ordering equals chronological ordering,
/// so staleness checks are plain comparisons.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "TickRepr", try_from = "TickRepr")]
pub struct Tick(u32);

#[derive(Serialize, Deserialize)]
struct TickRepr {
    day: u32,
    hour: u32,
}

impl From<Tick> for TickRepr {
    fn from(tick: Tick) -> Self {
        TickRepr {
            day: tick.day(),
            hour: tick.hour(),
        }
    }
}

impl TryFrom<TickRepr> for Tick {
    type Error = String;

    fn try_from(repr: TickRepr) -> Result<Self, Self::Error> {
        if repr.day == 0 {
            return Err(format!("day out of range: {}", repr.day));
        }
        if repr.hour >= HOURS_PER_DAY {
            return Err(format!("hour out of range: {}", repr.hour));
        }
        Ok(Tick::new(repr.day, repr.hour))
    }
}

impl Tick {
    /// Create a tick from a round day (1-based) and hour (0–23).
    pub fn new(day: u32, hour: u32) -> Self {
        assert!(day >= 1, "day out of range: {day}");
        assert!(hour < HOURS_PER_DAY, "hour out of range: {hour}");
        Self((day - 1) * HOURS_PER_DAY + hour)
    }

    pub fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    pub fn as_u32(self) -> u32 {
        self.0
    }

    /// Round day, starting at 1.
    pub fn day(self) -> u32 {
        self.0 / HOURS_PER_DAY + 1
    }

    pub fn hour(self) -> u32 {
        self.0 % HOURS_PER_DAY
    }

    /// The tick `hours` later.
    pub fn plus_hours(self, hours: u32) -> Self {
        Self(self.0 + hours)
    }

    /// Whole hours elapsed since `earlier`, or 0 if `earlier` is in the future.
    pub fn hours_since(self, earlier: Tick) -> u32 {
        self.0.saturating_sub(earlier.0)
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "day {} {:02}:00", self.day(), self.hour())
    }
}
