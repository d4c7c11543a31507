//! Read-only game calculators the espionage engine consults.
//!
//! Each concern is a trait so tests and alternative rule sets can substitute
//! their own numbers; the `Standard*` types implement live game rules.

mod improvement;
mod land;
mod military;
mod protection;
mod range;

pub use improvement::{ImprovementCalculator, StandardImprovementCalculator};
pub use land::{LandCalculator, StandardLandCalculator};
pub use military::{MilitaryCalculator, StandardMilitaryCalculator};
pub use protection::{ProtectionService, TickProtection};
pub use range::{LandRangeCalculator, RangeCalculator};
