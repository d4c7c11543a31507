use crate::model::Dominion;

pub trait ProtectionService {
    fn is_under_protection(&self, dominion: &Dominion) -> bool;
}

/// New dominions are protected until their protection ticks run out.
pub struct TickProtection;

impl ProtectionService for TickProtection {
    fn is_under_protection(&self, dominion: &Dominion) -> bool {
        dominion.protection_ticks > 0
    }
}
