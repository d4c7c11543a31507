/// Monotonic ID source for a [`World`](crate::model::World).
///
/// Dominions, info-ops and history entries draw from the same sequence, so an
/// ID is unique across all of them.
#[derive(Debug)]
pub struct IdGenerator {
    next: u64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self { next: 1 }
    }

    pub fn next_id(&mut self) -> u64 {
        let id = self.next;
        self.next += 1;
        id
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}
