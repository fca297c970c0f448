//! Fresh identifier generation.

use glassgrid_core::identifier::Id;

/// Produces `<prefix>-<n>` identifiers with a monotonically increasing `n`.
///
/// Each session owns one generator. Candidates for which `taken` returns true
/// are skipped, so ids already present in an imported grid are never reused.
#[derive(Debug, Clone, Default)]
pub struct IdGenerator {
    counter: u64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the next free identifier for `prefix`.
    pub fn next_id(&mut self, prefix: &str, taken: impl Fn(Id) -> bool) -> Id {
        loop {
            self.counter += 1;
            let id = Id::numbered(prefix, self.counter);
            if !taken(id) {
                return id;
            }
        }
    }
}
