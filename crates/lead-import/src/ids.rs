//! Id generation for emitted lead records.

use uuid::Uuid;

/// Source of record ids, injected into the pipeline so imports stay
/// deterministic under test. Implementations must never repeat an id,
/// within a batch or against records already in the store.
pub trait IdGenerator {
    fn next_id(&mut self) -> String;
}

/// Default generator: random UUID v4 per record.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn next_id(&mut self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Deterministic generator for tests and dry runs: `lead-1`, `lead-2`, …
#[derive(Debug, Clone)]
pub struct SequentialGenerator {
    prefix: String,
    next: u64,
}

impl SequentialGenerator {
    #[must_use]
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: 1,
        }
    }
}

impl Default for SequentialGenerator {
    fn default() -> Self {
        Self::new("lead")
    }
}

impl IdGenerator for SequentialGenerator {
    fn next_id(&mut self) -> String {
        let id = format!("{}-{}", self.prefix, self.next);
        self.next += 1;
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequential_ids_count_up() {
        let mut ids = SequentialGenerator::default();
        assert_eq!(ids.next_id(), "lead-1");
        assert_eq!(ids.next_id(), "lead-2");
    }

    #[test]
    fn uuid_ids_do_not_repeat() {
        let mut ids = UuidGenerator;
        let first = ids.next_id();
        let second = ids.next_id();
        assert_ne!(first, second);
        assert_eq!(first.len(), 36);
    }
}
