//! Seeded adapter for the `OffsetSource` port.

use std::sync::Mutex;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::ports::OffsetSource;

/// Offset source drawing from a deterministic, seeded RNG.
#[derive(Debug)]
pub struct SeededOffsetSource {
    rng: Mutex<StdRng>,
}

impl SeededOffsetSource {
    /// Creates a source with a fixed seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self { rng: Mutex::new(StdRng::seed_from_u64(seed)) }
    }
}

impl OffsetSource for SeededOffsetSource {
    fn draw(&self, low: i64, high: i64) -> i64 {
        let mut rng = self.rng.lock().expect("offset rng lock poisoned");
        rng.random_range(low..=high)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_sequence() {
        let a = SeededOffsetSource::new(7);
        let b = SeededOffsetSource::new(7);
        let left: Vec<i64> = (0..20).map(|_| a.draw(200, 300)).collect();
        let right: Vec<i64> = (0..20).map(|_| b.draw(200, 300)).collect();
        assert_eq!(left, right);
        assert!(left.iter().all(|o| (200..=300).contains(o)));
    }
}
