//! Seeded adapter for the `IdGenerator` port.

use std::sync::Mutex;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use uuid::Builder;

use crate::ports::IdGenerator;

/// Produces v4-shaped UUIDs from a seeded RNG.
#[derive(Debug)]
pub struct SeededIdGenerator {
    rng: Mutex<StdRng>,
}

impl SeededIdGenerator {
    /// Creates a generator with a fixed seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self { rng: Mutex::new(StdRng::seed_from_u64(seed)) }
    }
}

impl IdGenerator for SeededIdGenerator {
    fn generate_id(&self) -> String {
        let mut bytes = [0u8; 16];
        self.rng.lock().expect("id rng lock poisoned").fill(&mut bytes);
        Builder::from_random_bytes(bytes).into_uuid().to_string()
    }
}
