//! Live offset source backed by the thread-local RNG.

use rand::Rng;

use crate::ports::OffsetSource;

/// Live offset source that draws from `rand`'s thread RNG.
pub struct LiveOffsetSource;

impl OffsetSource for LiveOffsetSource {
    fn draw(&self, low: i64, high: i64) -> i64 {
        rand::rng().random_range(low..=high)
    }
}
