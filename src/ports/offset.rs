//! Offset port for drawing the step between successive objects.

/// Draws step offsets along the x-axis.
///
/// Abstracting the random draw allows deterministic generation by
/// substituting a seeded or recorded source.
pub trait OffsetSource: Send + Sync {
    /// Draws an integer uniformly from the closed range `low..=high`.
    fn draw(&self, low: i64, high: i64) -> i64;
}
