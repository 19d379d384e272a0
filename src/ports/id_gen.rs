//! ID generator port for producing unique identifiers.

/// Generates unique identifiers.
///
/// Each call yields one identifier in canonical hyphenated UUID form. Tests
/// and replays substitute a predictable sequence.
pub trait IdGenerator: Send + Sync {
    /// Generates a new unique identifier string.
    fn generate_id(&self) -> String;
}
