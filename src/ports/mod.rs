//! Port traits defining the entropy boundaries.
//!
//! The generator reads randomness from exactly two places: step offsets and
//! unique identifiers. Implementations live in `src/adapters/`.

pub mod id_gen;
pub mod offset;

pub use id_gen::IdGenerator;
pub use offset::OffsetSource;
