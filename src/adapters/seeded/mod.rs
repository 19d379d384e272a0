//! Seeded adapters for reproducible generation.
//!
//! Both adapters draw from their own `StdRng`, so a given seed always yields
//! the same offsets and the same identifiers.

pub mod id_gen;
pub mod offset;

pub use id_gen::SeededIdGenerator;
pub use offset::SeededOffsetSource;
