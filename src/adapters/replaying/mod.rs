//! Replaying adapters that replay recorded interactions.

pub mod id_gen;
pub mod offset;

pub use id_gen::ReplayingIdGenerator;
pub use offset::ReplayingOffsetSource;
