//! Live adapters backed by process-global entropy.

pub mod id_gen;
pub mod offset;

pub use id_gen::LiveIdGenerator;
pub use offset::LiveOffsetSource;
