//! Adapter implementations for the entropy ports.

pub mod live;
pub mod recording;
pub mod replaying;
pub mod seeded;
