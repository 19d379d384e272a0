//! Replaying adapter for the `IdGenerator` port.

use std::sync::{Arc, Mutex};

use crate::cassette::replayer::CassetteReplayer;
use crate::ports::id_gen::IdGenerator;

/// Replays recorded IDs from a cassette.
pub struct ReplayingIdGenerator {
    replayer: Arc<Mutex<CassetteReplayer>>,
}

impl ReplayingIdGenerator {
    /// Creates an adapter over a replayer the caller keeps a handle to,
    /// e.g. to check afterwards that every recording was served.
    #[must_use]
    pub fn shared(replayer: Arc<Mutex<CassetteReplayer>>) -> Self {
        Self { replayer }
    }
}

impl IdGenerator for ReplayingIdGenerator {
    fn generate_id(&self) -> String {
        let output = {
            let mut replayer = self.replayer.lock().expect("replayer lock poisoned");
            let interaction = replayer.next_interaction("id_gen", "generate_id");
            interaction.output.clone()
        };
        output.as_str().expect("id_gen::generate_id: expected string output").to_string()
    }
}
