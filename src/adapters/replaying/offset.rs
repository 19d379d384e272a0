//! Replaying adapter for the `OffsetSource` port.

use std::sync::{Arc, Mutex};

use crate::cassette::replayer::CassetteReplayer;
use crate::ports::OffsetSource;

/// Replays recorded offset draws from a cassette.
///
/// The requested bounds are not checked against the recorded ones; the
/// recorded value is returned as-is.
pub struct ReplayingOffsetSource {
    replayer: Arc<Mutex<CassetteReplayer>>,
}

impl ReplayingOffsetSource {
    /// Creates an adapter over a replayer the caller keeps a handle to,
    /// e.g. to check afterwards that every recording was served.
    #[must_use]
    pub fn shared(replayer: Arc<Mutex<CassetteReplayer>>) -> Self {
        Self { replayer }
    }
}

impl OffsetSource for ReplayingOffsetSource {
    fn draw(&self, _low: i64, _high: i64) -> i64 {
        let output = {
            let mut replayer = self.replayer.lock().expect("replayer lock poisoned");
            replayer.next_interaction("offset", "draw").output.clone()
        };
        output.as_i64().expect("offset::draw: expected integer output")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cassette::format::{Cassette, Interaction};
    use chrono::Utc;
    use serde_json::json;

    #[test]
    fn replays_draws_in_order() {
        let cassette = Cassette {
            name: "test".into(),
            recorded_at: Utc::now(),
            generator_version: "0.1.0".into(),
            interactions: [212, 287]
                .into_iter()
                .enumerate()
                .map(|(seq, value)| Interaction {
                    seq: u64::try_from(seq).unwrap(),
                    port: "offset".into(),
                    method: "draw".into(),
                    input: json!({"low": 200, "high": 300}),
                    output: json!(value),
                })
                .collect(),
        };
        let replayer = Arc::new(Mutex::new(CassetteReplayer::new(&cassette)));
        let source = ReplayingOffsetSource::shared(Arc::clone(&replayer));
        assert_eq!(source.draw(200, 300), 212);
        assert_eq!(replayer.lock().unwrap().remaining(), 1);
        assert_eq!(source.draw(200, 300), 287);
        assert_eq!(replayer.lock().unwrap().remaining(), 0);
    }
}
