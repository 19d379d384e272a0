//! Recording adapter for the `OffsetSource` port.

use std::sync::{Arc, Mutex};

use serde_json::json;

use super::record_interaction;
use crate::cassette::recorder::CassetteRecorder;
use crate::ports::OffsetSource;

/// Records every offset draw while delegating to an inner source.
pub struct RecordingOffsetSource {
    inner: Box<dyn OffsetSource>,
    recorder: Arc<Mutex<CassetteRecorder>>,
}

impl RecordingOffsetSource {
    /// Creates a recording source wrapping the given implementation.
    pub fn new(inner: Box<dyn OffsetSource>, recorder: Arc<Mutex<CassetteRecorder>>) -> Self {
        Self { inner, recorder }
    }
}

impl OffsetSource for RecordingOffsetSource {
    fn draw(&self, low: i64, high: i64) -> i64 {
        let result = self.inner.draw(low, high);
        record_interaction(
            &self.recorder,
            "offset",
            "draw",
            &json!({ "low": low, "high": high }),
            &result,
        );
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::seeded::SeededOffsetSource;
    use crate::cassette::format::Cassette;

    #[test]
    fn records_draw_bounds_and_result() {
        let dir = std::env::temp_dir().join("coordseq_rec_offset_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("offset.cassette.yaml");

        let recorder = Arc::new(Mutex::new(CassetteRecorder::new(&path, "test", "abc")));
        let drawn = {
            let source = RecordingOffsetSource::new(
                Box::new(SeededOffsetSource::new(11)),
                Arc::clone(&recorder),
            );
            [source.draw(200, 300), source.draw(200, 300)]
        };

        let recorder = Arc::try_unwrap(recorder).unwrap().into_inner().unwrap();
        recorder.finish().unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let cassette: Cassette = serde_yaml::from_str(&content).unwrap();
        assert_eq!(cassette.interactions.len(), 2);
        assert_eq!(cassette.interactions[0].input, json!({"low": 200, "high": 300}));
        assert_eq!(cassette.interactions[0].output, json!(drawn[0]));
        assert_eq!(cassette.interactions[1].output, json!(drawn[1]));
        assert_eq!(cassette.interactions[1].seq, 1);

        let _ = std::fs::remove_dir_all(&dir);
    }
}
