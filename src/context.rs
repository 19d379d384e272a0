//! Service context bundling the entropy ports.

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use crate::adapters::live::{LiveIdGenerator, LiveOffsetSource};
use crate::adapters::recording::{RecordingIdGenerator, RecordingOffsetSource};
use crate::adapters::replaying::{ReplayingIdGenerator, ReplayingOffsetSource};
use crate::adapters::seeded::{SeededIdGenerator, SeededOffsetSource};
use crate::cassette::config::CassetteConfig;
use crate::cassette::replayer::CassetteReplayer;
use crate::cassette::session::RecordingSession;
use crate::ports::id_gen::IdGenerator;
use crate::ports::offset::OffsetSource;

/// Bundles the port trait objects the generator draws from.
///
/// Constructors wire up different adapter families (live, seeded,
/// recording, replaying).
pub struct ServiceContext {
    /// Source of step offsets.
    pub offsets: Box<dyn OffsetSource>,
    /// ID generator for unique identifiers.
    pub id_gen: Box<dyn IdGenerator>,
    /// Handles on the replayers behind replaying adapters, if any.
    replayers: Vec<Arc<Mutex<CassetteReplayer>>>,
}

impl ServiceContext {
    /// Creates a live context backed by the thread RNG and random UUIDs.
    #[must_use]
    pub fn live() -> Self {
        Self {
            offsets: Box::new(LiveOffsetSource),
            id_gen: Box::new(LiveIdGenerator),
            replayers: Vec::new(),
        }
    }

    /// Creates a reproducible context; the same seed yields the same output.
    ///
    /// Offsets and identifiers use independent streams derived from `seed`.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            offsets: Box::new(SeededOffsetSource::new(seed)),
            id_gen: Box::new(SeededIdGenerator::new(seed.wrapping_add(1))),
            replayers: Vec::new(),
        }
    }

    /// Wraps `inner` so every port call is recorded into a session at `dir`.
    ///
    /// Drop the returned context before calling
    /// [`RecordingSession::finish`].
    ///
    /// # Errors
    ///
    /// Returns an error if the session directory cannot be prepared.
    pub fn recording_at(
        inner: Self,
        dir: impl Into<PathBuf>,
    ) -> Result<(Self, RecordingSession), String> {
        let session = RecordingSession::at(dir)?;
        let ctx = Self {
            offsets: Box::new(RecordingOffsetSource::new(
                inner.offsets,
                session.offset_recorder(),
            )),
            id_gen: Box::new(RecordingIdGenerator::new(inner.id_gen, session.id_gen_recorder())),
            replayers: inner.replayers,
        };
        Ok((ctx, session))
    }

    /// Creates a replaying context from per-port cassette files.
    ///
    /// Ports without a configured cassette use a panicking adapter that
    /// fails with a clear message when called.
    ///
    /// # Errors
    ///
    /// Returns an error if any configured cassette file cannot be read or parsed.
    pub fn replaying_from(config: &CassetteConfig) -> Result<Self, String> {
        let loaded = config.load_all()?;
        let mut replayers = Vec::new();
        let mut track = |replayer: CassetteReplayer| {
            let handle = Arc::new(Mutex::new(replayer));
            replayers.push(Arc::clone(&handle));
            handle
        };

        let offsets: Box<dyn OffsetSource> = match loaded.offset {
            Some(r) => Box::new(ReplayingOffsetSource::shared(track(r))),
            None => Box::new(PanickingOffsetSource),
        };
        let id_gen: Box<dyn IdGenerator> = match loaded.id_gen {
            Some(r) => Box::new(ReplayingIdGenerator::shared(track(r))),
            None => Box::new(PanickingIdGenerator),
        };

        Ok(Self { offsets, id_gen, replayers })
    }

    /// Recorded interactions the replaying adapters have not served yet.
    ///
    /// Always zero for contexts that do not replay.
    ///
    /// # Panics
    ///
    /// Panics if a replayer lock is poisoned.
    #[must_use]
    pub fn unreplayed(&self) -> usize {
        self.replayers
            .iter()
            .map(|r| r.lock().expect("replayer lock poisoned").remaining())
            .sum()
    }
}

// --- Panicking adapters for unspecified ports ---

struct PanickingOffsetSource;
impl OffsetSource for PanickingOffsetSource {
    fn draw(&self, _low: i64, _high: i64) -> i64 {
        panic!("OffsetSource port not configured in CassetteConfig: no cassette loaded for offset");
    }
}

struct PanickingIdGenerator;
impl IdGenerator for PanickingIdGenerator {
    fn generate_id(&self) -> String {
        panic!("IdGenerator port not configured in CassetteConfig: no cassette loaded for id_gen");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cassette::session::{ID_GEN_CASSETTE, OFFSET_CASSETTE};

    #[test]
    fn seeded_contexts_agree() {
        let a = ServiceContext::seeded(9);
        let b = ServiceContext::seeded(9);
        assert_eq!(a.offsets.draw(200, 300), b.offsets.draw(200, 300));
        assert_eq!(a.id_gen.generate_id(), b.id_gen.generate_id());
        assert_eq!(a.unreplayed(), 0);
    }

    #[test]
    fn recorded_calls_replay_identically() {
        let dir = std::env::temp_dir().join("coordseq_ctx_record_replay");
        let _ = std::fs::remove_dir_all(&dir);

        let (ctx, session) = ServiceContext::recording_at(ServiceContext::live(), &dir).unwrap();
        let drawn = [ctx.offsets.draw(200, 300), ctx.offsets.draw(200, 300)];
        let id = ctx.id_gen.generate_id();
        drop(ctx);
        session.finish().unwrap();

        let config = CassetteConfig {
            offset: Some(dir.join(OFFSET_CASSETTE)),
            id_gen: Some(dir.join(ID_GEN_CASSETTE)),
        };
        let replay = ServiceContext::replaying_from(&config).unwrap();
        assert_eq!(replay.offsets.draw(200, 300), drawn[0]);
        assert_eq!(replay.offsets.draw(200, 300), drawn[1]);
        assert_eq!(replay.unreplayed(), 1);
        assert_eq!(replay.id_gen.generate_id(), id);
        assert_eq!(replay.unreplayed(), 0);

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    #[should_panic(expected = "not configured in CassetteConfig")]
    fn unspecified_port_panics_with_clear_message() {
        let config = CassetteConfig::panic_on_unspecified();
        let ctx = ServiceContext::replaying_from(&config).unwrap();
        let _ = ctx.offsets.draw(200, 300);
    }
}
