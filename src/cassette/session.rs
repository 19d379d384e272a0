//! Recording session managing per-port cassette recorders.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};

use chrono::Utc;

use super::recorder::CassetteRecorder;
use crate::generator::GenerateRequest;

/// File name of the offset port cassette inside a session directory.
pub const OFFSET_CASSETTE: &str = "offset.cassette.yaml";
/// File name of the ID generator port cassette inside a session directory.
pub const ID_GEN_CASSETTE: &str = "id_gen.cassette.yaml";
/// File name of the saved generation request inside a session directory.
pub const REQUEST_FILE: &str = "request.yaml";

/// Manages per-port `CassetteRecorder` instances for a recording session.
///
/// Each port gets its own recorder writing to a separate cassette file in
/// the session directory, next to the request that drove the run. A session
/// dropped without [`finish`](Self::finish) still writes whatever was
/// recorded.
pub struct RecordingSession {
    offset: Option<Arc<Mutex<CassetteRecorder>>>,
    id_gen: Option<Arc<Mutex<CassetteRecorder>>>,
    output_dir: PathBuf,
}

impl RecordingSession {
    /// Create a session writing into `dir`, creating it if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `dir` already holds a recording
    /// - the directory cannot be created
    pub fn at(dir: impl Into<PathBuf>) -> Result<Self, String> {
        let output_dir = dir.into();

        if [OFFSET_CASSETTE, ID_GEN_CASSETTE, REQUEST_FILE]
            .iter()
            .any(|name| output_dir.join(name).exists())
        {
            return Err(format!("Recording already exists in {}", output_dir.display()));
        }

        std::fs::create_dir_all(&output_dir)
            .map_err(|e| format!("Failed to create cassette directory: {e}"))?;

        let timestamp = Utc::now().format("%Y-%m-%dT%H-%M-%S").to_string();
        let version = env!("CARGO_PKG_VERSION");
        let make_recorder = |port: &str, file: &str| -> Arc<Mutex<CassetteRecorder>> {
            let name = format!("{timestamp}-{port}");
            Arc::new(Mutex::new(CassetteRecorder::new(output_dir.join(file), name, version)))
        };

        Ok(Self {
            offset: Some(make_recorder("offset", OFFSET_CASSETTE)),
            id_gen: Some(make_recorder("id_gen", ID_GEN_CASSETTE)),
            output_dir,
        })
    }

    /// Shared handle on the offset port recorder.
    ///
    /// # Panics
    ///
    /// Never in practice: recorders are only taken by `finish` and `drop`.
    #[must_use]
    pub fn offset_recorder(&self) -> Arc<Mutex<CassetteRecorder>> {
        Arc::clone(self.offset.as_ref().expect("offset recorder already taken"))
    }

    /// Shared handle on the ID generator port recorder.
    ///
    /// # Panics
    ///
    /// Never in practice: recorders are only taken by `finish` and `drop`.
    #[must_use]
    pub fn id_gen_recorder(&self) -> Arc<Mutex<CassetteRecorder>> {
        Arc::clone(self.id_gen.as_ref().expect("id_gen recorder already taken"))
    }

    /// Save the request being recorded so a replay can reproduce it.
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be serialized or written.
    pub fn save_request(&self, request: &GenerateRequest) -> Result<(), String> {
        let yaml = serde_yaml::to_string(request)
            .map_err(|e| format!("Failed to serialize request: {e}"))?;
        std::fs::write(self.output_dir.join(REQUEST_FILE), yaml)
            .map_err(|e| format!("Failed to write request file: {e}"))
    }

    /// Finish all recorders and write cassette files to disk.
    ///
    /// # Errors
    ///
    /// Returns an error if an adapter still holds a recorder or a cassette
    /// file cannot be written.
    pub fn finish(mut self) -> Result<PathBuf, String> {
        fn finish_one(arc: Arc<Mutex<CassetteRecorder>>, port: &str) -> Result<(), String> {
            let recorder = Arc::try_unwrap(arc)
                .map_err(|_| format!("Recording adapter for {port} still has references"))?
                .into_inner()
                .map_err(|e| format!("Recorder lock for {port} poisoned: {e}"))?;
            recorder.finish().map_err(|e| format!("Failed to write {port} cassette: {e}"))?;
            Ok(())
        }

        let offset = self.offset.take();
        let id_gen = self.id_gen.take();
        if let Some(arc) = offset {
            finish_one(arc, "offset")?;
        }
        if let Some(arc) = id_gen {
            finish_one(arc, "id_gen")?;
        }

        Ok(std::mem::take(&mut self.output_dir))
    }
}

impl Drop for RecordingSession {
    fn drop(&mut self) {
        for recorder in [self.offset.take(), self.id_gen.take()].into_iter().flatten() {
            let guard = recorder.lock().unwrap_or_else(PoisonError::into_inner);
            if guard.is_empty() {
                continue;
            }
            if let Err(e) = guard.write() {
                eprintln!(
                    "Warning: failed to write cassette in {}: {e}",
                    self.output_dir.display()
                );
            }
        }
    }
}

/// Load the request saved by [`RecordingSession::save_request`].
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn load_request(dir: &Path) -> Result<GenerateRequest, String> {
    let path = dir.join(REQUEST_FILE);
    let content = std::fs::read_to_string(&path)
        .map_err(|e| format!("Failed to read request file {}: {e}", path.display()))?;
    serde_yaml::from_str(&content)
        .map_err(|e| format!("Failed to parse request file {}: {e}", path.display()))
}
