//! Storage for finished quiz results.
//!
//! Storing a result is optional and happens after a session completes; a
//! failure here is reported to the caller and never touches quiz state.
//! [`FallbackStore`] composes a primary store with a fallback explicitly
//! instead of relying on any global client.

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::error::StoreError;
use crate::quiz::QuizResult;

/// Persistence for finished results.
pub trait ResultStore {
    /// Persist one result.
    fn save(&self, result: &QuizResult) -> Result<(), StoreError>;

    /// All stored results, oldest first.
    fn list(&self) -> Result<Vec<QuizResult>, StoreError>;
}

/// Results kept as a JSON array in a single file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl ResultStore for JsonFileStore {
    fn save(&self, result: &QuizResult) -> Result<(), StoreError> {
        let mut results = self.list()?;
        results.push(result.clone());
        let content = serde_json::to_string_pretty(&results)?;
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
        }
        std::fs::write(&self.path, content).map_err(|e| self.io_error(e))
    }

    fn list(&self) -> Result<Vec<QuizResult>, StoreError> {
        match std::fs::read_to_string(&self.path) {
            Ok(content) if content.trim().is_empty() => Ok(Vec::new()),
            Ok(content) => Ok(serde_json::from_str(&content)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(self.io_error(e)),
        }
    }
}

/// In-process store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    results: Mutex<Vec<QuizResult>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ResultStore for MemoryStore {
    fn save(&self, result: &QuizResult) -> Result<(), StoreError> {
        let mut results = self.results.lock().unwrap_or_else(|e| e.into_inner());
        results.push(result.clone());
        Ok(())
    }

    fn list(&self) -> Result<Vec<QuizResult>, StoreError> {
        let results = self.results.lock().unwrap_or_else(|e| e.into_inner());
        Ok(results.clone())
    }
}

/// Writes to `primary`, falling back to `fallback` when the primary fails.
#[derive(Debug)]
pub struct FallbackStore<P, F> {
    primary: P,
    fallback: F,
}

impl<P: ResultStore, F: ResultStore> FallbackStore<P, F> {
    pub fn new(primary: P, fallback: F) -> Self {
        Self { primary, fallback }
    }

    pub fn primary(&self) -> &P {
        &self.primary
    }

    pub fn fallback(&self) -> &F {
        &self.fallback
    }
}

impl<P: ResultStore, F: ResultStore> ResultStore for FallbackStore<P, F> {
    fn save(&self, result: &QuizResult) -> Result<(), StoreError> {
        match self.primary.save(result) {
            Ok(()) => Ok(()),
            Err(primary) => {
                tracing::warn!(session = %result.session_id, error = %primary, "primary store failed, using fallback");
                self.fallback
                    .save(result)
                    .map_err(|fallback| StoreError::BothFailed {
                        primary: primary.to_string(),
                        fallback: fallback.to_string(),
                    })
            }
        }
    }

    /// Primary results followed by fallback results not already listed.
    fn list(&self) -> Result<Vec<QuizResult>, StoreError> {
        let mut results = match self.primary.list() {
            Ok(results) => results,
            Err(e) => {
                tracing::warn!(error = %e, "primary store unreadable, listing fallback only");
                Vec::new()
            }
        };
        for result in self.fallback.list()? {
            if !results.iter().any(|r| r.session_id == result.session_id) {
                results.push(result);
            }
        }
        Ok(results)
    }
}
