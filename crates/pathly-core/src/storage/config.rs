//! TOML-based application configuration.
//!
//! Stores:
//! - Engine tuning (progress heuristic, recommendation limits, scoring scale)
//! - Insight surfacing threshold
//! - An optional external catalog file
//! - Result storage preferences
//!
//! Configuration is stored at `~/.config/pathly/config.toml`.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::data_dir;
use crate::catalog::Catalog;
use crate::error::{CoreError, ConfigError};

/// Scoring and traversal settings read by the quiz engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Expected path length used by the progress heuristic.
    #[serde(default = "default_assumed_total")]
    pub assumed_total_questions: usize,
    /// Highest percent reported before completion.
    #[serde(default = "default_progress_ceiling")]
    pub progress_ceiling: u8,
    #[serde(default = "default_max_recommendations")]
    pub max_recommendations: usize,
    /// Backfill runs when fewer distinct careers than this were found.
    #[serde(default = "default_backfill_threshold")]
    pub backfill_threshold: usize,
    /// Backfill stops once this many raw candidates exist.
    #[serde(default = "default_backfill_raw_limit")]
    pub backfill_raw_limit: usize,
    #[serde(default = "default_backfill_per_field")]
    pub backfill_per_field: usize,
    #[serde(default = "default_top_traits")]
    pub top_traits: usize,
    /// Per-trait score cap.
    #[serde(default = "default_trait_cap")]
    pub trait_cap: f64,
    /// Multiplier from option weight to score points.
    #[serde(default = "default_weight_scale")]
    pub weight_scale: f64,
}

/// Insight surfacing settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsightsConfig {
    #[serde(default = "default_min_answers")]
    pub min_answers: usize,
}

/// Catalog source.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// TOML or JSON catalog replacing the built-in one.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

/// Result storage settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "default_true")]
    pub save_results: bool,
    /// File name inside the data directory.
    #[serde(default = "default_results_file")]
    pub results_file: String,
}

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/pathly/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub engine: EngineConfig,
    #[serde(default)]
    pub insights: InsightsConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub storage: StorageConfig,
}

// Default functions
fn default_assumed_total() -> usize {
    12
}
fn default_progress_ceiling() -> u8 {
    95
}
fn default_max_recommendations() -> usize {
    12
}
fn default_backfill_threshold() -> usize {
    10
}
fn default_backfill_raw_limit() -> usize {
    15
}
fn default_backfill_per_field() -> usize {
    2
}
fn default_top_traits() -> usize {
    5
}
fn default_trait_cap() -> f64 {
    100.0
}
fn default_weight_scale() -> f64 {
    10.0
}
fn default_min_answers() -> usize {
    3
}
fn default_true() -> bool {
    true
}
fn default_results_file() -> String {
    "results.json".into()
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            assumed_total_questions: default_assumed_total(),
            progress_ceiling: default_progress_ceiling(),
            max_recommendations: default_max_recommendations(),
            backfill_threshold: default_backfill_threshold(),
            backfill_raw_limit: default_backfill_raw_limit(),
            backfill_per_field: default_backfill_per_field(),
            top_traits: default_top_traits(),
            trait_cap: default_trait_cap(),
            weight_scale: default_weight_scale(),
        }
    }
}

impl EngineConfig {
    /// Most careers a recommendation list may hold.
    pub const MAX_RECOMMENDATIONS: usize = 12;

    /// Check ranges the engine relies on.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] naming the first offending key.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |key: &str, message: String| ConfigError::InvalidValue {
            key: format!("engine.{key}"),
            message,
        };
        if !(1..=Self::MAX_RECOMMENDATIONS).contains(&self.max_recommendations) {
            return Err(invalid(
                "max_recommendations",
                format!("must be between 1 and {}", Self::MAX_RECOMMENDATIONS),
            ));
        }
        if !(self.trait_cap > 0.0 && self.trait_cap <= 100.0) {
            return Err(invalid("trait_cap", "must be in (0, 100]".to_string()));
        }
        if !(self.weight_scale.is_finite() && self.weight_scale >= 0.0) {
            return Err(invalid("weight_scale", "must be a non-negative number".to_string()));
        }
        if self.top_traits == 0 {
            return Err(invalid("top_traits", "must be at least 1".to_string()));
        }
        Ok(())
    }
}

impl Default for InsightsConfig {
    fn default() -> Self {
        Self {
            min_answers: default_min_answers(),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            save_results: true,
            results_file: default_results_file(),
        }
    }
}

impl Config {
    fn get_json_value_by_path<'a>(
        root: &'a serde_json::Value,
        key: &str,
    ) -> Option<&'a serde_json::Value> {
        if key.is_empty() {
            return None;
        }

        let mut current = root;
        for part in key.split('.') {
            current = current.get(part)?;
        }
        Some(current)
    }

    fn set_json_value_by_path(
        root: &mut serde_json::Value,
        key: &str,
        value: &str,
    ) -> Result<(), ConfigError> {
        let unknown = || ConfigError::UnknownKey(key.to_string());
        let invalid = |message: String| ConfigError::InvalidValue {
            key: key.to_string(),
            message,
        };

        let mut parts = key.split('.').peekable();
        if key.is_empty() {
            return Err(unknown());
        }

        let mut current = root;
        while let Some(part) = parts.next() {
            let is_leaf = parts.peek().is_none();
            if is_leaf {
                let obj = current.as_object_mut().ok_or_else(unknown)?;
                let existing = obj.get(part).ok_or_else(unknown)?;

                let new_value = match existing {
                    serde_json::Value::Bool(_) => serde_json::Value::Bool(
                        value.parse::<bool>().map_err(|e| invalid(e.to_string()))?,
                    ),
                    serde_json::Value::Number(_) => {
                        if let Ok(n) = value.parse::<u64>() {
                            serde_json::Value::Number(n.into())
                        } else if let Ok(n) = value.parse::<f64>() {
                            serde_json::Number::from_f64(n)
                                .map(serde_json::Value::Number)
                                .ok_or_else(|| invalid(format!("cannot parse '{value}' as number")))?
                        } else {
                            return Err(invalid(format!("cannot parse '{value}' as number")));
                        }
                    }
                    serde_json::Value::Object(_) | serde_json::Value::Array(_) => {
                        serde_json::from_str(value).map_err(|e| invalid(e.to_string()))?
                    }
                    _ => serde_json::Value::String(value.into()),
                };

                obj.insert(part.to_string(), new_value);
                return Ok(());
            }

            current = current.get_mut(part).ok_or_else(unknown)?;
        }

        Err(unknown())
    }

    fn path() -> Result<PathBuf, ConfigError> {
        Ok(data_dir()?.join("config.toml"))
    }

    /// Load from the data directory, writing defaults if no file exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed,
    /// or if the default config cannot be written to disk.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::path()?)
    }

    /// Load from `path`, writing defaults there if it does not exist.
    ///
    /// # Errors
    ///
    /// See [`Config::load`].
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => {
                let cfg: Self = toml::from_str(&content).map_err(|e| ConfigError::LoadFailed {
                    path: path.to_path_buf(),
                    message: e.to_string(),
                })?;
                cfg.engine.validate()?;
                Ok(cfg)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                let cfg = Self::default();
                cfg.save_to(path)?;
                Ok(cfg)
            }
            Err(e) => Err(ConfigError::LoadFailed {
                path: path.to_path_buf(),
                message: e.to_string(),
            }),
        }
    }

    /// Persist to the data directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the config cannot be serialized or written to disk.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let save_failed = |message: String| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message,
        };
        let content = toml::to_string_pretty(self).map_err(|e| save_failed(e.to_string()))?;
        std::fs::write(path, content).map_err(|e| save_failed(e.to_string()))
    }

    /// Get a config value as string by dot-separated key.
    pub fn get(&self, key: &str) -> Option<String> {
        let json = serde_json::to_value(self).ok()?;
        let val = Self::get_json_value_by_path(&json, key)?;
        match val {
            serde_json::Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    /// Set a config value by key without saving.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is unknown or the value cannot be parsed
    /// into the key's type.
    pub fn apply(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let invalid = |message: String| ConfigError::InvalidValue {
            key: key.to_string(),
            message,
        };
        let mut json = serde_json::to_value(&*self).map_err(|e| invalid(e.to_string()))?;
        Self::set_json_value_by_path(&mut json, key, value)?;
        let updated: Self = serde_json::from_value(json).map_err(|e| invalid(e.to_string()))?;
        updated.engine.validate()?;
        *self = updated;
        Ok(())
    }

    /// Set a config value by key and save.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is unknown, the value cannot be parsed,
    /// or the config cannot be saved.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        self.apply(key, value)?;
        self.save()
    }

    /// The catalog to run: the configured file, or the built-in dataset.
    ///
    /// # Errors
    ///
    /// Returns an error if a configured catalog file cannot be loaded.
    pub fn load_catalog(&self) -> Result<Catalog, CoreError> {
        match &self.catalog.path {
            Some(path) => Ok(Catalog::load(path)?),
            None => Ok(Catalog::builtin()),
        }
    }

    /// Where finished results are stored.
    ///
    /// # Errors
    ///
    /// Returns an error if the data directory is unavailable.
    pub fn results_path(&self) -> Result<PathBuf, ConfigError> {
        Ok(data_dir()?.join(&self.storage.results_file))
    }

    /// Load from disk, returning default on error.
    /// This is a convenience method that never fails.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_default()
    }
}
