//! # Pathly Core Library
//!
//! This library provides the adaptive career quiz behind Pathly: it decides
//! which question comes next and what a sequence of answers means. Front
//! ends (the `pathly` CLI, the website) are thin layers over it.
//!
//! ## Architecture
//!
//! - **Catalog**: question graph plus trait, career and rule reference
//!   tables, built in or loaded from TOML/JSON
//! - **Quiz**: path resolver, trait aggregator, recommendation engine,
//!   insight narrator and progress estimator, all pure functions of the
//!   answer history
//! - **Storage**: TOML configuration and an optional store for finished
//!   results
//!
//! ## Key Components
//!
//! - [`QuizEngine`]: drives immutable [`QuizState`] values
//! - [`Catalog`]: the static dataset the engine runs against
//! - [`Config`]: application configuration management
//! - [`ResultStore`]: trait for persisting finished results

pub mod catalog;
pub mod error;
pub mod quiz;
pub mod storage;

pub use catalog::{Catalog, CatalogIssue, Condition, QuestionCategory, QuestionNode, QuizOption};
pub use error::{CatalogError, ConfigError, CoreError, QuizError, StoreError};
pub use quiz::{Answer, InsightGate, QuizEngine, QuizResult, QuizState, TraitScore};
pub use storage::{Config, EngineConfig, FallbackStore, JsonFileStore, MemoryStore, ResultStore};
