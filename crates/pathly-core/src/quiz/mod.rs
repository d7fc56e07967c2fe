//! The adaptive quiz engine.
//!
//! Every function here is a pure function of the catalog, the engine
//! settings and the answer history; [`QuizEngine`] threads an immutable
//! [`QuizState`] through them.

mod answer;
mod insight;
mod progress;
mod recommend;
mod resolver;
mod state;
mod traits;

pub use answer::{Answer, AnswerHistory};
pub use insight::{narrate, InsightGate};
pub use progress::{estimate, progress_percent};
pub use recommend::recommend;
pub use resolver::resolve_next;
pub use state::{QuizEngine, QuizResult, QuizState};
pub use traits::{compute_profile, trait_scores, TraitScore};
