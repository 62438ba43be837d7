pub mod config;
pub mod engine;
pub mod error;
pub mod validation;

pub use config::ScoringConfig;
pub use engine::{ComponentScore, ScoreEngine, ScoreInputs, ScoreResult};
pub use error::{Field, Reason, ValidationError};
pub use validation::validate_scoring;
