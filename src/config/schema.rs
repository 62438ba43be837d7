use serde::{Deserialize, Serialize};

use crate::output::ResultScale;
use crate::scoring::ScoringConfig;

/// Contents of `config.yaml`. Every section is optional.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub scoring: Option<ScoringConfig>,

    #[serde(default)]
    pub session: Option<SessionConfig>,
}

impl Config {
    /// Scoring constants with defaults filled in.
    pub fn effective_scoring(&self) -> ScoringConfig {
        self.scoring.clone().unwrap_or_default()
    }

    /// Session limits with defaults filled in.
    pub fn effective_session(&self) -> SessionConfig {
        self.session.clone().unwrap_or_default()
    }
}

/// Limits and presentation options for the console session.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct SessionConfig {
    /// Largest seminar count the session asks for (default: 10)
    pub max_seminars: usize,

    /// Largest absence count the session accepts (default: 100)
    pub max_absences: i64,

    /// Scale the final score is shown on: 50 or 10 (default: 50)
    pub scale: ResultScale,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            max_seminars: 10,
            max_absences: 100,
            scale: ResultScale::Fifty,
        }
    }
}
