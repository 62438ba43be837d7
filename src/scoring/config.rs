use serde::{Deserialize, Serialize};

/// Scoring constants used by the score engine.
///
/// Every field has a default, so a config file only needs to list the values
/// it changes.
///
/// Example YAML:
/// ```yaml
/// scoring:
///   colloquium_weight: 0.6
///   seminar_weight: 0.4
///   hours_threshold: 60
///   penalty_high_hours: 0.33
///   penalty_low_hours: 0.5
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ScoringConfig {
    /// Weight applied to the colloquium average (default: 0.6)
    pub colloquium_weight: f64,

    /// Weight applied to the seminar average (default: 0.4)
    pub seminar_weight: f64,

    /// Number of colloquium scores a student must have (default: 3)
    pub colloquium_count: usize,

    /// Accepted course-hour values
    pub valid_hours: Vec<u32>,

    /// Courses with at least this many hours use the high-hours penalty
    pub hours_threshold: u32,

    /// Points lost per absence at or above the threshold (default: 0.33)
    pub penalty_high_hours: f64,

    /// Points lost per absence below the threshold (default: 0.5)
    pub penalty_low_hours: f64,

    /// Lowest accepted per-item score
    pub min_score: f64,

    /// Highest accepted per-item score
    pub max_score: f64,

    /// Attendance score with zero absences
    pub max_attendance: f64,

    /// Cap of the base (30-point) total
    pub max_total_base: f64,

    /// Cap of the display (50-point) total
    pub max_total_display: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            colloquium_weight: 0.6,
            seminar_weight: 0.4,
            colloquium_count: 3,
            valid_hours: vec![15, 30, 45, 60, 75, 90],
            hours_threshold: 60,
            penalty_high_hours: 0.33,
            penalty_low_hours: 0.5,
            min_score: 0.0,
            max_score: 10.0,
            max_attendance: 10.0,
            max_total_base: 30.0,
            max_total_display: 50.0,
        }
    }
}

impl ScoringConfig {
    /// Factor that maps the base total onto the display total (50/30).
    pub fn display_factor(&self) -> f64 {
        self.max_total_display / self.max_total_base
    }

    /// Per-absence penalty for a course of the given length.
    pub fn penalty_for(&self, course_hours: u32) -> f64 {
        if course_hours >= self.hours_threshold {
            self.penalty_high_hours
        } else {
            self.penalty_low_hours
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_scoring_config() {
        let config = ScoringConfig::default();

        assert_eq!(config.colloquium_weight, 0.6);
        assert_eq!(config.seminar_weight, 0.4);
        assert_eq!(config.colloquium_count, 3);
        assert_eq!(config.valid_hours, vec![15, 30, 45, 60, 75, 90]);
        assert_eq!(config.max_total_base, 30.0);
        assert_eq!(config.max_total_display, 50.0);
    }

    #[test]
    fn test_penalty_threshold() {
        let config = ScoringConfig::default();
        assert_eq!(config.penalty_for(15), 0.5);
        assert_eq!(config.penalty_for(45), 0.5);
        assert_eq!(config.penalty_for(60), 0.33);
        assert_eq!(config.penalty_for(90), 0.33);
    }

    #[test]
    fn test_display_factor_is_five_thirds() {
        let config = ScoringConfig::default();
        assert_eq!(config.display_factor(), 5.0 / 3.0);
    }

    #[test]
    fn test_scoring_config_serde_roundtrip() {
        let config = ScoringConfig::default();
        let yaml = serde_saphyr::to_string(&config).unwrap();
        let parsed: ScoringConfig = serde_saphyr::from_str(&yaml).unwrap();
        assert_eq!(config, parsed);
    }

    #[test]
    fn test_partial_scoring_config_parse() {
        let yaml = r#"
colloquium_weight: 0.5
hours_threshold: 45
"#;
        let config: ScoringConfig = serde_saphyr::from_str(yaml).unwrap();
        assert_eq!(config.colloquium_weight, 0.5);
        assert_eq!(config.hours_threshold, 45);
        assert_eq!(config.seminar_weight, 0.4);
        assert_eq!(config.valid_hours.len(), 6);
    }

    #[test]
    fn test_empty_scoring_config_parse() {
        let config: ScoringConfig = serde_saphyr::from_str("{}").unwrap();
        assert_eq!(config, ScoringConfig::default());
    }

    #[test]
    fn test_unknown_field_rejected() {
        let yaml = "colloquium_wieght: 0.5\n";
        let result: Result<ScoringConfig, _> = serde_saphyr::from_str(yaml);
        assert!(result.is_err());
    }
}
