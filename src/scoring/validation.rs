use super::config::ScoringConfig;

/// Validate scoring configuration at startup.
/// Returns all validation errors at once (not just the first).
pub fn validate_scoring(config: &ScoringConfig) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    // Weights
    if config.colloquium_weight.is_nan() || config.colloquium_weight < 0.0 {
        errors.push("scoring.colloquium_weight: must be non-negative".to_string());
    }
    if config.seminar_weight.is_nan() || config.seminar_weight < 0.0 {
        errors.push("scoring.seminar_weight: must be non-negative".to_string());
    }

    if config.colloquium_count == 0 {
        errors.push("scoring.colloquium_count: must be at least 1".to_string());
    }

    // Course hours
    if config.valid_hours.is_empty() {
        errors.push("scoring.valid_hours: must list at least one value".to_string());
    }
    for (i, hours) in config.valid_hours.iter().enumerate() {
        if *hours == 0 {
            errors.push(format!("scoring.valid_hours[{}]: must be positive", i));
        }
    }

    // Attendance penalties
    if config.penalty_high_hours.is_nan() || config.penalty_high_hours < 0.0 {
        errors.push("scoring.penalty_high_hours: must be non-negative".to_string());
    }
    if config.penalty_low_hours.is_nan() || config.penalty_low_hours < 0.0 {
        errors.push("scoring.penalty_low_hours: must be non-negative".to_string());
    }

    // Limits
    if config.min_score.is_nan()
        || config.max_score.is_nan()
        || config.min_score >= config.max_score
    {
        errors.push(format!(
            "scoring.min_score: must be below max_score ({} >= {})",
            config.min_score, config.max_score
        ));
    }
    if config.max_attendance.is_nan() || config.max_attendance <= 0.0 {
        errors.push("scoring.max_attendance: must be positive".to_string());
    }
    if config.max_total_base.is_nan() || config.max_total_base <= 0.0 {
        errors.push("scoring.max_total_base: must be positive".to_string());
    }
    if config.max_total_display.is_nan() || config.max_total_display <= 0.0 {
        errors.push("scoring.max_total_display: must be positive".to_string());
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_config() {
        assert!(validate_scoring(&ScoringConfig::default()).is_ok());
    }

    #[test]
    fn test_negative_weight() {
        let config = ScoringConfig {
            colloquium_weight: -0.6,
            ..ScoringConfig::default()
        };
        let errors = validate_scoring(&config).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("scoring.colloquium_weight"));
    }

    #[test]
    fn test_nan_weight_rejected() {
        let config = ScoringConfig {
            seminar_weight: f64::NAN,
            ..ScoringConfig::default()
        };
        let errors = validate_scoring(&config).unwrap_err();
        assert!(errors[0].contains("scoring.seminar_weight"));
    }

    #[test]
    fn test_empty_valid_hours() {
        let config = ScoringConfig {
            valid_hours: vec![],
            ..ScoringConfig::default()
        };
        let errors = validate_scoring(&config).unwrap_err();
        assert!(errors[0].contains("scoring.valid_hours"));
    }

    #[test]
    fn test_zero_hours_entry() {
        let config = ScoringConfig {
            valid_hours: vec![15, 0, 30],
            ..ScoringConfig::default()
        };
        let errors = validate_scoring(&config).unwrap_err();
        assert_eq!(errors, vec!["scoring.valid_hours[1]: must be positive"]);
    }

    #[test]
    fn test_nan_limits_rejected() {
        let config = ScoringConfig {
            max_score: f64::NAN,
            max_total_display: f64::NAN,
            ..ScoringConfig::default()
        };
        let errors = validate_scoring(&config).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors[0].contains("scoring.min_score"));
        assert!(errors[1].contains("scoring.max_total_display"));
    }

    #[test]
    fn test_inverted_score_range() {
        let config = ScoringConfig {
            min_score: 10.0,
            max_score: 0.0,
            ..ScoringConfig::default()
        };
        let errors = validate_scoring(&config).unwrap_err();
        assert!(errors[0].contains("scoring.min_score"));
    }

    #[test]
    fn test_collects_all_errors() {
        let config = ScoringConfig {
            colloquium_count: 0,        // Error 1
            penalty_low_hours: -1.0,    // Error 2
            max_total_base: 0.0,        // Error 3
            ..ScoringConfig::default()
        };
        let errors = validate_scoring(&config).unwrap_err();
        assert_eq!(errors.len(), 3);
    }
}
