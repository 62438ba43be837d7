use serde::Serialize;

use super::config::ScoringConfig;
use super::error::{Field, Reason, ValidationError};

/// Average and weighted contribution of a multi-score component.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComponentScore {
    pub average: f64,
    pub weighted: f64,
}

/// Everything a student enters for one calculation.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreInputs {
    pub course_hours: u32,
    pub colloquium: Vec<f64>,
    pub seminar: Vec<f64>,
    pub independent_work: f64,
    pub absences: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreResult {
    pub colloquium_average: f64,
    pub colloquium_weighted: f64,
    pub seminar_average: f64,
    pub seminar_weighted: f64,
    pub attendance: f64,
    pub independent_work: f64,
    /// Sum of all components on the base scale, capped at 30
    pub total_30: f64,
    /// `total_30` rescaled to the display scale, capped at 50
    pub total_50: f64,
}

impl ScoreResult {
    /// Final score on a 10-point scale.
    pub fn display_10(&self) -> f64 {
        self.total_50 / 5.0
    }
}

/// Computes admission scores against a fixed set of scoring constants.
///
/// All methods are pure: the same inputs always produce the same output and
/// nothing is mutated, so one engine can be shared freely across threads.
#[derive(Debug, Clone, Default)]
pub struct ScoreEngine {
    config: ScoringConfig,
}

impl ScoreEngine {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Check a single per-item score against the configured range.
    pub fn check_score(&self, field: Field, value: f64) -> Result<f64, ValidationError> {
        let (min, max) = (self.config.min_score, self.config.max_score);
        if (min..=max).contains(&value) {
            Ok(value)
        } else {
            Err(ValidationError::new(
                field,
                Reason::OutOfRange { value, min, max },
            ))
        }
    }

    pub fn check_course_hours(&self, course_hours: u32) -> Result<u32, ValidationError> {
        if self.config.valid_hours.contains(&course_hours) {
            Ok(course_hours)
        } else {
            Err(ValidationError::new(
                Field::CourseHours,
                Reason::InvalidChoice {
                    value: course_hours,
                    allowed: self.config.valid_hours.clone(),
                },
            ))
        }
    }

    pub fn check_absences(&self, absences: i64) -> Result<i64, ValidationError> {
        if absences < 0 {
            Err(ValidationError::new(Field::Absences, Reason::Negative(absences)))
        } else {
            Ok(absences)
        }
    }

    /// Colloquium average and its weighted contribution.
    ///
    /// Requires exactly `colloquium_count` scores, each within the score range.
    pub fn colloquium(&self, scores: &[f64]) -> Result<ComponentScore, ValidationError> {
        let expected = self.config.colloquium_count;
        if scores.len() != expected {
            return Err(ValidationError::new(
                Field::Colloquiums,
                Reason::WrongCount {
                    expected,
                    actual: scores.len(),
                },
            ));
        }
        for (i, score) in scores.iter().enumerate() {
            self.check_score(Field::Colloquium(i + 1), *score)?;
        }

        let average = mean(scores);
        Ok(ComponentScore {
            average,
            weighted: average * self.config.colloquium_weight,
        })
    }

    /// Seminar average and its weighted contribution. Any non-zero count is accepted.
    pub fn seminar(&self, scores: &[f64]) -> Result<ComponentScore, ValidationError> {
        if scores.is_empty() {
            return Err(ValidationError::new(Field::Seminars, Reason::Empty));
        }
        for (i, score) in scores.iter().enumerate() {
            self.check_score(Field::Seminar(i + 1), *score)?;
        }

        let average = mean(scores);
        Ok(ComponentScore {
            average,
            weighted: average * self.config.seminar_weight,
        })
    }

    /// Attendance score: `max_attendance - absences * penalty`, clamped to
    /// `[0, max_attendance]`.
    pub fn attendance(&self, course_hours: u32, absences: i64) -> Result<f64, ValidationError> {
        let course_hours = self.check_course_hours(course_hours)?;
        let absences = self.check_absences(absences)?;

        let penalty = self.config.penalty_for(course_hours);
        let raw = self.config.max_attendance - absences as f64 * penalty;
        Ok(raw.max(0.0).min(self.config.max_attendance))
    }

    /// Full calculation. Stops at the first invalid input, checking independent
    /// work first and then colloquium, seminar and attendance in that order.
    pub fn total(&self, inputs: &ScoreInputs) -> Result<ScoreResult, ValidationError> {
        let independent_work = self.check_score(Field::IndependentWork, inputs.independent_work)?;

        let colloquium = self.colloquium(&inputs.colloquium)?;
        let seminar = self.seminar(&inputs.seminar)?;
        let attendance = self.attendance(inputs.course_hours, inputs.absences)?;

        let sum = colloquium.weighted + seminar.weighted + attendance + independent_work;
        let total_30 = sum.min(self.config.max_total_base);
        let total_50 = (total_30 * self.config.display_factor()).min(self.config.max_total_display);

        Ok(ScoreResult {
            colloquium_average: colloquium.average,
            colloquium_weighted: colloquium.weighted,
            seminar_average: seminar.average,
            seminar_weighted: seminar.weighted,
            attendance,
            independent_work,
            total_30,
            total_50,
        })
    }
}

fn mean(scores: &[f64]) -> f64 {
    scores.iter().sum::<f64>() / scores.len() as f64
}
