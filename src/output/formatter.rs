use std::fmt;
use std::io::IsTerminal;

use owo_colors::OwoColorize;
use serde::{Deserialize, Serialize};

use crate::scoring::ScoreResult;

const RULE_WIDTH: usize = 40;

/// Scale the final score is presented on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum ResultScale {
    #[default]
    Fifty,
    Ten,
}

impl ResultScale {
    pub fn points(self) -> u32 {
        match self {
            ResultScale::Fifty => 50,
            ResultScale::Ten => 10,
        }
    }

    /// Final score of `result` expressed on this scale.
    pub fn final_score(self, result: &ScoreResult) -> f64 {
        match self {
            ResultScale::Fifty => result.total_50,
            ResultScale::Ten => result.display_10(),
        }
    }
}

impl TryFrom<u32> for ResultScale {
    type Error = String;

    fn try_from(points: u32) -> Result<Self, Self::Error> {
        match points {
            50 => Ok(ResultScale::Fifty),
            10 => Ok(ResultScale::Ten),
            other => Err(format!("result scale must be 50 or 10, got {}", other)),
        }
    }
}

impl From<ResultScale> for u32 {
    fn from(scale: ResultScale) -> Self {
        scale.points()
    }
}

impl fmt::Display for ResultScale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.points())
    }
}

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Format a score with two decimals
pub fn format_score(score: f64) -> String {
    format!("{:.2}", score)
}

/// Banner printed once when the interactive session starts
pub fn format_header(use_colors: bool) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    let title = "University Exam Entry Score Calculator";
    if use_colors {
        format!("{}\n  {}\n{}", rule.dimmed(), title.bold(), rule.dimmed())
    } else {
        format!("{}\n  {}\n{}", rule, title, rule)
    }
}

/// Section heading used between prompt groups
pub fn format_section(title: &str, use_colors: bool) -> String {
    let rule = "-".repeat(RULE_WIDTH);
    if use_colors {
        format!("{}\n{}\n{}", rule.dimmed(), title.bold(), rule.dimmed())
    } else {
        format!("{}\n{}\n{}", rule, title, rule)
    }
}

/// Multi-line breakdown of a result, final score on the given scale
pub fn format_result(result: &ScoreResult, scale: ResultScale, use_colors: bool) -> String {
    let lines = [
        format!(
            "Colloquium:   {:>6} (average: {})",
            format_score(result.colloquium_weighted),
            format_score(result.colloquium_average)
        ),
        format!(
            "Seminar:      {:>6} (average: {})",
            format_score(result.seminar_weighted),
            format_score(result.seminar_average)
        ),
        format!("Attendance:   {:>6}", format_score(result.attendance)),
        format!("Independent:  {:>6}", format_score(result.independent_work)),
    ];
    let rule = "-".repeat(RULE_WIDTH);
    let final_line = format!(
        "Final score:  {:>6} / {}",
        format_score(scale.final_score(result)),
        scale
    );

    if use_colors {
        format!(
            "{}\n{}\n{}",
            lines.join("\n"),
            rule.dimmed(),
            final_line.bold().green()
        )
    } else {
        format!("{}\n{}\n{}", lines.join("\n"), rule, final_line)
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    #[serde(flatten)]
    result: &'a ScoreResult,
    scale: ResultScale,
    final_score: f64,
}

/// Pretty JSON with every result field plus the chosen scale and final score
pub fn format_json(result: &ScoreResult, scale: ResultScale) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&JsonReport {
        result,
        scale,
        final_score: scale.final_score(result),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_result() -> ScoreResult {
        ScoreResult {
            colloquium_average: 8.0,
            colloquium_weighted: 4.8,
            seminar_average: 7.0,
            seminar_weighted: 2.8,
            attendance: 8.0,
            independent_work: 9.0,
            total_30: 24.6,
            total_50: 41.0,
        }
    }

    #[test]
    fn test_format_score_two_decimals() {
        assert_eq!(format_score(0.0), "0.00");
        assert_eq!(format_score(16.666666666666668), "16.67");
        assert_eq!(format_score(9.01), "9.01");
    }

    #[test]
    fn test_format_result_plain() {
        let result = format_result(&sample_result(), ResultScale::Fifty, false);
        let lines: Vec<&str> = result.lines().collect();
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], "Colloquium:     4.80 (average: 8.00)");
        assert_eq!(lines[1], "Seminar:        2.80 (average: 7.00)");
        assert_eq!(lines[2], "Attendance:     8.00");
        assert_eq!(lines[3], "Independent:    9.00");
        assert_eq!(lines[5], "Final score:   41.00 / 50");
    }

    #[test]
    fn test_format_result_ten_point_scale() {
        let result = format_result(&sample_result(), ResultScale::Ten, false);
        assert!(result.ends_with("Final score:    8.20 / 10"));
    }

    #[test]
    fn test_format_header_plain() {
        let header = format_header(false);
        assert!(header.contains("University Exam Entry Score Calculator"));
        assert_eq!(header.lines().count(), 3);
    }

    #[test]
    fn test_format_json_fields() {
        let json = format_json(&sample_result(), ResultScale::Fifty).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["total_50"], 41.0);
        assert_eq!(value["colloquium_weighted"], 4.8);
        assert_eq!(value["scale"], 50);
        assert_eq!(value["final_score"], 41.0);
    }

    #[test]
    fn test_format_json_ten_point_scale() {
        let json = format_json(&sample_result(), ResultScale::Ten).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["scale"], 10);
        assert_eq!(value["final_score"], 8.2);
    }

    #[test]
    fn test_result_scale_conversions() {
        assert_eq!(ResultScale::try_from(50), Ok(ResultScale::Fifty));
        assert_eq!(ResultScale::try_from(10), Ok(ResultScale::Ten));
        assert!(ResultScale::try_from(100).is_err());
        assert_eq!(u32::from(ResultScale::Ten), 10);
        assert_eq!(ResultScale::default(), ResultScale::Fifty);
    }
}
