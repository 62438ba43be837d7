use std::io::{self, BufRead, Write};

use thiserror::Error;

use super::FAREWELL_MESSAGE;
use crate::config::SessionConfig;
use crate::output::{format_header, format_result, format_section};
use crate::scoring::{Field, Reason, ScoreEngine, ScoreInputs, ValidationError};

const ERR_NUMBER: &str = "Error: enter a valid number!";
const ERR_INTEGER: &str = "Error: enter a whole number!";

#[derive(Debug, Error)]
pub enum SessionError {
    /// Input was closed (Ctrl-D or end of a piped script)
    #[error("input closed")]
    Interrupted,

    #[error("console I/O failed: {0}")]
    Io(#[from] io::Error),
}

/// A console session reading answers from `input` and writing prompts,
/// errors and results to `output`.
pub struct Session<'a, R, W> {
    engine: &'a ScoreEngine,
    config: SessionConfig,
    input: R,
    output: W,
    use_colors: bool,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    pub fn new(
        engine: &'a ScoreEngine,
        config: SessionConfig,
        input: R,
        output: W,
        use_colors: bool,
    ) -> Self {
        Self {
            engine,
            config,
            input,
            output,
            use_colors,
        }
    }

    /// Run calculation rounds until the operator declines to repeat.
    pub fn run(&mut self) -> Result<(), SessionError> {
        writeln!(self.output, "{}", format_header(self.use_colors))?;

        loop {
            let inputs = self.collect_inputs()?;

            match self.engine.total(&inputs) {
                Ok(result) => {
                    tracing::debug!(
                        total_30 = result.total_30,
                        total_50 = result.total_50,
                        "calculation finished"
                    );
                    writeln!(self.output)?;
                    self.section("RESULTS")?;
                    writeln!(
                        self.output,
                        "{}",
                        format_result(&result, self.config.scale, self.use_colors)
                    )?;
                }
                Err(e) => {
                    tracing::warn!(error = %e, "calculation rejected assembled inputs");
                    writeln!(self.output, "\nCalculation error: {}", e)?;
                }
            }

            writeln!(self.output)?;
            let again = self.prompt("Calculate again? (y/n): ")?;
            if !again.eq_ignore_ascii_case("y") {
                writeln!(self.output, "\n{}", FAREWELL_MESSAGE)?;
                return Ok(());
            }
            writeln!(self.output)?;
        }
    }

    /// Ask for every field in order: hours, colloquiums, seminars,
    /// independent work, absences.
    pub fn collect_inputs(&mut self) -> Result<ScoreInputs, SessionError> {
        let course_hours = self.ask_course_hours()?;

        writeln!(self.output)?;
        self.section("COLLOQUIUM SCORES")?;
        let range = self.score_range_hint();
        writeln!(self.output, "  ({})", range)?;
        let mut colloquium = Vec::new();
        for i in 1..=self.engine.config().colloquium_count {
            let prompt = format!("  Colloquium {} score: ", i);
            colloquium.push(self.ask_score(&prompt, Field::Colloquium(i))?);
        }

        writeln!(self.output)?;
        self.section("SEMINAR SCORES")?;
        let count = self.ask_seminar_count()?;
        writeln!(self.output, "  ({})", range)?;
        let mut seminar = Vec::with_capacity(count);
        for i in 1..=count {
            let prompt = format!("  Seminar {} score: ", i);
            seminar.push(self.ask_score(&prompt, Field::Seminar(i))?);
        }

        writeln!(self.output)?;
        self.section("INDEPENDENT WORK")?;
        let independent_work = self.ask_score(
            &format!("  Independent work score ({}): ", self.score_bounds()),
            Field::IndependentWork,
        )?;

        writeln!(self.output)?;
        self.section("ATTENDANCE")?;
        let absences = self.ask_absences()?;

        Ok(ScoreInputs {
            course_hours,
            colloquium,
            seminar,
            independent_work,
            absences,
        })
    }

    fn ask_course_hours(&mut self) -> Result<u32, SessionError> {
        let options = self.engine.config().valid_hours.clone();

        self.section("SELECT COURSE HOURS")?;
        for (i, hours) in options.iter().enumerate() {
            writeln!(self.output, "  {}. {} hours", i + 1, hours)?;
        }

        loop {
            let choice = self.prompt(&format!("\nYour choice (1-{}): ", options.len()))?;
            let picked = choice
                .parse::<usize>()
                .ok()
                .and_then(|n| n.checked_sub(1))
                .and_then(|i| options.get(i).copied());

            match picked {
                Some(hours) => return Ok(hours),
                None => writeln!(
                    self.output,
                    "Error: choose between 1 and {}!",
                    options.len()
                )?,
            }
        }
    }

    fn ask_score(&mut self, prompt: &str, field: Field) -> Result<f64, SessionError> {
        loop {
            let raw = self.prompt(prompt)?;
            let Ok(value) = raw.parse::<f64>() else {
                writeln!(self.output, "{}", ERR_NUMBER)?;
                continue;
            };
            match self.engine.check_score(field, value) {
                Ok(value) => return Ok(value),
                Err(e) => writeln!(self.output, "{}", reprompt_message(&e))?,
            }
        }
    }

    fn ask_seminar_count(&mut self) -> Result<usize, SessionError> {
        let max = self.config.max_seminars;
        loop {
            let raw = self.prompt(&format!(
                "  How many seminar scores will you enter? (1-{}): ",
                max
            ))?;
            match raw.parse::<usize>() {
                Ok(n) if (1..=max).contains(&n) => return Ok(n),
                Ok(_) => writeln!(self.output, "Error: value must be between 1 and {}!", max)?,
                Err(_) => writeln!(self.output, "{}", ERR_INTEGER)?,
            }
        }
    }

    fn ask_absences(&mut self) -> Result<i64, SessionError> {
        let max = self.config.max_absences;
        loop {
            let raw = self.prompt("  Number of absences: ")?;
            let Ok(value) = raw.parse::<i64>() else {
                writeln!(self.output, "{}", ERR_INTEGER)?;
                continue;
            };
            match self.engine.check_absences(value) {
                Ok(n) if n <= max => return Ok(n),
                _ => writeln!(self.output, "Error: value must be between 0 and {}!", max)?,
            }
        }
    }

    /// Short "min-max" form used inline in a prompt
    fn score_bounds(&self) -> String {
        let config = self.engine.config();
        format!("{}-{}", config.min_score, config.max_score)
    }

    fn score_range_hint(&self) -> String {
        let config = self.engine.config();
        format!(
            "each score must be between {} and {}",
            config.min_score, config.max_score
        )
    }

    fn section(&mut self, title: &str) -> Result<(), SessionError> {
        writeln!(self.output, "{}", format_section(title, self.use_colors))?;
        Ok(())
    }

    /// Prompt with a message and return the trimmed answer.
    fn prompt(&mut self, message: &str) -> Result<String, SessionError> {
        write!(self.output, "{}", message)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(SessionError::Interrupted);
        }
        Ok(line.trim().to_string())
    }
}

/// Fixed re-prompt text for a rejected field value.
fn reprompt_message(err: &ValidationError) -> String {
    match &err.reason {
        Reason::OutOfRange { min, max, .. } => {
            format!("Error: value must be between {} and {}!", min, max)
        }
        other => format!("Error: {}!", other),
    }
}
