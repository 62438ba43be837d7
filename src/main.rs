use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use admission_score::output::ResultScale;
use admission_score::scoring::{ScoreEngine, ScoreInputs};
use admission_score::session::{Session, SessionError, INTERRUPTED_MESSAGE};

const EXIT_SUCCESS: i32 = 0;
const EXIT_FAILURE: i32 = 1;
const EXIT_VALIDATION: i32 = 2;
const EXIT_CONFIG: i32 = 4;

#[derive(Subcommand, Debug)]
enum Commands {
    /// Enter scores step by step at the console (default if no subcommand)
    Interactive,
    /// Compute a score in one shot from command-line flags
    Calc(CalcArgs),
    /// Write a config file with the default scoring constants
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
}

#[derive(Args, Debug)]
struct CalcArgs {
    /// Course hours (one of the configured values, e.g. 15, 30, 45, 60, 75, 90)
    #[arg(long)]
    hours: u32,

    /// Colloquium scores (exactly three by default)
    #[arg(long, num_args = 1.., required = true, allow_negative_numbers = true)]
    colloquium: Vec<f64>,

    /// Seminar scores (one or more)
    #[arg(long, num_args = 1.., required = true, allow_negative_numbers = true)]
    seminar: Vec<f64>,

    /// Independent work score
    #[arg(long, allow_negative_numbers = true)]
    independent: f64,

    /// Number of absences
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    absences: i64,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Scale of the final score: 50 or 10 (defaults to the config value)
    #[arg(long, value_parser = parse_scale)]
    scale: Option<ResultScale>,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "admission-score")]
#[command(about = "University exam entry score calculator", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/admission-score/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

fn parse_scale(s: &str) -> Result<ResultScale, String> {
    let points: u32 = s.parse().map_err(|_| format!("'{}' is not a number", s))?;
    ResultScale::try_from(points)
}

fn main() {
    let cli = Cli::parse();
    admission_score::logging::init(cli.verbose);

    let command = cli.command.unwrap_or(Commands::Interactive);
    let config_path = cli.config.map(PathBuf::from);

    // Init writes the file, so it must not require a loadable one
    if let Commands::Init { force } = &command {
        std::process::exit(run_init(config_path, *force));
    }

    let config = match admission_score::config::load_config(config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    // Validate config at startup
    if let Err(errors) = admission_score::config::validate_config(&config) {
        eprintln!("Config errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(EXIT_CONFIG);
    }

    let engine = ScoreEngine::new(config.effective_scoring());
    let session_config = config.effective_session();
    let use_colors = !cli.no_color && admission_score::output::should_use_colors();
    tracing::debug!(config = ?engine.config(), "scoring constants");

    let code = match command {
        Commands::Calc(args) => run_calc(&engine, args, session_config.scale, use_colors),
        _ => run_interactive(&engine, session_config, use_colors),
    };
    std::process::exit(code);
}

fn run_init(path: Option<PathBuf>, force: bool) -> i32 {
    let path = match path {
        Some(p) => p,
        None => match admission_score::config::get_config_path() {
            Ok(p) => p,
            Err(e) => {
                eprintln!("Config error: {:#}", e);
                return EXIT_CONFIG;
            }
        },
    };

    if let Err(e) = admission_score::config::write_default_config(&path, force) {
        eprintln!("Config error: {:#}", e);
        return EXIT_CONFIG;
    }
    println!("Config written to {}", path.display());
    EXIT_SUCCESS
}

fn run_interactive(
    engine: &ScoreEngine,
    session_config: admission_score::config::SessionConfig,
    use_colors: bool,
) -> i32 {
    // Ctrl-C and closed input both end the session with the same message
    install_interrupt_handler();

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let result =
        Session::new(engine, session_config, stdin.lock(), stdout.lock(), use_colors).run();

    match result {
        Ok(()) => EXIT_SUCCESS,
        Err(SessionError::Interrupted) => {
            println!("\n\n{}", INTERRUPTED_MESSAGE);
            EXIT_SUCCESS
        }
        Err(e) => {
            eprintln!("\nUnexpected error: {}", e);
            EXIT_FAILURE
        }
    }
}

#[cfg(unix)]
fn install_interrupt_handler() {
    if let Err(e) = admission_score::interrupt::install() {
        tracing::warn!(error = %e, "Ctrl-C will terminate without a message");
    }
}

#[cfg(not(unix))]
fn install_interrupt_handler() {}

fn run_calc(
    engine: &ScoreEngine,
    args: CalcArgs,
    default_scale: ResultScale,
    use_colors: bool,
) -> i32 {
    let inputs = ScoreInputs {
        course_hours: args.hours,
        colloquium: args.colloquium,
        seminar: args.seminar,
        independent_work: args.independent,
        absences: args.absences,
    };

    let result = match engine.total(&inputs) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Validation error: {}", e);
            return EXIT_VALIDATION;
        }
    };

    let scale = args.scale.unwrap_or(default_scale);
    match args.format {
        OutputFormat::Text => {
            println!(
                "{}",
                admission_score::output::format_result(&result, scale, use_colors)
            );
        }
        OutputFormat::Json => match admission_score::output::format_json(&result, scale) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Unexpected error: {}", e);
                return EXIT_FAILURE;
            }
        },
    }
    EXIT_SUCCESS
}
