//! finwell: bilingual financial-wellness self-assessment
//!
//! Scores a questionnaire, names a persona and suggests next steps.

#![allow(clippy::needless_pass_by_value)]

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{Shell, generate};
use finwell::{
    cli::{self, LessonAction, Ordering, exit_codes},
    config::{AppConfig, ConfigOverrides},
    model::Locale,
    reports::ReportFormat,
    scoring::Bucket,
};
use std::io::{self, Write as _};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Build long version string with supported locales and outputs
const fn build_long_version() -> &'static str {
    concat!(
        env!("CARGO_PKG_VERSION"),
        "\n\nLocales:",
        "\n  en, es",
        "\n\nOutput Formats:",
        "\n  summary, json",
        "\n\nDimensions:",
        "\n  habits, confidence, resilience, inclusion"
    )
}

#[derive(Parser)]
#[command(name = "finwell")]
#[command(version, long_version = build_long_version())]
#[command(about = "Bilingual financial-wellness self-assessment", long_about = None)]
#[command(after_help = "EXIT CODES:
    0  Success
    1  Assessment incomplete (with --fail-on-incomplete)
    3  Error occurred

EXAMPLES:
    # Answer questions one at a time, then see your plan
    finwell questions --locale es
    finwell answer q1 2
    finwell assess

    # Score an answer file and export JSON
    finwell assess --answers answers.json -o json > report.json

    # Reproducible shuffled order
    finwell questions --shuffle --seed 42")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Disable colored output (also respects `NO_COLOR` env)
    #[arg(long, global = true)]
    no_color: bool,

    /// Path to configuration file
    #[arg(long, global = true, env = "FINWELL_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

// ============================================================================
// Command argument structs
// ============================================================================

/// Options shared by commands that read the question bank
#[derive(Parser)]
struct CommonArgs {
    /// Display language
    #[arg(short, long, env = "FINWELL_LOCALE")]
    locale: Option<Locale>,

    /// Custom question bank (YAML)
    #[arg(long)]
    questions: Option<PathBuf>,

    /// Progress store file
    #[arg(long, env = "FINWELL_STORE")]
    store: Option<PathBuf>,
}

/// Options for commands that render output
#[derive(Parser)]
struct OutputArgs {
    /// Output format
    #[arg(short, long)]
    output: Option<ReportFormat>,

    /// Output file path (stdout if not specified)
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,
}

/// Arguments for the `assess` subcommand
#[derive(Parser)]
struct AssessArgs {
    #[command(flatten)]
    common: CommonArgs,

    #[command(flatten)]
    output: OutputArgs,

    /// Score answers from a JSON file instead of saved progress
    #[arg(short, long)]
    answers: Option<PathBuf>,

    /// Maximum number of plan steps
    #[arg(long)]
    max_steps: Option<usize>,

    /// Highest bucket that still counts as a focus area
    #[arg(long, value_parser = parse_bucket)]
    focus_ceiling: Option<Bucket>,

    /// Exit with code 1 if any question is unanswered
    #[arg(long)]
    fail_on_incomplete: bool,
}

/// Arguments for the `questions` subcommand
#[derive(Parser)]
struct QuestionsArgs {
    #[command(flatten)]
    common: CommonArgs,

    #[command(flatten)]
    output: OutputArgs,

    /// Shuffle questions and options
    #[arg(long)]
    shuffle: bool,

    /// Seed for a reproducible shuffle (implies --shuffle)
    #[arg(long)]
    seed: Option<u64>,
}

/// Arguments for the `answer` subcommand
#[derive(Parser)]
struct AnswerArgs {
    #[command(flatten)]
    common: CommonArgs,

    /// Question id, e.g. q1
    question: String,

    /// Answer index as listed by `finwell questions`
    index: u32,
}

#[derive(Subcommand)]
enum Commands {
    /// Score answers and print persona and plan
    Assess(AssessArgs),

    /// List the questions and their answer indices
    Questions(QuestionsArgs),

    /// Save one answer to progress
    Answer(AnswerArgs),

    /// Clear saved answers
    Reset {
        /// Progress store file
        #[arg(long, env = "FINWELL_STORE")]
        store: Option<PathBuf>,
    },

    /// Track lesson completion
    Lesson {
        #[command(subcommand)]
        action: LessonCommand,

        /// Progress store file
        #[arg(long, global = true, env = "FINWELL_STORE")]
        store: Option<PathBuf>,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Generate JSON Schema for the config file format
    ConfigSchema {
        /// Write schema to file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show, discover, or initialize configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate a man page and print it to stdout
    Man,
}

/// Sub-subcommands for the `lesson` command
#[derive(Subcommand)]
enum LessonCommand {
    /// Mark a lesson complete
    Complete { id: String },
    /// Show whether a lesson is complete
    Status { id: String },
    /// Forget a lesson's completion
    Clear { id: String },
}

/// Sub-subcommands for the `config` command
#[derive(Subcommand)]
enum ConfigAction {
    /// Print current effective configuration (merged from defaults + file)
    Show,
    /// Print config file search paths and discovered config file
    Path,
    /// Generate an example .finwell.yaml in the current directory
    Init,
}

fn parse_bucket(value: &str) -> Result<Bucket, String> {
    Bucket::from_key(value).ok_or_else(|| {
        let keys: Vec<&str> = Bucket::ALL.iter().map(|b| b.key()).collect();
        format!("expected one of: {}", keys.join(", "))
    })
}

impl CommonArgs {
    fn apply(self, overrides: &mut ConfigOverrides) {
        overrides.locale = self.locale;
        overrides.questions_file = self.questions;
        overrides.store_path = self.store;
    }
}

impl OutputArgs {
    fn apply(self, overrides: &mut ConfigOverrides) {
        overrides.format = self.output;
        overrides.output_file = self.output_file;
    }
}

fn load_config(config_path: Option<&std::path::Path>, overrides: &ConfigOverrides) -> AppConfig {
    let (config, loaded_from) = AppConfig::from_file_with_overrides(config_path, overrides);
    if let Some(path) = loaded_from {
        tracing::debug!("Using config from {}", path.display());
    }
    config
}

fn main() {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false).with_writer(io::stderr))
        .init();

    match run(cli) {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("Error: {err:#}");
            std::process::exit(exit_codes::ERROR);
        }
    }
}

fn run(cli: Cli) -> Result<i32> {
    let mut overrides = ConfigOverrides {
        no_color: cli.no_color,
        ..ConfigOverrides::default()
    };
    let config_path = cli.config.as_deref();

    // Dispatch to command handlers
    match cli.command {
        Commands::Assess(args) => {
            args.common.apply(&mut overrides);
            args.output.apply(&mut overrides);
            overrides.max_steps = args.max_steps;
            overrides.focus_ceiling = args.focus_ceiling;
            let config = load_config(config_path, &overrides);
            cli::run_assess(&config, args.answers, args.fail_on_incomplete)
        }

        Commands::Questions(args) => {
            args.common.apply(&mut overrides);
            args.output.apply(&mut overrides);
            let config = load_config(config_path, &overrides);
            let ordering =
                Ordering::from_flags(args.shuffle, args.seed, config.assessment.shuffle_seed);
            cli::run_questions(&config, ordering)
        }

        Commands::Answer(args) => {
            args.common.apply(&mut overrides);
            let config = load_config(config_path, &overrides);
            cli::run_answer(&config, &args.question, args.index)
        }

        Commands::Reset { store } => {
            overrides.store_path = store;
            cli::run_reset(&load_config(config_path, &overrides))
        }

        Commands::Lesson { action, store } => {
            overrides.store_path = store;
            let config = load_config(config_path, &overrides);
            let (action, id) = match action {
                LessonCommand::Complete { id } => (LessonAction::Complete, id),
                LessonCommand::Status { id } => (LessonAction::Status, id),
                LessonCommand::Clear { id } => (LessonAction::Clear, id),
            };
            cli::run_lesson(&config, action, &id)
        }

        Commands::Completions { shell } => {
            generate(shell, &mut Cli::command(), "finwell", &mut io::stdout());
            Ok(exit_codes::SUCCESS)
        }

        Commands::ConfigSchema { output } => {
            let schema = finwell::config::generate_json_schema()?;
            match output {
                Some(path) => {
                    std::fs::write(&path, &schema)
                        .with_context(|| format!("failed to write {}", path.display()))?;
                    eprintln!("Schema written to {}", path.display());
                }
                None => {
                    println!("{schema}");
                }
            }
            Ok(exit_codes::SUCCESS)
        }

        Commands::Config { action } => match action {
            ConfigAction::Show => {
                let (config, loaded_from) = finwell::config::load_or_default(config_path);
                if let Some(path) = &loaded_from {
                    eprintln!("# Loaded from: {}", path.display());
                } else {
                    eprintln!("# No config file found; showing defaults");
                }
                let yaml =
                    serde_yaml_ng::to_string(&config).context("failed to serialize config")?;
                print!("{yaml}");
                Ok(exit_codes::SUCCESS)
            }
            ConfigAction::Path => {
                let search_paths: [Option<String>; 3] = [
                    std::env::current_dir()
                        .ok()
                        .map(|p| p.display().to_string()),
                    ::dirs::config_dir().map(|p| {
                        p.join(finwell::config::APP_DIR_NAME).display().to_string()
                    }),
                    ::dirs::home_dir().map(|p| p.display().to_string()),
                ];
                eprintln!("Config file search paths (in order):");
                for path in search_paths.into_iter().flatten() {
                    eprintln!("  {path}");
                }
                eprintln!();
                eprintln!("Recognized file names:");
                for name in finwell::config::CONFIG_FILE_NAMES {
                    eprintln!("  {name}");
                }
                eprintln!();
                match finwell::config::discover_config_file(config_path) {
                    Some(path) => eprintln!("Active config file: {}", path.display()),
                    None => eprintln!("No config file found."),
                }
                Ok(exit_codes::SUCCESS)
            }
            ConfigAction::Init => {
                let target = std::env::current_dir()
                    .context("cannot determine current directory")?
                    .join(".finwell.yaml");
                if target.exists() {
                    anyhow::bail!(
                        "{} already exists. Remove it first to re-initialize.",
                        target.display()
                    );
                }
                let content = finwell::config::generate_full_example_config();
                std::fs::write(&target, content)
                    .with_context(|| format!("failed to write {}", target.display()))?;
                eprintln!("Created {}", target.display());
                Ok(exit_codes::SUCCESS)
            }
        },

        Commands::Man => {
            let cmd = Cli::command();
            let man = clap_mangen::Man::new(cmd);
            let mut buf = Vec::new();
            man.render(&mut buf).context("failed to render man page")?;
            io::stdout().write_all(&buf)?;
            Ok(exit_codes::SUCCESS)
        }
    }
}
