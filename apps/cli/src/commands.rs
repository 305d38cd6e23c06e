//! CLI command definitions, routing, and tracing setup.

use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::{Parser, Subcommand};
use color_eyre::eyre::Result;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

use claimsift_keywords::KeywordMatcher;
use claimsift_pipeline::apply_filtering;
use claimsift_shared::{AppConfig, init_config, load_config};
use claimsift_table::io;

// ---------------------------------------------------------------------------
// CLI structure
// ---------------------------------------------------------------------------

/// Claimsift — filter unclaimed-property owner records.
#[derive(Parser)]
#[command(
    name = "claimsift",
    version,
    about = "Filter unclaimed-property owner records down to a mailable report.",
    long_about = None,
)]
pub(crate) struct Cli {
    /// Log format: text (default) or json.
    #[arg(long, default_value = "text", global = true)]
    pub log_format: LogFormat,

    /// Verbosity level (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Log output format.
#[derive(Clone, Debug, clap::ValueEnum)]
pub(crate) enum LogFormat {
    Text,
    Json,
}

/// Top-level CLI subcommands.
#[derive(Subcommand)]
pub(crate) enum Command {
    /// Filter an owner-record CSV and write the report.
    Run {
        /// Input CSV of owner records.
        input: PathBuf,

        /// Output CSV for the filtered report.
        output: PathBuf,

        /// Business-keyword list (defaults to the configured path).
        #[arg(short, long)]
        keywords: Option<PathBuf>,
    },

    /// Configuration management.
    Config {
        /// Config subcommand.
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config subcommands.
#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Initialize config file with defaults.
    Init,
    /// Show resolved configuration.
    Show,
}

// ---------------------------------------------------------------------------
// Tracing setup
// ---------------------------------------------------------------------------

/// Initialize tracing based on CLI flags.
pub(crate) fn init_tracing(cli: &Cli) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = match cli.verbose {
        0 => "claimsift=info",
        1 => "claimsift=debug",
        _ => "claimsift=trace",
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    match cli.log_format {
        LogFormat::Text => {
            fmt()
                .with_env_filter(env_filter)
                .with_target(false)
                .init();
        }
        LogFormat::Json => {
            fmt().json().with_env_filter(env_filter).init();
        }
    }
}

// ---------------------------------------------------------------------------
// Command dispatch
// ---------------------------------------------------------------------------

/// Run the CLI command.
pub(crate) fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Run {
            input,
            output,
            keywords,
        } => cmd_run(&input, &output, keywords.as_deref()),
        Command::Config { action } => match action {
            ConfigAction::Init => cmd_config_init(),
            ConfigAction::Show => cmd_config_show(),
        },
    }
}

// ---------------------------------------------------------------------------
// Command handlers
// ---------------------------------------------------------------------------

fn cmd_run(input: &Path, output: &Path, keywords: Option<&Path>) -> Result<()> {
    let config = load_config()?;
    let keywords_path = match keywords {
        Some(path) => path.to_path_buf(),
        None => PathBuf::from(&config.defaults.keywords_file),
    };

    info!(
        input = %input.display(),
        output = %output.display(),
        keywords = %keywords_path.display(),
        "filtering owner records"
    );

    let started = Instant::now();
    let progress = CliProgress::new();

    progress.phase("Loading keywords");
    let matcher = KeywordMatcher::from_file(&keywords_path)?;

    progress.phase(&format!("Reading {}", input.display()));
    let table = io::read_csv(input)?;
    let input_rows = table.height();

    progress.phase("Filtering records");
    let filtered = apply_filtering(table, &matcher)?;
    let output_rows = filtered.height();

    progress.phase(&format!("Writing {}", output.display()));
    io::write_csv(&filtered, output)?;

    progress.finish();

    println!();
    println!("  Filtering complete!");
    println!("  Input:    {input_rows} records");
    println!("  Kept:     {output_rows} records");
    println!("  Dropped:  {} records", input_rows - output_rows);
    println!("  Keywords: {}", matcher.keyword_count());
    println!("  Output:   {}", output.display());
    println!("  Time:     {:.1}s", started.elapsed().as_secs_f64());
    println!();

    Ok(())
}

fn cmd_config_init() -> Result<()> {
    let path = init_config()?;
    println!("Config initialized at: {}", path.display());
    Ok(())
}

fn cmd_config_show() -> Result<()> {
    let config: AppConfig = load_config()?;
    let toml_str = toml::to_string_pretty(&config)?;
    println!("{toml_str}");
    Ok(())
}

// ---------------------------------------------------------------------------
// CLI progress reporter
// ---------------------------------------------------------------------------

/// Phase spinner using indicatif.
struct CliProgress {
    spinner: ProgressBar,
}

impl CliProgress {
    fn new() -> Self {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::with_template("{spinner:.cyan} {msg}")
                .unwrap()
                .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]),
        );
        spinner.enable_steady_tick(std::time::Duration::from_millis(80));
        Self { spinner }
    }

    fn phase(&self, message: &str) {
        self.spinner.set_message(message.to_string());
    }

    fn finish(&self) {
        self.spinner.finish_and_clear();
    }
}
