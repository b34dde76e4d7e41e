// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{anyhow, Context, Result};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{generate, Shell};
use log::{info, warn, Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;

use captionkeys::app_config::{self, Config};
use captionkeys::captions::export::to_srt;
use captionkeys::captions::{
    pack_words, words_from_payload, CaptionFetcher, HeuristicSurfaceProvider,
};
use captionkeys::hotkeys::EditorHotkeys;

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for app_config::LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => app_config::LogLevel::Error,
            CliLogLevel::Warn => app_config::LogLevel::Warn,
            CliLogLevel::Info => app_config::LogLevel::Info,
            CliLogLevel::Debug => app_config::LogLevel::Debug,
            CliLogLevel::Trace => app_config::LogLevel::Trace,
        }
    }
}

/// Output format for packed captions
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
enum OutputFormat {
    Json,
    Srt,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Group transcript words into caption lines
    Pack(PackArgs),

    /// Print the editor hotkey table
    Keys,

    /// Generate shell completions for captionkeys
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Parser, Debug)]
struct PackArgs {
    /// Caption payload: an http(s) URL or a local JSON file
    #[arg(value_name = "SOURCE")]
    source: String,

    /// Maximum caption line width in pixels
    #[arg(long)]
    max_width: Option<f64>,

    /// Font size in pixels used for measuring
    #[arg(long)]
    font_size: Option<f64>,

    /// Font family used for measuring
    #[arg(long)]
    font_family: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Write the result to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

/// captionkeys - editor hotkeys and caption layout
#[derive(Parser, Debug)]
#[command(name = "captionkeys")]
#[command(version = "0.1.0")]
#[command(about = "Editor hotkey table and width-based caption packing")]
#[command(long_about = "captionkeys groups timed transcript words into caption lines that fit a
pixel width, and documents the editor's keyboard shortcuts.

EXAMPLES:
    captionkeys pack words.json                         # Pack with configured layout
    captionkeys pack https://example.com/words.json    # Fetch the payload first
    captionkeys pack words.json --max-width 600 --format srt -o out.srt
    captionkeys keys                                    # Show the active hotkeys
    captionkeys completions bash > captionkeys.bash    # Generate bash completions

CONFIGURATION:
    Configuration is stored in conf.json by default. You can specify a different
    config file with --config. If the config file doesn't exist, a default one
    will be created automatically.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path
    #[arg(short, long = "config", default_value = "conf.json", global = true)]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum, global = true)]
    log_level: Option<CliLogLevel>,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI color code for log level
    fn color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "1;31",
            Level::Warn => "1;33",
            Level::Info => "1;32",
            Level::Debug => "1;36",
            Level::Trace => "1;35",
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "\x1B[{}m{} {:<5} {}\x1B[0m",
                Self::color_for_level(record.level()),
                now,
                record.level(),
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Max level is narrowed once the config is loaded
    CustomLogger::init(LevelFilter::Trace)?;
    log::set_max_level(LevelFilter::Info);

    let cli = CommandLineOptions::parse();

    if let Some(level) = &cli.log_level {
        let level: app_config::LogLevel = level.clone().into();
        log::set_max_level(level.into());
    }

    if let Commands::Completions { shell } = cli.command {
        let mut cmd = CommandLineOptions::command();
        generate(shell, &mut cmd, "captionkeys", &mut std::io::stdout());
        return Ok(());
    }

    let config = Config::load_or_create(&cli.config_path)?;
    config.validate().context("Configuration validation failed")?;

    if cli.log_level.is_none() {
        log::set_max_level(config.log_level.into());
    }

    match cli.command {
        Commands::Pack(args) => run_pack(&config, args).await,
        Commands::Keys => run_keys(&config),
        Commands::Completions { .. } => Ok(()),
    }
}

async fn run_pack(config: &Config, args: PackArgs) -> Result<()> {
    let mut layout = config.captions.clone();
    if let Some(max_width) = args.max_width {
        layout.max_width = max_width;
    }
    if let Some(font_size) = args.font_size {
        layout.font_size = font_size;
    }
    if let Some(font_family) = args.font_family {
        layout.font_family = font_family;
    }

    let payload = if is_remote(&args.source) {
        let fetcher = CaptionFetcher::new(Duration::from_secs(config.fetch.timeout_secs));
        match fetcher.fetch_caption_data(&args.source).await {
            Some(payload) => payload,
            None => {
                warn!("No caption data loaded from {}", args.source);
                return Ok(());
            }
        }
    } else {
        read_payload(Path::new(&args.source))?
    };

    let words = words_from_payload(&payload);
    info!("Loaded {} words", words.len());

    let lines = pack_words(&words, &layout, &HeuristicSurfaceProvider);
    info!("Packed into {} caption lines ({})", lines.len(), layout.font());

    let rendered = match args.format {
        OutputFormat::Json => serde_json::to_string_pretty(&lines)
            .context("Failed to serialize caption lines")?,
        OutputFormat::Srt => to_srt(&lines),
    };

    match args.output {
        Some(path) => {
            std::fs::write(&path, rendered)
                .with_context(|| format!("Failed to write output file: {}", path.display()))?;
            info!("Success: {:?}", path);
        }
        None => println!("{}", rendered),
    }

    Ok(())
}

fn run_keys(config: &Config) -> Result<()> {
    let hotkeys = EditorHotkeys::from_config(&config.hotkeys)
        .map_err(|e| anyhow!("Invalid hotkey configuration: {}", e))?;

    for (action, combos) in hotkeys.bindings() {
        println!("{:<12} {:<50} {}", action.id(), combos.to_string(), action.description());
    }
    Ok(())
}

// Helper function to tell URLs from file paths
fn is_remote(source: &str) -> bool {
    url::Url::parse(source)
        .map(|u| matches!(u.scheme(), "http" | "https"))
        .unwrap_or(false)
}

fn read_payload(path: &Path) -> Result<serde_json::Value> {
    if !path.exists() {
        return Err(anyhow!("Input file does not exist: {:?}", path));
    }
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read caption file: {}", path.display()))?;
    serde_json::from_str(&text)
        .with_context(|| format!("Failed to parse caption file: {}", path.display()))
}
