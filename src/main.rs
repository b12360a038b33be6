// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Result, anyhow};
use log::{warn, info, LevelFilter, Log, Metadata, Record, Level, SetLoggerError};
use std::path::{Path, PathBuf};
use std::io::Write;
use std::sync::Arc;
use clap::{Args, Parser, ValueEnum, CommandFactory, Subcommand};
use clap_complete::{generate, Shell};

use workbookgen::app_config::{Config, LogLevel};
use workbookgen::app_controller::{Controller, GenerateJob, OutputFormat};
use workbookgen::providers::catalog;
use workbookgen::translation::TranslationService;
use workbookgen::worksheet::ExerciseVariant;

/// CLI Wrapper for ExerciseVariant to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliVariant {
    Translation,
    Analysis,
    FillIn,
    Scramble,
    KoreanOnly,
}

impl From<CliVariant> for ExerciseVariant {
    fn from(cli_variant: CliVariant) -> Self {
        match cli_variant {
            CliVariant::Translation => ExerciseVariant::Translation,
            CliVariant::Analysis => ExerciseVariant::Analysis,
            CliVariant::FillIn => ExerciseVariant::FillIn,
            CliVariant::Scramble => ExerciseVariant::Scramble,
            CliVariant::KoreanOnly => ExerciseVariant::KoreanOnly,
        }
    }
}

/// CLI Wrapper for OutputFormat to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliFormat {
    Html,
    Json,
}

impl From<CliFormat> for OutputFormat {
    fn from(cli_format: CliFormat) -> Self {
        match cli_format {
            CliFormat::Html => OutputFormat::Html,
            CliFormat::Json => OutputFormat::Json,
        }
    }
}

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => LogLevel::Error,
            CliLogLevel::Warn => LogLevel::Warn,
            CliLogLevel::Info => LogLevel::Info,
            CliLogLevel::Debug => LogLevel::Debug,
            CliLogLevel::Trace => LogLevel::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate a worksheet from an English passage (default command)
    Generate(GenerateArgs),

    /// Translate an English passage into Korean with the configured AI provider
    Translate(TranslateArgs),

    /// List the selectable AI providers
    Providers,

    /// Generate shell completions for workbookgen
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Provider selection shared by the commands that may call the AI
#[derive(Args, Debug, Clone)]
struct ProviderArgs {
    /// AI provider id (see `workbookgen providers`)
    #[arg(short, long)]
    provider: Option<String>,

    /// API key for the AI provider (falls back to WORKBOOK_API_KEY)
    #[arg(long)]
    api_key: Option<String>,
}

const API_KEY_ENV: &str = "WORKBOOK_API_KEY";

#[derive(Args, Debug, Clone)]
struct GenerateArgs {
    /// English passage file
    #[arg(value_name = "INPUT_PATH")]
    input_path: Option<PathBuf>,

    /// Korean translation file, sentence-aligned with the passage
    #[arg(short, long, value_name = "KOREAN_PATH")]
    korean: Option<PathBuf>,

    /// Output file (defaults to <INPUT>.<variant>.<format> next to the passage)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Exercise variant
    #[arg(short, long, value_enum)]
    variant: Option<CliVariant>,

    /// Output format
    #[arg(long, value_enum, default_value = "html")]
    format: CliFormat,

    /// Worksheet title
    #[arg(long)]
    title: Option<String>,

    /// Worksheet subtitle
    #[arg(long)]
    subtitle: Option<String>,

    /// Hide the Korean reference footers
    #[arg(long)]
    no_reference: bool,

    /// Generate the Korean reference with the AI provider
    #[arg(long)]
    ai: bool,

    #[command(flatten)]
    provider: ProviderArgs,

    /// Force overwrite of existing output files
    #[arg(short, long)]
    force_overwrite: bool,
}

#[derive(Args, Debug, Clone)]
struct TranslateArgs {
    /// English passage file
    #[arg(value_name = "INPUT_PATH")]
    input_path: PathBuf,

    /// Write the translation to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    #[command(flatten)]
    provider: ProviderArgs,
}

/// workbookgen - English reading worksheet generator
///
/// Splits an English passage into sentences and builds a printable worksheet
/// with one exercise per sentence.
#[derive(Parser, Debug)]
#[command(name = "workbookgen")]
#[command(version)]
#[command(about = "Printable English reading worksheets from a passage")]
#[command(args_conflicts_with_subcommands = true)]
#[command(long_about = "workbookgen splits an English passage into sentences and renders each one as an exercise.

EXAMPLES:
    workbookgen passage.txt                               # Translation worksheet with default config
    workbookgen passage.txt -k passage.ko.txt             # Add Korean reference footers
    workbookgen passage.txt -v fill-in -f                 # Fill-in-the-blank, overwrite existing output
    workbookgen passage.txt -v korean-only --ai -p gemini-2.5-flash
    workbookgen passage.txt --format json -o out.json     # Structured output
    workbookgen translate passage.txt -o passage.ko.txt   # Korean translation only
    workbookgen providers                                 # List AI providers
    workbookgen completions bash > workbookgen.bash       # Generate bash completions

VARIANTS:
    translation  - Translate each sentence
    analysis     - Annotate sentence structure (SVOC)
    fill-in      - Fill in every third word from a hint list
    scramble     - Reorder shuffled words
    korean-only  - Write the English sentence from its Korean translation

CONFIGURATION:
    Configuration is stored in conf.json by default. You can specify a different
    config file with --config-path. If the config file doesn't exist, a default one
    will be created automatically. The API key may also be set through WORKBOOK_API_KEY.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    generate: GenerateArgs,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json", global = true)]
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

    // @returns: Emoji and ANSI color for log level
    fn decoration_for_level(level: Level) -> (&'static str, &'static str) {
        match level {
            Level::Error => ("❌", "1;31"),
            Level::Warn => ("🚧", "1;33"),
            Level::Info => ("", "1;32"),
            Level::Debug => ("🔍", "1;36"),
            Level::Trace => ("📋", "1;35"),
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
            let (emoji, color) = Self::decoration_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(stderr, "\x1B[{}m{} {} {}\x1B[0m", color, now, emoji, record.args());
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Trace is the ceiling; the effective level is set below via set_max_level
    CustomLogger::init(LevelFilter::Trace)?;
    log::set_max_level(LevelFilter::Info);

    let cli = CommandLineOptions::parse();

    if let Some(level) = &cli.log_level {
        let level: LogLevel = level.clone().into();
        log::set_max_level(level.to_level_filter());
    }

    match cli.command {
        Some(Commands::Completions { shell }) => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "workbookgen", &mut std::io::stdout());
            Ok(())
        }
        Some(Commands::Providers) => {
            print_providers();
            Ok(())
        }
        Some(Commands::Translate(args)) => {
            let mut config = load_config(&cli.config_path, cli.log_level.is_none())?;
            apply_provider_overrides(&mut config, &args.provider);
            run_translate(config, args).await
        }
        Some(Commands::Generate(args)) => {
            let config = load_config(&cli.config_path, cli.log_level.is_none())?;
            run_generate(config, args).await
        }
        None => {
            let config = load_config(&cli.config_path, cli.log_level.is_none())?;
            run_generate(config, cli.generate).await
        }
    }
}

/// Load or create the configuration file
fn load_config(config_path: &str, apply_log_level: bool) -> Result<Config> {
    let config = if Path::new(config_path).exists() {
        Config::load(config_path)?
    } else {
        warn!("Config file not found at '{}', creating default config.", config_path);
        let config = Config::default();
        config.save(config_path)?;
        config
    };

    // If log level was not set via command line, take it from config
    if apply_log_level {
        log::set_max_level(config.log_level.to_level_filter());
    }

    Ok(config)
}

fn apply_provider_overrides(config: &mut Config, args: &ProviderArgs) {
    if let Some(provider) = &args.provider {
        config.translation.provider = provider.clone();
    }
    // Command line wins over the environment, which wins over the config file
    let api_key = args.api_key.clone()
        .or_else(|| std::env::var(API_KEY_ENV).ok().filter(|key| !key.trim().is_empty()));
    if let Some(api_key) = api_key {
        config.translation.api_key = api_key;
    }
}

async fn run_generate(mut config: Config, args: GenerateArgs) -> Result<()> {
    let input_path = args.input_path.clone().ok_or_else(|| {
        anyhow!("INPUT_PATH is required when no subcommand is specified")
    })?;

    // Override config with CLI options if provided
    apply_provider_overrides(&mut config, &args.provider);
    if let Some(variant) = &args.variant {
        config.worksheet.variant = variant.clone().into();
    }
    if let Some(title) = &args.title {
        config.worksheet.title = title.clone();
    }
    if let Some(subtitle) = &args.subtitle {
        config.worksheet.subtitle = subtitle.clone();
    }
    if args.no_reference {
        config.worksheet.show_reference = false;
    }

    let controller = Controller::with_config(config)?;
    let job = GenerateJob {
        english_path: input_path,
        korean_path: args.korean,
        output_path: args.output,
        format: args.format.into(),
        use_ai: args.ai,
        force_overwrite: args.force_overwrite,
    };

    controller.run(job).await?;
    Ok(())
}

async fn run_translate(config: Config, args: TranslateArgs) -> Result<()> {
    let translator = Arc::new(TranslationService::new(config.translation.clone()));
    let controller = Controller::with_translator(config, translator)?;

    let translation = controller.run_translate(&args.input_path, args.output.as_deref()).await?;
    if args.output.is_none() {
        println!("{}", translation);
    }

    info!("Review the translation for sentence alignment before generating a worksheet");
    Ok(())
}

fn print_providers() {
    println!("{:<24} {:<30} {:<8} DESCRIPTION", "ID", "NAME", "API");
    println!("{:<24} {:<30} {:<8} Do not use AI", catalog::NO_PROVIDER_ID, "-", "-");
    for provider in catalog::PROVIDERS {
        println!(
            "{:<24} {:<30} {:<8} {}",
            provider.id, provider.name, provider.kind, provider.description
        );
    }
}
