// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{anyhow, Context, Result};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{generate, Shell};
use log::{warn, Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use std::fs::File;
use std::io::{BufReader, Write};
use std::path::{Path, PathBuf};

use crate::app_config::Config;
use crate::app_controller::Controller;
use crate::prescription::PrescriptionRecord;

mod app_config;
mod app_controller;
mod errors;
mod export;
mod file_utils;
mod language_utils;
mod prescription;
mod providers;
mod speech;
mod translation_service;

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

fn level_filter(level: &app_config::LogLevel) -> LevelFilter {
    match level {
        app_config::LogLevel::Error => LevelFilter::Error,
        app_config::LogLevel::Warn => LevelFilter::Warn,
        app_config::LogLevel::Info => LevelFilter::Info,
        app_config::LogLevel::Debug => LevelFilter::Debug,
        app_config::LogLevel::Trace => LevelFilter::Trace,
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Translate a prescription form file (default command)
    #[command(alias = "translate")]
    Translate(TranslateArgs),

    /// List the supported target languages
    Languages,

    /// Generate shell completions for scriptsense
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Parser, Debug)]
struct TranslateArgs {
    /// Prescription form file (JSON) to translate
    #[arg(value_name = "FORM_FILE")]
    form_file: PathBuf,

    /// Target language name (e.g. Hindi, Tamil)
    #[arg(short = 'l', long)]
    language: Option<String>,

    /// Model name to use for translation
    #[arg(short, long)]
    model: Option<String>,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(long, value_enum)]
    log_level: Option<CliLogLevel>,

    /// Skip audio synthesis, produce the text artifact only
    #[arg(long)]
    skip_audio: bool,
}

/// ScriptSense - AI-powered medical prescription translator
///
/// Translates structured medical prescriptions into Indian languages using a
/// hosted LLM and synthesizes the translation to speech.
#[derive(Parser, Debug)]
#[command(name = "scriptsense")]
#[command(author = "ScriptSense Team")]
#[command(version = "1.0.0")]
#[command(about = "AI-powered medical prescription translation tool")]
#[command(long_about = "ScriptSense renders a prescription form file into a fixed-layout document,
translates it with a hosted LLM and synthesizes the translation to MP3 speech.

EXAMPLES:
    scriptsense prescription.json -l Tamil        # Translate a form file into Tamil
    scriptsense prescription.json --skip-audio    # Text artifact only, no synthesis
    scriptsense -m llama3.3-70b-instruct form.json # Use a specific model
    scriptsense languages                          # List supported target languages
    scriptsense completions bash > scriptsense.bash # Generate bash completions

CONFIGURATION:
    Configuration is stored in conf.json by default. You can specify a different
    config file with --config-path. If the config file doesn't exist, a default
    one will be created automatically. The translation API key is read from the
    SCRIPTSENSE_API_KEY environment variable or from the config file.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Prescription form file (JSON) to translate
    #[arg(value_name = "FORM_FILE")]
    form_file: Option<PathBuf>,

    /// Target language name (e.g. Hindi, Tamil)
    #[arg(short = 'l', long)]
    language: Option<String>,

    /// Model name to use for translation
    #[arg(short, long)]
    model: Option<String>,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(long, value_enum)]
    log_level: Option<CliLogLevel>,

    /// Skip audio synthesis, produce the text artifact only
    #[arg(long)]
    skip_audio: bool,
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

    // @returns: ANSI color for log level
    fn color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "\x1B[1;31m",
            Level::Warn => "\x1B[1;33m",
            Level::Info => "\x1B[1;32m",
            Level::Debug => "\x1B[1;36m",
            Level::Trace => "\x1B[1;35m",
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S%.3f");
            let color = Self::color_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "{}{} {} {}\x1B[0m",
                color,
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
    // Initialize the logger once with info level by default
    // We'll update the level after loading the config if needed
    CustomLogger::init(LevelFilter::Info)?;

    // Parse command line arguments using clap
    let cli = CommandLineOptions::parse();

    // Handle subcommands
    match cli.command {
        Some(Commands::Completions { shell }) => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "scriptsense", &mut std::io::stdout());
            Ok(())
        }
        Some(Commands::Languages) => {
            for language in language_utils::SUPPORTED_LANGUAGES {
                println!("{}", language);
            }
            Ok(())
        }
        Some(Commands::Translate(args)) => run_translate(args).await,
        None => {
            // Default behavior - use top-level args
            let form_file = cli.form_file.ok_or_else(|| {
                anyhow!("FORM_FILE is required when no subcommand is specified")
            })?;

            let translate_args = TranslateArgs {
                form_file,
                language: cli.language,
                model: cli.model,
                config_path: cli.config_path,
                log_level: cli.log_level,
                skip_audio: cli.skip_audio,
            };
            run_translate(translate_args).await
        }
    }
}

async fn run_translate(options: TranslateArgs) -> Result<()> {
    // If log level is set via command line, apply it immediately
    if let Some(cmd_log_level) = &options.log_level {
        let config_log_level: app_config::LogLevel = cmd_log_level.clone().into();
        log::set_max_level(level_filter(&config_log_level));
    }

    // Load or create configuration
    let config_path = &options.config_path;
    let mut config = if Path::new(config_path).exists() {
        // Load existing configuration
        let file = File::open(config_path)
            .context(format!("Failed to open config file: {}", config_path))?;

        let reader = BufReader::new(file);
        let config: Config = serde_json::from_reader(reader)
            .context(format!("Failed to parse config file: {}", config_path))?;

        config
    } else {
        // Create default configuration if not exists
        warn!("Config file not found at '{}', creating default config.", config_path);

        let config = Config::default();

        // Save default config
        let config_json = serde_json::to_string_pretty(&config)
            .context("Failed to serialize default config to JSON")?;

        std::fs::write(config_path, config_json)
            .context(format!("Failed to write default config to file: {}", config_path))?;

        config
    };

    // Override config with CLI options if provided
    if let Some(language) = &options.language {
        config.target_language = language.clone();
    }

    if let Some(model) = &options.model {
        config.translation.model = model.clone();
    }

    if let Some(log_level) = &options.log_level {
        config.log_level = log_level.clone().into();
    }

    // Validate the configuration after loading and overriding
    config.validate()
        .context("Configuration validation failed")?;

    // If log level was not set via command line, update it from config now
    if options.log_level.is_none() {
        log::set_max_level(level_filter(&config.log_level));
    }

    let record = PrescriptionRecord::from_form_file(&options.form_file)?;

    let controller = Controller::with_config(config)?;
    let outcome = controller.run(&record, options.skip_audio).await?;

    println!("Translated Prescription in {}:\n", outcome.language);
    println!("{}\n", outcome.translated_text);
    println!("Text artifact written to {:?}", outcome.text_artifact_path);
    if let Some(audio_path) = &outcome.audio_artifact_path {
        println!("Audio generated successfully, cached as {:?}", audio_path);
    }
    println!("Download link:\n{}", outcome.download_link);

    Ok(())
}
