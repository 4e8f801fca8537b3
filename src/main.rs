//! Spellbook - Main entrypoint.
//!
//! One-shot command-line front end for the spell checker. It loads
//! configuration, initializes logging, loads the word list, and runs a single
//! command against it.

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tracing::info;

use spellbook_lib::config::{ConfigLoader, LogConfig, SpellbookConfig, ENV_PREFIX};
use spellbook_lib::data_structures::WordFrequency;
use spellbook_lib::dictionary::SpellChecker;
use spellbook_lib::error::{
    report_error, set_error_reporter, ErrorContext, SpellbookError, SpellbookResult,
    TracingErrorReporter,
};

/// Command line arguments for Spellbook.
#[derive(Parser, Debug)]
#[clap(name = "spellbook", version, author, about)]
struct Args {
    /// Path to configuration file
    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,

    /// Word list to load instead of the configured one
    #[clap(short, long, value_parser)]
    word_list: Option<PathBuf>,

    /// Output format
    #[clap(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Command to execute
    #[clap(subcommand)]
    command: Command,
}

/// Output formats for query results.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum OutputFormat {
    /// One `word frequency` pair or message per line
    Text,
    /// A single JSON document
    Json,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Check if a word is spelled correctly
    Check {
        /// Word to look up
        word: String,
    },

    /// Suggest the most frequent words starting with a prefix
    Prefix {
        /// Prefix to complete
        letters: String,
    },

    /// List every word in alphabetical order
    All,

    /// Add a word or update its frequency
    Insert {
        /// Word to add
        word: String,

        /// Frequency weight for the word
        frequency: f64,

        /// Write the updated list back to the word list file
        #[clap(long)]
        save: bool,
    },

    /// Remove a word
    Remove {
        /// Word to remove
        word: String,

        /// Write the updated list back to the word list file
        #[clap(long)]
        save: bool,
    },

    /// Validate the configuration
    Validate,

    /// Generate a default configuration file
    GenConfig {
        /// Path to output configuration file
        #[clap(short, long, value_parser)]
        output: PathBuf,
    },
}

impl Command {
    fn name(&self) -> &'static str {
        match self {
            Self::Check { .. } => "check",
            Self::Prefix { .. } => "prefix",
            Self::All => "all",
            Self::Insert { .. } => "insert",
            Self::Remove { .. } => "remove",
            Self::Validate => "validate",
            Self::GenConfig { .. } => "gen-config",
        }
    }
}

/// How a successfully executed command ended.
#[derive(Debug, PartialEq, Eq)]
enum Outcome {
    Done,
    Miss,
}

#[derive(Serialize)]
struct WordEntry<'a> {
    word: &'a str,
    frequency: f64,
}

#[derive(Serialize)]
struct CheckReport<'a> {
    word: &'a str,
    correct: bool,
    frequency: Option<f64>,
}

/// Initialize the logging system. Logs go to stderr so stdout carries only results.
fn init_logging(log: &LogConfig) -> SpellbookResult<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log.level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_file(log.source_location)
        .with_line_number(log.source_location);

    let result = if log.json {
        tracing::subscriber::set_global_default(builder.json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.finish())
    };

    result.map_err(|e| SpellbookError::Custom(e.to_string()))
}

fn print_entries(entries: &[WordFrequency], format: OutputFormat) -> SpellbookResult<()> {
    match format {
        OutputFormat::Text => {
            for (word, frequency) in entries {
                println!("{word} {frequency}");
            }
        }
        OutputFormat::Json => {
            let entries: Vec<WordEntry<'_>> = entries
                .iter()
                .map(|(word, frequency)| WordEntry {
                    word,
                    frequency: *frequency,
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&entries)?);
        }
    }
    Ok(())
}

fn print_check(word: &str, frequency: Option<f64>, format: OutputFormat) -> SpellbookResult<()> {
    match (format, frequency) {
        (OutputFormat::Text, Some(_)) => println!("Correct! '{word}' is spelled correctly."),
        (OutputFormat::Text, None) => println!("'{word}' is not in dictionary."),
        (OutputFormat::Json, _) => {
            let report = CheckReport {
                word,
                correct: frequency.is_some(),
                frequency,
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }
    Ok(())
}

/// Runs a command that needs the word list loaded.
fn run_dictionary_command(
    command: Command,
    format: OutputFormat,
    config: &SpellbookConfig,
) -> SpellbookResult<Outcome> {
    let mut checker = SpellChecker::from_config(config)?;

    match command {
        Command::Check { word } => match checker.check(&word) {
            Ok(frequency) => {
                print_check(&word, Some(frequency), format)?;
                Ok(Outcome::Done)
            }
            Err(e) if e.is_not_found() => {
                print_check(&word, None, format)?;
                Ok(Outcome::Miss)
            }
            Err(e) => Err(e.into()),
        },
        Command::Prefix { letters } => match checker.suggest(&letters) {
            Ok(suggestions) => {
                print_entries(&suggestions, format)?;
                Ok(Outcome::Done)
            }
            Err(e) if e.is_not_found() => {
                if format == OutputFormat::Text {
                    println!("No words in dictionary start with '{letters}'.");
                } else {
                    print_entries(&[], format)?;
                }
                Ok(Outcome::Miss)
            }
            Err(e) => Err(e.into()),
        },
        Command::All => {
            print_entries(&checker.all_words_sorted(), format)?;
            Ok(Outcome::Done)
        }
        Command::Insert {
            word,
            frequency,
            save,
        } => {
            checker.insert(&word, frequency)?;
            if format == OutputFormat::Text {
                println!("'{word}' has been inserted.");
            }
            if save {
                checker.save_word_list(&config.dictionary.word_list)?;
            }
            Ok(Outcome::Done)
        }
        Command::Remove { word, save } => match checker.remove(&word) {
            Ok(_) => {
                if format == OutputFormat::Text {
                    println!("'{word}' has been removed.");
                }
                if save {
                    checker.save_word_list(&config.dictionary.word_list)?;
                }
                Ok(Outcome::Done)
            }
            Err(e) if e.is_not_found() => {
                if format == OutputFormat::Text {
                    println!("'{word}' is not in dictionary.");
                }
                Ok(Outcome::Miss)
            }
            Err(e) => Err(e.into()),
        },
        Command::Validate | Command::GenConfig { .. } => Ok(Outcome::Done),
    }
}

fn run(
    command: Command,
    format: OutputFormat,
    config: &SpellbookConfig,
) -> SpellbookResult<Outcome> {
    match command {
        Command::Validate => {
            info!("Configuration validated successfully");
            Ok(Outcome::Done)
        }
        Command::GenConfig { output } => {
            info!("Generating default configuration");

            if let Some(parent) = output.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&output, SpellbookConfig::default().to_toml()?)?;

            info!("Default configuration written to {:?}", output);
            Ok(Outcome::Done)
        }
        command => run_dictionary_command(command, format, config),
    }
}

/// Main entry point for the application.
fn main() -> ExitCode {
    let args = Args::parse();

    let loader = ConfigLoader::new(args.config.as_deref(), ENV_PREFIX);
    let mut config = match loader.load() {
        Ok(config) => config,
        Err(e) => {
            report_error(ErrorContext::new(e.into(), "config"));
            return ExitCode::from(2);
        }
    };
    if let Some(word_list) = args.word_list {
        config.dictionary.word_list = word_list;
    }

    if let Err(e) = init_logging(&config.log) {
        report_error(ErrorContext::new(e, "logging"));
        return ExitCode::from(2);
    }
    set_error_reporter(Arc::new(TracingErrorReporter));

    let component = args.command.name();
    match run(args.command, args.format, &config) {
        Ok(Outcome::Done) => ExitCode::SUCCESS,
        Ok(Outcome::Miss) => ExitCode::from(1),
        Err(e) => {
            let word_list = config.dictionary.word_list.display();
            let context = ErrorContext::new(e, component)
                .with_details(format!("word list: {word_list}"));
            report_error(context);
            ExitCode::from(2)
        }
    }
}
