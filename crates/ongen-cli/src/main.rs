mod catalog;
mod config;
mod error;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde::Serialize;
use serde_json::json;
use tracing_subscriber::EnvFilter;

use crate::config::AppConfig;
use crate::error::CliError;

/// Normalize catalog names and pull disc, volume and edition numbers out of
/// free text. Results are printed as JSON.
#[derive(Debug, Parser)]
#[command(name = "ongen", version)]
struct Cli {
    /// Config file (defaults to the platform config dir).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Build the name triple and sort key for a circle, artist or album name.
    Name { text: String },
    /// Split a disc marker off an album title.
    Disc { album: String },
    /// Extract a volume number.
    Volume { text: String },
    /// Convert a kanji numeral.
    Kanji { token: String },
    /// Extract an edition number.
    Edition { text: String },
    /// Split an event name into base name and edition, rejecting years.
    EventEdition { text: String },
    /// Suggest the event series and edition for an event name.
    Suggest {
        event_name: String,
        /// Series catalog (TOML). Falls back to `catalog.path` from config.
        #[arg(long)]
        catalog: Option<PathBuf>,
    },
    /// Check a URL against a platform allow-list pattern.
    CheckUrl {
        url: String,
        #[arg(long)]
        pattern: Option<String>,
    },
}

fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    let config = AppConfig::load(cli.config.as_deref())?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log.filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    run(cli.command, &config)
}

fn run(command: Command, config: &AppConfig) -> Result<(), CliError> {
    match command {
        Command::Name { text } => {
            #[derive(Serialize)]
            struct NameOutput {
                #[serde(flatten)]
                info: ongen_text::NameInfo,
                #[serde(skip_serializing_if = "Option::is_none")]
                sort_name: Option<String>,
            }
            let info = ongen_text::generate_name_info(&text);
            let sort_name = ongen_text::generate_sort_name(&info.name);
            print_json(&NameOutput { info, sort_name })
        }
        Command::Disc { album } => print_json(&ongen_text::parse_disc_info(&album)),
        Command::Volume { text } => print_json(&json!({ "volume": ongen_text::parse_volume(&text) })),
        Command::Kanji { token } => print_json(&json!({ "value": ongen_text::kanji_to_number(&token) })),
        Command::Edition { text } => {
            print_json(&json!({ "edition": ongen_text::extract_edition(&text) }))
        }
        Command::EventEdition { text } => print_json(&ongen_text::parse_event_edition(&text)),
        Command::Suggest {
            event_name,
            catalog,
        } => {
            let series = match catalog.or_else(|| config.catalog.path.clone()) {
                Some(path) => crate::catalog::load_catalog(&path)?,
                None => {
                    tracing::warn!("No series catalog configured, matching against an empty catalog");
                    Vec::new()
                }
            };
            print_json(&ongen_text::suggest_from_event_name(&event_name, &series))
        }
        Command::CheckUrl { url, pattern } => {
            let pattern = ongen_text::UrlPattern::new(pattern.as_deref())?;
            print_json(&json!({ "allowed": pattern.allows(&url) }))
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<(), CliError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
