//! glossbot - Conversational Glossary Browser
//!
//! Runs the glossary bot against the console transport: commands, button tokens and inline
//! queries are read from stdin, responses are written to stdout.

use anyhow::{Context, Result};
use clap::{Arg, Command};
use glossbot::app::spawn_event_reader;
use glossbot::glossary::load_glossary;
use glossbot::transport::ConsoleTransport;
use glossbot::{Application, Config, Dispatcher};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::io::BufReader;
use tokio::sync::mpsc;

/// Inbound events buffered between the reader and the dispatcher
const EVENT_CHANNEL_CAPACITY: usize = 64;

#[tokio::main]
async fn main() -> Result<()> {
    let matches = Command::new("glossbot")
        .version(glossbot::VERSION)
        .about("A conversational glossary browser")
        .long_about(
            "glossbot serves a fixed glossary through an alphabet menu, paginated term lists \
             and inline search. Lines on stdin are events: '/start' is a command, '@text' an \
             inline query, anything else a button token.",
        )
        .arg(
            Arg::new("glossary")
                .help("Path to the glossary TOML file (overrides the config file)")
                .index(1),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("Path to the config file"),
        )
        .arg(
            Arg::new("log-level")
                .long("log-level")
                .short('l')
                .help("Default log filter when RUST_LOG is not set"),
        )
        .get_matches();

    let config_path = matches.get_one::<String>("config").map(PathBuf::from);
    let mut config = Config::load(config_path.as_deref()).context("Failed to load configuration")?;
    if let Some(glossary) = matches.get_one::<String>("glossary") {
        config.glossary = PathBuf::from(glossary);
    }
    if let Some(level) = matches.get_one::<String>("log-level") {
        config.log_level = level.clone();
    }

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&config.log_level))
        .init();

    let glossary = load_glossary(&config.glossary)
        .await
        .with_context(|| format!("Failed to load glossary {}", config.glossary.display()))?;
    if glossary.is_empty() {
        log::warn!("Glossary {} has no terms", config.glossary.display());
    }

    let dispatcher = Dispatcher::new(Arc::new(glossary)).with_greeting(config.greeting);
    let app = Application::new(dispatcher, Arc::new(ConsoleTransport::stdout()));

    let (tx, rx) = mpsc::channel(EVENT_CHANNEL_CAPACITY);
    let reader = spawn_event_reader(BufReader::new(tokio::io::stdin()), tx);

    log::info!("Bot started, waiting for events");
    app.run(rx).await;

    reader
        .await
        .context("Event reader task panicked")?
        .context("Failed to read events")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_version_constant() {
        assert!(!glossbot::VERSION.is_empty());
    }
}
