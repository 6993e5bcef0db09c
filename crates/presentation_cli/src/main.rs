//! Weather widget CLI
//!
//! Drives the widget against a live endpoint or a literal payload and prints
//! the resulting page state.

#![allow(clippy::print_stdout)]

mod page;

use std::path::PathBuf;
use std::sync::Arc;

use application::{FetchOutcome, WeatherWidgetService};
use clap::{Parser, Subcommand};
use domain::LocationId;
use infrastructure::{AppConfig, DocumentView, WeatherAdapter, init_logging};
use tracing::info;

/// Weather widget CLI
#[derive(Debug, Parser)]
#[command(name = "weather-widget")]
#[command(author, version, about = "Fetch and render location weather", long_about = None)]
struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Configuration file (default: ./config.* if present)
    #[arg(short, long, env = "WEATHER_WIDGET_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Fetch weather for a location and render it into a fresh page
    ///
    /// Example: weather-widget fetch 3 --origin http://localhost:8000
    Fetch {
        /// Location id; an empty id skips the request
        location: String,

        /// Page URL or origin serving the endpoint
        #[arg(short, long)]
        origin: Option<String>,

        /// Session cookie sent to the origin (name=value)
        #[arg(long)]
        cookie: Option<String>,

        /// Classes the background element starts with
        #[arg(long = "initial-class")]
        initial_classes: Vec<String>,
    },

    /// Render a literal JSON payload into a fresh page
    ///
    /// Example: weather-widget render '{"temp": 72, "weather": "sunny"}'
    Render {
        /// Payload shaped like the endpoint response
        payload: String,

        /// Classes the background element starts with
        #[arg(long = "initial-class")]
        initial_classes: Vec<String>,
    },
}

/// Determine log filter override from verbosity count
const fn log_filter_from_verbosity(verbose: u8) -> Option<&'static str> {
    match verbose {
        0 => None,
        1 => Some("info"),
        2 => Some("debug"),
        _ => Some("trace"),
    }
}

fn load_config(path: Option<&PathBuf>) -> anyhow::Result<AppConfig> {
    let config = match path {
        Some(path) => AppConfig::load_from(path)?,
        None => AppConfig::load()?,
    };
    Ok(config)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let mut config = load_config(cli.config.as_ref())?;

    init_logging(&config.logging, log_filter_from_verbosity(cli.verbose))?;

    match cli.command {
        Commands::Fetch {
            location,
            origin,
            cookie,
            initial_classes,
        } => {
            if let Some(origin) = origin {
                config.endpoint.origin = origin;
            }
            if cookie.is_some() {
                config.endpoint.session_cookie = cookie;
            }

            let document = page::build_page(&initial_classes)?;
            let source = WeatherAdapter::with_config(config.endpoint)?;
            info!(origin = source.origin(), "Weather widget ready");

            let view = DocumentView::bind(Arc::clone(&document))?;
            let service = WeatherWidgetService::new(Arc::new(source), Arc::new(view));

            let location = LocationId::new(location);
            let outcome = service.get_weather_for_location(location.as_ref()).await;

            println!(
                "{}",
                serde_json::to_string_pretty(&page::describe(&outcome, &document))?
            );
        },

        Commands::Render {
            payload,
            initial_classes,
        } => {
            let document = page::build_page(&initial_classes)?;
            let outcome = match page::render_payload(&document, &payload) {
                Ok(report) => FetchOutcome::Updated(report),
                Err(e) => {
                    tracing::error!(error = %e, "Rendering payload failed");
                    FetchOutcome::Failed(application::ApplicationError::Internal(e.to_string()))
                },
            };

            println!(
                "{}",
                serde_json::to_string_pretty(&page::describe(&outcome, &document))?
            );
        },
    }

    Ok(())
}
