//! indexchat CLI
//!
//! Interactive front-end for asking a local LLM about the contents of a
//! search-engine index.

#![allow(clippy::print_stdout)]

mod repl;
mod settings;

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use assistant::Assistant;
use clap::{Parser, Subcommand};
use inference::{OllamaClient, TextGenerationClient};
use search_index::IndexClient;
use settings::AppSettings;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// indexchat CLI
#[derive(Parser)]
#[command(name = "indexchat")]
#[command(author, version, about = "Ask a local LLM about the contents of a search index", long_about = None)]
struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Path to a TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Search service base URL (overrides the config file)
    #[arg(long)]
    search_url: Option<String>,

    /// Inference service base URL (overrides the config file)
    #[arg(long)]
    inference_url: Option<String>,

    /// Model name (overrides the config file)
    #[arg(short, long)]
    model: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive questions about one index
    Chat {
        /// Index to work with; selected interactively when omitted
        #[arg(short, long)]
        index: Option<String>,
    },

    /// List indices on the search service
    Indices,

    /// List models on the inference server
    Models,

    /// Check that both services are reachable
    Health,
}

/// Determine log filter level from verbosity count
const fn log_filter_from_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Apply command-line overrides on top of file settings
fn apply_overrides(settings: &mut AppSettings, cli: &Cli) {
    if let Some(url) = &cli.search_url {
        settings.search.base_url.clone_from(url);
    }
    if let Some(url) = &cli.inference_url {
        settings.inference.base_url.clone_from(url);
    }
    if let Some(model) = &cli.model {
        settings.inference.default_model.clone_from(model);
    }
}

/// Prompt the user to pick an index from the server's list
async fn select_index(client: &IndexClient) -> anyhow::Result<String> {
    let indices = client.list_indices().await?;
    if indices.is_empty() {
        anyhow::bail!("the search service has no indices");
    }

    println!("Available indices:");
    for (i, info) in indices.iter().enumerate() {
        match &info.docs_count {
            Some(count) => println!("{}. {} ({count} docs)", i + 1, info.name),
            None => println!("{}. {}", i + 1, info.name),
        }
    }

    let names: Vec<String> = indices.into_iter().map(|i| i.name).collect();
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("Index number or name: ");
        io::stdout().flush()?;

        let line = lines
            .next()
            .context("no index selected")?
            .context("reading index selection")?;

        if let Some(choice) = repl::parse_index_choice(&line, &names) {
            return Ok(choice);
        }
        println!("Not a valid choice, try again.");
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = log_filter_from_verbosity(cli.verbose);
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut settings = AppSettings::load_or_default(cli.config.as_deref())?;
    apply_overrides(&mut settings, &cli);
    settings.search.validate().map_err(anyhow::Error::msg)?;

    match cli.command {
        Commands::Chat { ref index } => {
            let index_client = IndexClient::new(settings.search.clone())?;
            let inference: Arc<dyn TextGenerationClient> =
                Arc::new(OllamaClient::new(settings.inference.clone())?);

            let index = match index {
                Some(index) => index.clone(),
                None => select_index(&index_client).await?,
            };

            println!("Building context for index '{index}'...");
            let assistant = Assistant::for_index(
                inference,
                index_client,
                &index,
                settings.guidance.as_deref(),
            )
            .await?;

            println!("\nFields and types:\n{}", assistant.context().schema().describe());
            repl::run(&assistant).await?;
        },

        Commands::Indices => {
            let index_client = IndexClient::new(settings.search.clone())?;
            let indices = index_client.list_indices().await?;

            if indices.is_empty() {
                println!("No indices found.");
            }
            for info in indices {
                match info.docs_count {
                    Some(count) => println!("{} ({count} docs)", info.name),
                    None => println!("{}", info.name),
                }
            }
        },

        Commands::Models => {
            let client = OllamaClient::new(settings.inference.clone())?;
            let models = client.list_models().await?;

            println!("Available models:");
            for model in models {
                println!("  {model}");
            }
        },

        Commands::Health => {
            let client = OllamaClient::new(settings.inference.clone())?;
            match client.health_check().await {
                Ok(true) => println!("✅ Inference server: healthy"),
                Ok(false) => println!("❌ Inference server: unreachable"),
                Err(e) => println!("❌ Inference server: {e}"),
            }

            let index_client = IndexClient::new(settings.search.clone())?;
            match index_client.list_indices().await {
                Ok(indices) => {
                    println!("✅ Search service: healthy ({} indices)", indices.len());
                },
                Err(e) => println!("❌ Search service: {e}"),
            }
        },
    }

    Ok(())
}
