//! bidhands - Gemini-assisted bid drafting for freelance job pages.
//!
//! Main entry point. Wires the three actors together: the page agent over
//! an HTML snapshot, the orchestrator over the credential store and the
//! Gemini API, and a control surface reporting to the log.

mod cli;
mod config;
mod control;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use bidhands_orchestrator::{FileCredentialStore, GenerationSettings, Orchestrator};
use bidhands_page::{DomPage, Page, PageAgent};
use bidhands_protocols::message::{BidData, Upgrades};
use bidhands_protocols::routing::PageAgentHandle;

use crate::cli::{Cli, Commands};
use crate::config::{Config, CREDENTIALS_TEMPLATE};
use crate::control::{ControlSurface, LogSink};

/// Initialize tracing with console output.
fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let config_path = cli.config.unwrap_or_else(config::default_config_path);
    let config = Config::load(&config_path)?;

    // First run: seed the credentials template before anything needs it.
    if !matches!(cli.command, Commands::Configure) && !config.credentials_path().exists() {
        run_configure(&config)?;
    }

    match cli.command {
        Commands::Generate { page, url } => run_generate(config, &page, url).await,
        Commands::Bid {
            page,
            url,
            text,
            amount,
            days,
            sponsored,
            sealed,
            highlight,
            place,
        } => {
            let upgrades = upgrades_from_flags(sponsored, sealed, highlight);
            let bid_data = BidData {
                bid_text: text,
                bid_amount: amount,
                delivery_time: days,
                upgrades,
            };
            run_bid(config, &page, url, bid_data, place).await
        }
        Commands::Configure => run_configure(&config),
    }
}

/// Stand up the full actor pipeline against a page snapshot.
fn connect(config: &Config, page: &Path, url: &str) -> Result<(Arc<DomPage>, PageAgentHandle)> {
    let dom = Arc::new(
        DomPage::load(page, url)
            .with_context(|| format!("failed to load page snapshot {}", page.display()))?,
    );

    let store = Arc::new(FileCredentialStore::new(config.credentials_path()));
    let orchestrator = Orchestrator::spawn(
        store,
        GenerationSettings {
            model: config.model.clone(),
            temperature: config.temperature,
            api_base_url: config.api_base_url.clone(),
        },
    );

    let agent = PageAgent::spawn(
        Arc::clone(&dom) as Arc<dyn Page>,
        config.selectors.clone(),
        config.timing,
        orchestrator,
    );
    Ok((dom, agent))
}

/// Generate a bid draft and print it.
async fn run_generate(config: Config, page: &Path, url: String) -> Result<()> {
    let (_dom, agent) = connect(&config, page, &url)?;
    let surface = ControlSurface::new(agent, url, Arc::new(LogSink));
    surface
        .check_credential(&FileCredentialStore::new(config.credentials_path()))
        .await;

    let Some(draft) = surface.generate().await else {
        bail!("bid generation failed");
    };

    println!("{}", draft.bid_text);
    if let Some(amount) = draft.bid_amount {
        info!("suggested bid amount from the page: {amount}");
    }
    if let Some(days) = draft.delivery_time {
        info!("suggested delivery time from the page: {days} days");
    }
    Ok(())
}

/// Fill the bid form, and place the bid when asked to.
async fn run_bid(
    config: Config,
    page: &Path,
    url: String,
    bid_data: BidData,
    place: bool,
) -> Result<()> {
    let (dom, agent) = connect(&config, page, &url)?;
    let surface = ControlSurface::new(agent, url, Arc::new(LogSink));

    if !surface.insert(bid_data).await {
        bail!("form fill failed");
    }
    info!(
        "bid description now reads: {:?}",
        dom.value_of(&config.selectors.bid_text_area).unwrap_or_default()
    );

    if place {
        if !surface.place_bid().await {
            bail!("placing the bid failed");
        }
    }
    Ok(())
}

/// Write the credentials template if none exists yet.
fn run_configure(config: &Config) -> Result<()> {
    let path: PathBuf = config.credentials_path();
    if path.exists() {
        println!("Credentials file already exists: {}", path.display());
        return Ok(());
    }
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    std::fs::write(&path, CREDENTIALS_TEMPLATE)
        .with_context(|| format!("failed to write {}", path.display()))?;
    println!("Created credentials template: {}", path.display());
    println!("Add your Gemini API key under `gemini_api_key`, then re-run your command.");
    Ok(())
}

fn upgrades_from_flags(sponsored: bool, sealed: bool, highlight: bool) -> Option<Upgrades> {
    if !sponsored && !sealed && !highlight {
        return None;
    }
    // Only set flags travel; absent keys leave page state untouched.
    Some(Upgrades {
        sponsored: sponsored.then_some(true),
        sealed: sealed.then_some(true),
        highlight: highlight.then_some(true),
    })
}
