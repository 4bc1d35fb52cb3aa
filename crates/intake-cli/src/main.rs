//! Notary intake CLI
//!
//! Terminal front-end for the notarization intake wizard. Every invocation
//! is one turn of the wizard against the state file.

mod args;
mod cli;
mod outbox;
mod profile;
mod renderer;

use anyhow::{Context, Result};
use args::Args;
use clap::Parser;
use cli::Cli;
use intake_core::{FormStateStore, FrontierPolicy, ServiceCatalog, SqliteBackend, WizardBuilder};
use log::info;
use outbox::OutboxSubmitter;
use profile::ProfileFile;
use renderer::TerminalRenderer;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        state_file,
        catalog,
        outbox,
        profile,
        strict_steps,
        no_color,
        command,
    } = Args::parse();

    let state_file = match state_file {
        Some(path) => path,
        None => WizardBuilder::default_state_path().context("Failed to locate state file")?,
    };
    let catalog = match catalog {
        Some(path) => ServiceCatalog::from_json_file(&path)
            .with_context(|| format!("Failed to load catalog from {}", path.display()))?,
        None => ServiceCatalog::default(),
    };
    let outbox = match outbox {
        Some(path) => path,
        None => OutboxSubmitter::default_directory().context("Failed to locate outbox")?,
    };
    let frontier_policy = if strict_steps {
        FrontierPolicy::Contiguous
    } else {
        FrontierPolicy::Highest
    };

    let wizard = WizardBuilder::new()
        .with_database_path(Some(&state_file))
        .with_catalog(catalog.clone())
        .with_frontier_policy(frontier_policy)
        .with_submitter(OutboxSubmitter::new(outbox, catalog))
        .build()
        .context("Failed to initialize wizard")?;
    let router = FormStateStore::new(
        SqliteBackend::open(&state_file).context("Failed to open router state")?,
    );

    let renderer = TerminalRenderer::new(!no_color);

    info!("Intake started with state at {}", state_file.display());

    Cli::new(wizard, router, renderer, profile.map(ProfileFile::new))
        .run(command)
        .await
}
