use anyhow::Context as _;
use clap::Parser;
use tracing::info;

use filmsim_client::{ClientConfig, ModelClient};
use filmsim_ui::app::SimApp;
use filmsim_ui::logging;
use filmsim_ui::runner::ModelRunner;

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Desktop front-end for the film finance modeling backend.
///
/// Collects financing parameters, submits them to the backend's waterfall
/// model, and renders ROI/IRR, cash-flow, and payout-composition views.
#[derive(Debug, Parser)]
struct Cli {
    /// Backend base URL (e.g. `https://api.example.com`).
    /// Falls back to the API_BASE_URL environment variable.
    #[arg(long)]
    api_base_url: Option<String>,

    /// API key forwarded as the `x-api-key` header.
    /// Falls back to the API_KEY environment variable.
    #[arg(long)]
    api_key: Option<String>,
}

impl Cli {
    /// Resolves the backend configuration. Both values are required;
    /// there is no compiled-in default address.
    fn client_config(self) -> anyhow::Result<ClientConfig> {
        let base_url = self
            .api_base_url
            .or_else(|| std::env::var("API_BASE_URL").ok())
            .context("backend address missing: pass --api-base-url or set API_BASE_URL")?;
        let api_key = self
            .api_key
            .or_else(|| std::env::var("API_KEY").ok())
            .context("API key missing: pass --api-key or set API_KEY")?;
        Ok(ClientConfig::new(base_url, api_key))
    }
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    logging::init_default_logging();

    let config = Cli::parse().client_config()?;
    info!(base_url = %config.base_url, "starting film finance simulator");

    let runner = ModelRunner::new(ModelClient::new(config))?;

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1400.0, 900.0])
            .with_min_inner_size([900.0, 600.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Film Finance Simulator",
        native_options,
        Box::new(move |cc| Ok(Box::new(SimApp::new(cc, runner)))),
    )
    .map_err(|e| anyhow::anyhow!("ui loop failed: {e}"))
}
