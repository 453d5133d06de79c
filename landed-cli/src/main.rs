use anyhow::Context;
use clap::Parser;
use tracing::debug;

use landed_cli::cli::Cli;
use landed_cli::render::BreakdownReport;
use landed_cli::{app, config, logging};
use landed_core::LandedCostEngine;

// ─── entry point ─────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    logging::init_logging(cli.log_level)?;

    let engine_config = config::load_config(cli.config.as_deref()).with_context(|| {
        match &cli.config {
            Some(path) => format!("Failed to load config: {}", path.display()),
            None => "Failed to load default config".to_string(),
        }
    })?;
    let engine = LandedCostEngine::new(engine_config).context("Engine config rejected")?;
    debug!("engine ready");

    let provider = app::rate_provider(cli.rates.as_deref());
    let estimate = app::estimate(&cli.raw_input(), &engine, &provider)
        .await
        .context("Calculation failed")?;

    print!("{}", BreakdownReport::new(&estimate));

    Ok(())
}
