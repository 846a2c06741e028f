//! Products command handler for listing the refrigerated cargo catalog.

use anyhow::{Context, Result};

use fleetyard_lib::catalog;

use crate::output::{render_json, render_products_text, OutputFormat};

/// Handle the products subcommand.
pub fn handle_products(format: OutputFormat) -> Result<()> {
    let rows = catalog();
    let rendered = match format {
        OutputFormat::Text => render_products_text(&rows),
        OutputFormat::Json => render_json(&rows).context("failed to serialize product catalog")?,
    };
    print!("{rendered}");
    Ok(())
}
