//! Output formatting for ship reports and the product catalog.
//!
//! Renderers return strings so callers decide where they go; `main` prints
//! them to stdout while logs and hazard alerts stay on stderr.

use std::fmt::Write;

use clap::ValueEnum;
use serde::Serialize;

use fleetyard_lib::{ProductSummary, ShipReport};

use crate::terminal::{format_kg, ColorPalette};

/// Report format selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text, colored when the terminal allows it.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

/// Render one ship report as text.
pub fn render_ship_text(report: &ShipReport, palette: &ColorPalette) -> String {
    let p = palette;
    let mut out = String::new();
    let _ = writeln!(out, "{}=== {} ==={}", p.white_bold, report.name, p.reset);
    let _ = writeln!(
        out,
        "{}Max speed:{}       {} kn",
        p.gray, p.reset, report.max_speed_knots
    );
    let _ = writeln!(
        out,
        "{}Max containers:{}  {}",
        p.gray, p.reset, report.max_container_count
    );
    let _ = writeln!(
        out,
        "{}Max weight:{}      {} t",
        p.gray, p.reset, report.max_weight_tons
    );
    let _ = writeln!(
        out,
        "{}Aboard:{}          {}",
        p.gray, p.reset, report.container_count
    );
    let _ = writeln!(
        out,
        "{}Current weight:{}  {}",
        p.gray,
        p.reset,
        format_kg(report.total_weight_kg)
    );
    for container in &report.containers {
        let _ = writeln!(
            out,
            "  - {}{}{} ({}) | {}",
            p.cyan,
            container.serial_number,
            p.reset,
            container.kind.label(),
            format_kg(container.total_weight_kg)
        );
    }
    out
}

/// Render the product catalog as an aligned table.
pub fn render_products_text(rows: &[ProductSummary]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Products ({}):", rows.len());
    let _ = writeln!(out, "{:<14} {:>14}", "Product", "Min Temp (°C)");
    for row in rows {
        let _ = writeln!(
            out,
            "{:<14} {:>14.1}",
            row.product.name(),
            row.min_temperature_c
        );
    }
    out
}

/// Render any serialisable value as pretty JSON followed by a newline.
pub fn render_json<T: Serialize + ?Sized>(value: &T) -> serde_json::Result<String> {
    let mut json = serde_json::to_string_pretty(value)?;
    json.push('\n');
    Ok(json)
}
