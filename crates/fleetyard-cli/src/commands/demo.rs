//! Demo command handler: runs the fixed loading and transfer scenario.

use std::fmt::Write;

use anyhow::{Context, Result};
use serde::Serialize;

use fleetyard_lib::{CargoContainer, Container, ContainerFactory, ProductType, Ship, ShipReport};

use crate::output::{render_json, render_ship_text, OutputFormat};
use crate::terminal::ColorPalette;

/// Something that happened while the scenario ran.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum DemoEvent {
    /// An operation that went through.
    Note { message: String },
    /// An operation a ship refused.
    Refusal { message: String },
    /// State of every ship at this point of the scenario.
    Snapshot { ships: Vec<ShipReport> },
}

/// Ordered record of a scenario run.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DemoTranscript {
    pub events: Vec<DemoEvent>,
    /// Serial numbers of containers left without a ship at the end.
    pub ashore: Vec<String>,
}

impl DemoTranscript {
    fn note(&mut self, message: String) {
        self.events.push(DemoEvent::Note { message });
    }

    fn refusal(&mut self, message: String) {
        self.events.push(DemoEvent::Refusal { message });
    }

    fn snapshot(&mut self, ships: &[&Ship]) {
        self.events.push(DemoEvent::Snapshot {
            ships: ships.iter().map(|ship| ship.display_info()).collect(),
        });
    }

    /// Render the transcript as text, one block per snapshot.
    pub fn render_text(&self, palette: &ColorPalette) -> String {
        let mut out = String::new();
        for event in &self.events {
            match event {
                DemoEvent::Note { message } => {
                    let _ = writeln!(out, "{}>{} {}", palette.green, palette.reset, message);
                }
                DemoEvent::Refusal { message } => {
                    let _ = writeln!(out, "{}>{} {}", palette.red, palette.reset, message);
                }
                DemoEvent::Snapshot { ships } => {
                    for report in ships {
                        let _ = writeln!(out);
                        out.push_str(&render_ship_text(report, palette));
                    }
                    let _ = writeln!(out);
                }
            }
        }
        let ashore = if self.ashore.is_empty() {
            "none".to_string()
        } else {
            self.ashore.join(", ")
        };
        let _ = writeln!(out, "Containers ashore: {ashore}");
        out
    }
}

/// Handle the demo subcommand.
pub fn handle_demo(format: OutputFormat) -> Result<()> {
    tracing::info!("running demonstration scenario");
    let factory = ContainerFactory::new();
    let transcript = run_demo(&factory)?;

    let rendered = match format {
        OutputFormat::Text => transcript.render_text(&ColorPalette::detect()),
        OutputFormat::Json => {
            render_json(&transcript).context("failed to serialize demo transcript")?
        }
    };
    print!("{rendered}");
    Ok(())
}

/// Run the scenario with containers built by `factory`.
///
/// Container rule violations abort the run; ship refusals are recorded in
/// the transcript and the refused container is kept ashore.
pub fn run_demo(factory: &ContainerFactory) -> Result<DemoTranscript> {
    let mut transcript = DemoTranscript::default();

    let mut milk = factory
        .liquid(200.0, 1000.0, false)
        .context("failed to build milk container")?;
    milk.load(500.0).context("failed to load milk")?;

    let mut fuel = factory
        .liquid(300.0, 2000.0, true)
        .context("failed to build fuel container")?;
    fuel.load(900.0).context("failed to load fuel")?;

    let mut helium = factory
        .gas(150.0, 500.0, 10.0)
        .context("failed to build helium container")?;
    helium.load(400.0).context("failed to load helium")?;

    let mut bananas = factory
        .refrigerated(250.0, 800.0, ProductType::Bananas, 14.0)
        .context("failed to build banana container")?;
    bananas.load(600.0).context("failed to load bananas")?;

    let fuel_serial = fuel.serial_number().to_string();
    let helium_serial = helium.serial_number().to_string();
    let bananas_serial = bananas.serial_number().to_string();

    let mut atlantic = Ship::new("Atlantic Express", 25.0, 3, 10.0)?;
    let mut pacific = Ship::new("Pacific Runner", 20.0, 5, 20.0)?;
    let mut ashore: Vec<Container> = Vec::new();

    for container in [
        Container::from(milk),
        Container::from(fuel),
        Container::from(helium),
        Container::from(bananas),
    ] {
        load_or_keep_ashore(&mut atlantic, container, &mut ashore, &mut transcript);
    }
    transcript.snapshot(&[&atlantic, &pacific]);

    match atlantic.transfer_container(&helium_serial, &mut pacific) {
        Ok(()) => transcript.note(format!(
            "Transferred {helium_serial} from {} to {}",
            atlantic.name(),
            pacific.name()
        )),
        Err(reason) => transcript.refusal(format!("Cannot transfer {helium_serial}: {reason}")),
    }

    if let Some(index) = ashore
        .iter()
        .position(|c| c.serial_number() == bananas_serial)
    {
        let container = ashore.remove(index);
        load_or_keep_ashore(&mut pacific, container, &mut ashore, &mut transcript);
    }
    transcript.snapshot(&[&atlantic, &pacific]);

    match pacific.remove_container(&bananas_serial) {
        Some(container) => match atlantic.replace_container(&fuel_serial, container) {
            Ok(displaced) => {
                transcript.note(format!(
                    "Replaced {fuel_serial} with {bananas_serial} on {}",
                    atlantic.name()
                ));
                ashore.push(displaced);
            }
            Err(rejected) => {
                transcript.refusal(format!(
                    "Cannot replace {fuel_serial} on {}: {}",
                    atlantic.name(),
                    rejected.reason
                ));
                ashore.push(rejected.into_container());
            }
        },
        None => transcript.refusal(format!("{bananas_serial} not found on {}", pacific.name())),
    }
    transcript.snapshot(&[&atlantic, &pacific]);

    transcript.ashore = ashore
        .iter()
        .map(|c| c.serial_number().to_string())
        .collect();
    Ok(transcript)
}

fn load_or_keep_ashore(
    ship: &mut Ship,
    container: Container,
    ashore: &mut Vec<Container>,
    transcript: &mut DemoTranscript,
) {
    let serial = container.serial_number().to_string();
    match ship.load_container(container) {
        Ok(()) => transcript.note(format!("Loaded {serial} onto {}", ship.name())),
        Err(rejected) => {
            transcript.refusal(format!(
                "Cannot load {serial} onto {}: {}",
                ship.name(),
                rejected.reason
            ));
            ashore.push(rejected.into_container());
        }
    }
}
