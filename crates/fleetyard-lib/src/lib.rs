//! Fleetyard library entry points.
//!
//! This crate models cargo containers (liquid, gas, refrigerated), the safety
//! rules that govern loading them, and ships that carry them within count and
//! weight limits. Higher-level consumers (the CLI) should only depend on the
//! items exported here instead of reimplementing behavior.
//!

#![deny(warnings)]

pub mod container;
pub mod error;
pub mod hazard;
pub mod product;
pub mod serial;
pub mod ship;

#[cfg(test)]
pub(crate) mod test_helpers;

pub use container::{
    CargoContainer, Container, ContainerFactory, ContainerKind, GasContainer, LiquidContainer,
    RefrigeratedContainer,
};
pub use error::{Error, Result};
pub use hazard::{
    HazardAlert, HazardChannel, HazardLog, HazardNotifier, SharedHazardChannel,
    TracingHazardChannel, HAZARD_TARGET,
};
pub use product::{catalog, required_min_temperature, ProductSummary, ProductType};
pub use serial::SerialNumberGenerator;
pub use ship::{
    ContainerSummary, RejectedContainer, RejectionReason, Ship, ShipReport, KG_PER_TON,
};
