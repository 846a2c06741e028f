//! Cargo containers and their loading rules.
//!
//! This module is organized into focused submodules:
//!
//! - [`liquid`] - Liquid containers with a hazard-dependent load limit
//! - [`gas`] - Pressurised gas containers that never fully empty
//! - [`refrigerated`] - Temperature-controlled containers for catalog products
//! - [`factory`] - Validated construction and serial number assignment
//!
//! The three variants share [`CargoHold`] state and the [`CargoContainer`]
//! trait. [`Container`] is the closed sum type that ships carry.
//!
//! # Example
//!
//! ```
//! use fleetyard_lib::container::{CargoContainer, ContainerFactory};
//!
//! let factory = ContainerFactory::new();
//! let mut milk = factory.liquid(200.0, 1000.0, false).unwrap();
//! milk.load(500.0).unwrap();
//! assert_eq!(milk.total_weight(), 700.0);
//! ```

pub mod factory;
pub mod gas;
pub mod liquid;
pub mod refrigerated;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::hazard::HazardNotifier;

pub use factory::ContainerFactory;
pub use gas::GasContainer;
pub use liquid::LiquidContainer;
pub use refrigerated::RefrigeratedContainer;

/// Container variants, as they appear in serial numbers and reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ContainerKind {
    Liquid,
    Gas,
    Refrigerated,
}

impl ContainerKind {
    /// Letter embedded in the serial number (`CON-<prefix>-<n>`).
    pub fn prefix(self) -> &'static str {
        match self {
            ContainerKind::Liquid => "L",
            ContainerKind::Gas => "G",
            ContainerKind::Refrigerated => "C",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ContainerKind::Liquid => "liquid",
            ContainerKind::Gas => "gas",
            ContainerKind::Refrigerated => "refrigerated",
        }
    }
}

/// Identity, dimensions and current load shared by every container variant.
///
/// `current_load` only changes through the variant `load`/`unload` rules and
/// never exceeds `max_capacity` after a successful operation.
#[derive(Debug, Clone, PartialEq)]
pub struct CargoHold {
    serial_number: String,
    tare_weight: f64,
    max_capacity: f64,
    current_load: f64,
}

impl CargoHold {
    pub(crate) fn new(serial_number: String, tare_weight: f64, max_capacity: f64) -> Self {
        Self {
            serial_number,
            tare_weight,
            max_capacity,
            current_load: 0.0,
        }
    }

    pub fn serial_number(&self) -> &str {
        &self.serial_number
    }

    pub fn tare_weight(&self) -> f64 {
        self.tare_weight
    }

    pub fn max_capacity(&self) -> f64 {
        self.max_capacity
    }

    pub fn current_load(&self) -> f64 {
        self.current_load
    }

    /// Reject masses that are negative, NaN or infinite.
    pub(crate) fn check_mass(&self, mass: f64) -> Result<()> {
        if !mass.is_finite() || mass < 0.0 {
            return Err(Error::InvalidMass {
                serial: self.serial_number.clone(),
                mass,
            });
        }
        Ok(())
    }

    /// Whether adding `mass` would take the load past `limit`.
    pub(crate) fn exceeds(&self, mass: f64, limit: f64) -> bool {
        self.current_load + mass > limit
    }

    pub(crate) fn overfill(&self, mass: f64) -> Error {
        Error::Overfill {
            serial: self.serial_number.clone(),
            requested: mass,
            current_load: self.current_load,
            max_capacity: self.max_capacity,
        }
    }

    pub(crate) fn add(&mut self, mass: f64) {
        self.current_load += mass;
    }

    pub(crate) fn set_load(&mut self, load: f64) {
        self.current_load = load;
    }
}

/// Operations every container variant supports.
pub trait CargoContainer {
    fn hold(&self) -> &CargoHold;

    /// Add `mass` kilograms of cargo. On error the load is left untouched.
    fn load(&mut self, mass: f64) -> Result<()>;

    /// Discharge cargo according to the variant's rules.
    fn unload(&mut self);

    fn serial_number(&self) -> &str {
        self.hold().serial_number()
    }

    fn tare_weight(&self) -> f64 {
        self.hold().tare_weight()
    }

    fn max_capacity(&self) -> f64 {
        self.hold().max_capacity()
    }

    fn current_load(&self) -> f64 {
        self.hold().current_load()
    }

    /// Tare weight plus current load, in kilograms.
    fn total_weight(&self) -> f64 {
        self.tare_weight() + self.current_load()
    }
}

/// A container of any variant.
///
/// Not `Clone`: a serial number identifies exactly one container value.
#[derive(Debug)]
pub enum Container {
    Liquid(LiquidContainer),
    Gas(GasContainer),
    Refrigerated(RefrigeratedContainer),
}

impl Container {
    pub fn kind(&self) -> ContainerKind {
        match self {
            Container::Liquid(_) => ContainerKind::Liquid,
            Container::Gas(_) => ContainerKind::Gas,
            Container::Refrigerated(_) => ContainerKind::Refrigerated,
        }
    }

    /// Hazard alerting capability, present for liquid and gas containers only.
    pub fn hazard_notifier(&self) -> Option<&dyn HazardNotifier> {
        match self {
            Container::Liquid(c) => Some(c as &dyn HazardNotifier),
            Container::Gas(c) => Some(c as &dyn HazardNotifier),
            Container::Refrigerated(_) => None,
        }
    }

    pub fn as_liquid(&self) -> Option<&LiquidContainer> {
        match self {
            Container::Liquid(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_gas(&self) -> Option<&GasContainer> {
        match self {
            Container::Gas(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_gas_mut(&mut self) -> Option<&mut GasContainer> {
        match self {
            Container::Gas(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_refrigerated(&self) -> Option<&RefrigeratedContainer> {
        match self {
            Container::Refrigerated(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_refrigerated_mut(&mut self) -> Option<&mut RefrigeratedContainer> {
        match self {
            Container::Refrigerated(c) => Some(c),
            _ => None,
        }
    }
}

impl CargoContainer for Container {
    fn hold(&self) -> &CargoHold {
        match self {
            Container::Liquid(c) => c.hold(),
            Container::Gas(c) => c.hold(),
            Container::Refrigerated(c) => c.hold(),
        }
    }

    fn load(&mut self, mass: f64) -> Result<()> {
        match self {
            Container::Liquid(c) => c.load(mass),
            Container::Gas(c) => c.load(mass),
            Container::Refrigerated(c) => c.load(mass),
        }
    }

    fn unload(&mut self) {
        match self {
            Container::Liquid(c) => c.unload(),
            Container::Gas(c) => c.unload(),
            Container::Refrigerated(c) => c.unload(),
        }
    }
}

impl From<LiquidContainer> for Container {
    fn from(value: LiquidContainer) -> Self {
        Container::Liquid(value)
    }
}

impl From<GasContainer> for Container {
    fn from(value: GasContainer) -> Self {
        Container::Gas(value)
    }
}

impl From<RefrigeratedContainer> for Container {
    fn from(value: RefrigeratedContainer) -> Self {
        Container::Refrigerated(value)
    }
}
