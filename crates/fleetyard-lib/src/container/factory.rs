//! Validated container construction.

use std::sync::Arc;

use crate::error::{Error, Result};
use crate::hazard::{HazardChannel, SharedHazardChannel, TracingHazardChannel};
use crate::product::ProductType;
use crate::serial::SerialNumberGenerator;

use super::{CargoHold, ContainerKind, GasContainer, LiquidContainer, RefrigeratedContainer};

/// Builds containers, assigning serial numbers and wiring hazard alerts.
///
/// One factory owns one [`SerialNumberGenerator`], so every container it
/// produces carries a distinct serial number regardless of variant.
#[derive(Debug)]
pub struct ContainerFactory {
    serials: SerialNumberGenerator,
    hazards: SharedHazardChannel,
}

impl ContainerFactory {
    /// Factory with a fresh serial counter and `tracing`-based hazard alerts.
    pub fn new() -> Self {
        Self::with_parts(SerialNumberGenerator::new(), Arc::new(TracingHazardChannel))
    }

    /// Factory with a fresh serial counter that sends hazard alerts to `channel`.
    pub fn with_hazard_channel<C>(channel: C) -> Self
    where
        C: HazardChannel + 'static,
    {
        Self::with_parts(SerialNumberGenerator::new(), Arc::new(channel))
    }

    pub fn with_parts(serials: SerialNumberGenerator, hazards: SharedHazardChannel) -> Self {
        Self { serials, hazards }
    }

    pub fn serials(&self) -> &SerialNumberGenerator {
        &self.serials
    }

    pub fn liquid(
        &self,
        tare_weight: f64,
        max_capacity: f64,
        hazardous: bool,
    ) -> Result<LiquidContainer> {
        let hold = self.hold(ContainerKind::Liquid, tare_weight, max_capacity)?;
        Ok(LiquidContainer::new(
            hold,
            hazardous,
            Arc::clone(&self.hazards),
        ))
    }

    pub fn gas(&self, tare_weight: f64, max_capacity: f64, pressure: f64) -> Result<GasContainer> {
        let hold = self.hold(ContainerKind::Gas, tare_weight, max_capacity)?;
        Ok(GasContainer::new(hold, pressure, Arc::clone(&self.hazards)))
    }

    /// Build a refrigerated container.
    ///
    /// The serial number is consumed even when the initial temperature is
    /// rejected.
    pub fn refrigerated(
        &self,
        tare_weight: f64,
        max_capacity: f64,
        product: ProductType,
        temperature: f64,
    ) -> Result<RefrigeratedContainer> {
        let hold = self.hold(ContainerKind::Refrigerated, tare_weight, max_capacity)?;
        RefrigeratedContainer::new(hold, product, temperature)
    }

    fn hold(&self, kind: ContainerKind, tare_weight: f64, max_capacity: f64) -> Result<CargoHold> {
        validate_dimensions(kind, tare_weight, max_capacity)?;
        let serial = self.serials.allocate(kind.prefix());
        tracing::debug!(
            serial = %serial,
            kind = kind.label(),
            tare_weight,
            max_capacity,
            "built container"
        );
        Ok(CargoHold::new(serial, tare_weight, max_capacity))
    }
}

impl Default for ContainerFactory {
    fn default() -> Self {
        Self::new()
    }
}

fn validate_dimensions(kind: ContainerKind, tare_weight: f64, max_capacity: f64) -> Result<()> {
    if !tare_weight.is_finite() || tare_weight < 0.0 {
        return Err(Error::InvalidContainer {
            message: format!(
                "{} container tare_weight must be finite and non-negative",
                kind.label()
            ),
        });
    }
    if !max_capacity.is_finite() || max_capacity <= 0.0 {
        return Err(Error::InvalidContainer {
            message: format!(
                "{} container max_capacity must be a finite positive number",
                kind.label()
            ),
        });
    }
    Ok(())
}
