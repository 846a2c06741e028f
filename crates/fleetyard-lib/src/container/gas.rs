//! Pressurised gas containers.

use crate::error::Result;
use crate::hazard::{HazardAlert, HazardNotifier, SharedHazardChannel};

use super::{CargoContainer, CargoHold};

/// Share of the load that stays behind after unloading.
pub const RESIDUAL_FRACTION: f64 = 0.05;

const CAPACITY_ALERT: &str = "exceeded permitted capacity";

/// Gas cylinder container. Unloading always leaves a residue behind.
#[derive(Debug)]
pub struct GasContainer {
    hold: CargoHold,
    pressure: f64,
    hazards: SharedHazardChannel,
}

impl GasContainer {
    pub(crate) fn new(hold: CargoHold, pressure: f64, hazards: SharedHazardChannel) -> Self {
        Self {
            hold,
            pressure,
            hazards,
        }
    }

    /// Pressure in atmospheres.
    pub fn pressure(&self) -> f64 {
        self.pressure
    }

    pub fn set_pressure(&mut self, pressure: f64) {
        self.pressure = pressure;
    }
}

impl CargoContainer for GasContainer {
    fn hold(&self) -> &CargoHold {
        &self.hold
    }

    fn load(&mut self, mass: f64) -> Result<()> {
        self.hold.check_mass(mass)?;

        if self.hold.exceeds(mass, self.hold.max_capacity()) {
            self.notify_hazard(self.hold.serial_number(), CAPACITY_ALERT);
            return Err(self.hold.overfill(mass));
        }

        self.hold.add(mass);
        Ok(())
    }

    fn unload(&mut self) {
        let residue = self.hold.current_load() * RESIDUAL_FRACTION;
        self.hold.set_load(residue);
    }
}

impl HazardNotifier for GasContainer {
    fn notify_hazard(&self, container_id: &str, message: &str) {
        self.hazards.emit(HazardAlert {
            container_id: container_id.to_string(),
            message: message.to_string(),
        });
    }
}
