//! Liquid containers.

use crate::error::{Error, Result};
use crate::hazard::{HazardAlert, HazardNotifier, SharedHazardChannel};

use super::{CargoContainer, CargoHold};

/// Fraction of capacity usable when the cargo is hazardous.
pub const HAZARDOUS_LOAD_FRACTION: f64 = 0.5;
/// Fraction of capacity usable for ordinary liquids.
pub const STANDARD_LOAD_FRACTION: f64 = 0.9;

const LOAD_LIMIT_ALERT: &str = "exceeded permitted load limit";

/// Tank container for liquids, hazardous or not.
#[derive(Debug)]
pub struct LiquidContainer {
    hold: CargoHold,
    hazardous: bool,
    hazards: SharedHazardChannel,
}

impl LiquidContainer {
    pub(crate) fn new(hold: CargoHold, hazardous: bool, hazards: SharedHazardChannel) -> Self {
        Self {
            hold,
            hazardous,
            hazards,
        }
    }

    pub fn is_hazardous(&self) -> bool {
        self.hazardous
    }

    /// Highest load permitted by the safety rules, in kilograms.
    pub fn load_limit(&self) -> f64 {
        let fraction = if self.hazardous {
            HAZARDOUS_LOAD_FRACTION
        } else {
            STANDARD_LOAD_FRACTION
        };
        fraction * self.hold.max_capacity()
    }
}

impl CargoContainer for LiquidContainer {
    fn hold(&self) -> &CargoHold {
        &self.hold
    }

    fn load(&mut self, mass: f64) -> Result<()> {
        self.hold.check_mass(mass)?;

        let limit = self.load_limit();
        if self.hold.exceeds(mass, limit) {
            self.notify_hazard(self.hold.serial_number(), LOAD_LIMIT_ALERT);
            return Err(Error::HazardousOperation {
                serial: self.hold.serial_number().to_string(),
                reason: format!(
                    "loading {mass} kg onto {} kg exceeds the permitted limit of {limit} kg",
                    self.hold.current_load()
                ),
            });
        }
        // Unreachable while the limit fraction stays below 1.
        if self.hold.exceeds(mass, self.hold.max_capacity()) {
            return Err(self.hold.overfill(mass));
        }

        self.hold.add(mass);
        Ok(())
    }

    fn unload(&mut self) {
        self.hold.set_load(0.0);
    }
}

impl HazardNotifier for LiquidContainer {
    fn notify_hazard(&self, container_id: &str, message: &str) {
        self.hazards.emit(HazardAlert {
            container_id: container_id.to_string(),
            message: message.to_string(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::recording_factory;

    #[test]
    fn standard_liquid_fills_to_ninety_percent() {
        let (factory, log) = recording_factory();
        let mut milk = factory.liquid(200.0, 1000.0, false).unwrap();

        milk.load(500.0).unwrap();
        milk.load(400.0).unwrap();
        assert_eq!(milk.current_load(), 900.0);
        assert_eq!(milk.load_limit(), 900.0);

        let err = milk.load(1.0).expect_err("past 90%");
        assert!(matches!(err, Error::HazardousOperation { ref serial, .. } if serial == "CON-L-1"));
        assert_eq!(milk.current_load(), 900.0);
        assert_eq!(log.len(), 1);
    }

    #[test]
    fn hazardous_liquid_limited_to_half_capacity() {
        let (factory, log) = recording_factory();
        let mut fuel = factory.liquid(300.0, 2000.0, true).unwrap();

        fuel.load(900.0).unwrap();
        let err = fuel.load(200.0).expect_err("1100 > 1000");

        assert!(matches!(err, Error::HazardousOperation { .. }));
        assert_eq!(fuel.current_load(), 900.0);
        let alerts = log.alerts();
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].container_id, "CON-L-1");
        assert_eq!(alerts[0].message, "exceeded permitted load limit");
    }

    #[test]
    fn unload_empties_tank() {
        let (factory, _log) = recording_factory();
        let mut milk = factory.liquid(200.0, 1000.0, false).unwrap();
        milk.load(750.0).unwrap();

        milk.unload();

        assert_eq!(milk.current_load(), 0.0);
        assert_eq!(milk.total_weight(), 200.0);
    }

    #[test]
    fn zero_mass_load_is_accepted() {
        let (factory, log) = recording_factory();
        let mut milk = factory.liquid(200.0, 1000.0, true).unwrap();
        milk.load(0.0).unwrap();
        assert_eq!(milk.current_load(), 0.0);
        assert!(log.is_empty());
    }
}
