//! Refrigerated containers for catalog products.

use crate::error::{Error, Result};
use crate::product::ProductType;

use super::{CargoContainer, CargoHold};

/// Temperature-controlled container dedicated to one product.
#[derive(Debug)]
pub struct RefrigeratedContainer {
    hold: CargoHold,
    product: ProductType,
    temperature: f64,
}

impl RefrigeratedContainer {
    /// Build a container holding `product` at `temperature` °C.
    ///
    /// Fails with [`Error::HazardousOperation`] when the temperature is below
    /// the product's minimum.
    pub(crate) fn new(hold: CargoHold, product: ProductType, temperature: f64) -> Result<Self> {
        check_temperature(hold.serial_number(), product, temperature)?;
        Ok(Self {
            hold,
            product,
            temperature,
        })
    }

    pub fn product(&self) -> ProductType {
        self.product
    }

    /// Current set point in °C.
    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    /// Change the set point. The previous value is kept when validation fails.
    pub fn set_temperature(&mut self, temperature: f64) -> Result<()> {
        check_temperature(self.hold.serial_number(), self.product, temperature)?;
        self.temperature = temperature;
        Ok(())
    }
}

fn check_temperature(serial: &str, product: ProductType, temperature: f64) -> Result<()> {
    if !temperature.is_finite() {
        return Err(Error::HazardousOperation {
            serial: serial.to_string(),
            reason: format!("temperature {temperature} is not a usable set point"),
        });
    }
    let required = product.required_min_temperature();
    if temperature < required {
        return Err(Error::HazardousOperation {
            serial: serial.to_string(),
            reason: format!(
                "temperature {temperature} °C too low for {product} (minimum {required} °C)"
            ),
        });
    }
    Ok(())
}

impl CargoContainer for RefrigeratedContainer {
    fn hold(&self) -> &CargoHold {
        &self.hold
    }

    fn load(&mut self, mass: f64) -> Result<()> {
        self.hold.check_mass(mass)?;

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
