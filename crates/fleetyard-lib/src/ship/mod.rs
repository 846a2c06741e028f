//! Container ships and cargo placement.
//!
//! - [`rejection`] - Why a ship refuses or cannot find a container
//! - [`report`] - Read-only summaries produced by [`Ship::display_info`]
//!
//! A [`Ship`] owns its containers. Loading moves a container aboard, a refusal
//! hands it back inside a [`RejectedContainer`], and removal or replacement
//! hands the displaced container to the caller. A container therefore sits on
//! at most one ship at a time.

pub mod rejection;
pub mod report;

use tracing::{info, warn};

use crate::container::{CargoContainer, Container};
use crate::error::{Error, Result};

pub use rejection::{RejectedContainer, RejectionReason};
pub use report::{ContainerSummary, ShipReport};

/// Kilograms per metric ton.
pub const KG_PER_TON: f64 = 1000.0;

/// A ship with a container-count limit and a cargo weight limit.
#[derive(Debug)]
pub struct Ship {
    name: String,
    max_speed_knots: f64,
    max_container_count: usize,
    max_weight_tons: f64,
    containers: Vec<Container>,
}

impl Ship {
    pub fn new(
        name: &str,
        max_speed_knots: f64,
        max_container_count: usize,
        max_weight_tons: f64,
    ) -> Result<Self> {
        let name = name.trim();
        if name.is_empty() {
            return Err(Error::InvalidShip {
                message: "ship name must not be empty".to_string(),
            });
        }
        if !max_speed_knots.is_finite() || max_speed_knots < 0.0 {
            return Err(Error::InvalidShip {
                message: "max_speed_knots must be finite and non-negative".to_string(),
            });
        }
        if max_container_count == 0 {
            return Err(Error::InvalidShip {
                message: "max_container_count must be at least 1".to_string(),
            });
        }
        if !max_weight_tons.is_finite() || max_weight_tons <= 0.0 {
            return Err(Error::InvalidShip {
                message: "max_weight_tons must be a finite positive number".to_string(),
            });
        }

        Ok(Self {
            name: name.to_string(),
            max_speed_knots,
            max_container_count,
            max_weight_tons,
            containers: Vec::new(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn max_speed_knots(&self) -> f64 {
        self.max_speed_knots
    }

    pub fn max_container_count(&self) -> usize {
        self.max_container_count
    }

    pub fn max_weight_tons(&self) -> f64 {
        self.max_weight_tons
    }

    pub fn max_weight_kg(&self) -> f64 {
        self.max_weight_tons * KG_PER_TON
    }

    /// Containers aboard, in loading order.
    pub fn containers(&self) -> &[Container] {
        &self.containers
    }

    pub fn len(&self) -> usize {
        self.containers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.containers.is_empty()
    }

    /// Sum of the total weights of all containers aboard, in kilograms.
    pub fn total_weight_kg(&self) -> f64 {
        self.containers.iter().map(|c| c.total_weight()).sum()
    }

    pub fn find(&self, serial_number: &str) -> Option<&Container> {
        self.containers
            .iter()
            .find(|c| c.serial_number() == serial_number)
    }

    fn position(&self, serial_number: &str) -> Option<usize> {
        self.containers
            .iter()
            .position(|c| c.serial_number() == serial_number)
    }

    /// Check whether `container` fits next to the current cargo.
    ///
    /// Checks run in order: a serial number already aboard is refused with
    /// [`RejectionReason::DuplicateSerial`], a full manifest with
    /// [`RejectionReason::ContainerLimit`], and a combined weight above the
    /// limit with [`RejectionReason::WeightLimit`]. Reaching the weight limit
    /// exactly is allowed. Nothing is modified.
    pub fn check_capacity(
        &self,
        container: &Container,
    ) -> std::result::Result<(), RejectionReason> {
        let serial = container.serial_number();
        if self.find(serial).is_some() {
            return Err(RejectionReason::DuplicateSerial {
                serial: serial.to_string(),
            });
        }
        if self.containers.len() >= self.max_container_count {
            return Err(RejectionReason::ContainerLimit {
                limit: self.max_container_count,
            });
        }

        let total_kg = self.total_weight_kg() + container.total_weight();
        let max_kg = self.max_weight_kg();
        if total_kg > max_kg {
            return Err(RejectionReason::WeightLimit { total_kg, max_kg });
        }
        Ok(())
    }

    pub fn can_accept(&self, container: &Container) -> bool {
        self.check_capacity(container).is_ok()
    }

    /// Append a container to the end of the manifest.
    ///
    /// A refused container comes back inside the error.
    pub fn load_container(
        &mut self,
        container: impl Into<Container>,
    ) -> std::result::Result<(), RejectedContainer> {
        let container = container.into();
        match self.check_capacity(&container) {
            Ok(()) => {
                self.stow(container);
                Ok(())
            }
            Err(reason) => {
                warn!(
                    ship = %self.name,
                    container = %container.serial_number(),
                    %reason,
                    "cannot load container"
                );
                Err(RejectedContainer::new(reason, container))
            }
        }
    }

    /// Load each container in order. Earlier successes are kept when a later
    /// container is refused; the refused ones are returned.
    pub fn load_containers<I>(&mut self, containers: I) -> Vec<RejectedContainer>
    where
        I: IntoIterator,
        I::Item: Into<Container>,
    {
        containers
            .into_iter()
            .filter_map(|container| self.load_container(container).err())
            .collect()
    }

    /// Take a container off the ship.
    pub fn remove_container(&mut self, serial_number: &str) -> Option<Container> {
        let index = self.position(serial_number)?;
        let container = self.containers.remove(index);
        info!(ship = %self.name, container = %serial_number, "removed container");
        Some(container)
    }

    /// Swap the container `old_serial` for `replacement` at the same position.
    ///
    /// On success the displaced container is returned. On failure the
    /// manifest is left exactly as it was and `replacement` comes back inside
    /// the error.
    pub fn replace_container(
        &mut self,
        old_serial: &str,
        replacement: impl Into<Container>,
    ) -> std::result::Result<Container, RejectedContainer> {
        let replacement = replacement.into();
        let Some(index) = self.position(old_serial) else {
            warn!(ship = %self.name, container = %old_serial, "container to replace not found");
            return Err(RejectedContainer::new(
                RejectionReason::NotFound {
                    serial: old_serial.to_string(),
                },
                replacement,
            ));
        };

        let displaced = self.containers.remove(index);
        match self.check_capacity(&replacement) {
            Ok(()) => {
                info!(
                    ship = %self.name,
                    replaced = %old_serial,
                    container = %replacement.serial_number(),
                    "replaced container"
                );
                self.containers.insert(index, replacement);
                Ok(displaced)
            }
            Err(reason) => {
                self.containers.insert(index, displaced);
                warn!(
                    ship = %self.name,
                    replaced = %old_serial,
                    container = %replacement.serial_number(),
                    %reason,
                    "cannot replace container"
                );
                Err(RejectedContainer::new(reason, replacement))
            }
        }
    }

    /// Move a container from this ship to `destination`.
    ///
    /// The destination's checks run while the container is still aboard here,
    /// so a refusal leaves both manifests untouched.
    pub fn transfer_container(
        &mut self,
        serial_number: &str,
        destination: &mut Ship,
    ) -> std::result::Result<(), RejectionReason> {
        let Some(index) = self.position(serial_number) else {
            warn!(ship = %self.name, container = %serial_number, "container to transfer not found");
            return Err(RejectionReason::NotFound {
                serial: serial_number.to_string(),
            });
        };

        if let Err(reason) = destination.check_capacity(&self.containers[index]) {
            warn!(
                from = %self.name,
                to = %destination.name,
                container = %serial_number,
                %reason,
                "cannot transfer container"
            );
            return Err(reason);
        }

        let container = self.containers.remove(index);
        destination.stow(container);
        info!(
            from = %self.name,
            to = %destination.name,
            container = %serial_number,
            "transferred container"
        );
        Ok(())
    }

    /// Summary of limits and manifest.
    pub fn display_info(&self) -> ShipReport {
        ShipReport {
            name: self.name.clone(),
            max_speed_knots: self.max_speed_knots,
            max_container_count: self.max_container_count,
            max_weight_tons: self.max_weight_tons,
            container_count: self.containers.len(),
            total_weight_kg: self.total_weight_kg(),
            containers: self
                .containers
                .iter()
                .map(|c| ContainerSummary {
                    serial_number: c.serial_number().to_string(),
                    kind: c.kind(),
                    total_weight_kg: c.total_weight(),
                })
                .collect(),
        }
    }

    fn stow(&mut self, container: Container) {
        info!(ship = %self.name, container = %container.serial_number(), "loaded container");
        self.containers.push(container);
    }
}
