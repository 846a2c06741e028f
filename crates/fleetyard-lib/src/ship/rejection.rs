//! Reasons a ship declines a container.

use thiserror::Error;

use crate::container::{CargoContainer, Container};

/// Why a ship operation could not place or find a container.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RejectionReason {
    /// The ship already carries its maximum number of containers.
    #[error("ship is at its limit of {limit} containers")]
    ContainerLimit { limit: usize },

    /// Accepting the container would push cargo past the weight limit.
    #[error("cargo would weigh {total_kg} kg, above the {max_kg} kg limit")]
    WeightLimit { total_kg: f64, max_kg: f64 },

    /// A container with the same serial number is already aboard.
    #[error("container {serial} is already aboard")]
    DuplicateSerial { serial: String },

    /// No container with the requested serial number is aboard.
    #[error("container {serial} is not aboard")]
    NotFound { serial: String },
}

/// A container handed back to the caller after a ship refused it.
#[derive(Debug, Error)]
#[error("could not place container {}: {reason}", .container.serial_number())]
pub struct RejectedContainer {
    pub reason: RejectionReason,
    pub container: Container,
}

impl RejectedContainer {
    pub fn new(reason: RejectionReason, container: Container) -> Self {
        Self { reason, container }
    }

    /// Take the container back.
    pub fn into_container(self) -> Container {
        self.container
    }
}
