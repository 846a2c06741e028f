use thiserror::Error;

use crate::product::ProductType;

/// Convenient result alias for the fleetyard library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
///
/// Only direct container operations (`load`, `set_temperature`, construction)
/// surface these. Ship operations report placement failures through
/// [`RejectionReason`](crate::ship::RejectionReason) instead.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// Requested load would exceed the container's physical capacity.
    #[error("container {serial} overfilled: {requested} kg requested with {current_load} of {max_capacity} kg loaded")]
    Overfill {
        serial: String,
        requested: f64,
        current_load: f64,
        max_capacity: f64,
    },

    /// Operation rejected because it crosses a safety threshold.
    #[error("hazardous operation on container {serial}: {reason}")]
    HazardousOperation { serial: String, reason: String },

    /// Raised when a load mass is negative or not a finite number.
    #[error("invalid load mass for container {serial}: {mass}")]
    InvalidMass { serial: String, mass: f64 },

    /// Raised when container construction parameters fail validation.
    #[error("invalid container parameters: {message}")]
    InvalidContainer { message: String },

    /// Raised when ship construction parameters fail validation.
    #[error("invalid ship parameters: {message}")]
    InvalidShip { message: String },

    /// Raised when a product name does not match any catalog entry.
    #[error("unknown product: {name}{}", format_products())]
    UnknownProduct { name: String },
}

impl Error {
    /// True for the two safety/capacity kinds raised by load rules.
    pub fn is_load_rejection(&self) -> bool {
        matches!(self, Error::Overfill { .. } | Error::HazardousOperation { .. })
    }
}

fn format_products() -> String {
    format!(
        ". Expected one of: {}",
        ProductType::ALL
            .iter()
            .map(|p| p.name())
            .collect::<Vec<_>>()
            .join(", ")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_product_lists_catalog() {
        let err = Error::UnknownProduct {
            name: "kiwi".to_string(),
        };
        let message = err.to_string();
        assert!(message.starts_with("unknown product: kiwi"));
        assert!(message.contains("bananas"));
        assert!(message.contains("frozen-pizza"));
    }

    #[test]
    fn load_rejection_kinds() {
        let overfill = Error::Overfill {
            serial: "CON-G-1".to_string(),
            requested: 10.0,
            current_load: 495.0,
            max_capacity: 500.0,
        };
        let invalid = Error::InvalidMass {
            serial: "CON-G-1".to_string(),
            mass: -1.0,
        };
        assert!(overfill.is_load_rejection());
        assert!(!invalid.is_load_rejection());
    }
}
