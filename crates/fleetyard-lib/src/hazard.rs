//! Hazard alerting for containers carrying dangerous cargo.
//!
//! Liquid and gas containers implement [`HazardNotifier`]. Their alerts are
//! forwarded to a [`HazardChannel`], which is kept apart from ordinary status
//! logging. The default channel emits `tracing` events with the `hazard`
//! target; [`HazardLog`] keeps alerts in memory instead.

use std::fmt;
use std::sync::{Arc, Mutex};

use serde::Serialize;

/// `tracing` target used by [`TracingHazardChannel`].
pub const HAZARD_TARGET: &str = "hazard";

/// A single hazard alert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HazardAlert {
    pub container_id: String,
    pub message: String,
}

/// Capability of containers that can raise hazard alerts.
pub trait HazardNotifier {
    /// Emit a hazard alert for `container_id`. Never fails.
    fn notify_hazard(&self, container_id: &str, message: &str);
}

/// Destination for hazard alerts.
pub trait HazardChannel: fmt::Debug + Send + Sync {
    fn emit(&self, alert: HazardAlert);
}

/// Shared handle to a hazard channel, cloned into every container that needs one.
pub type SharedHazardChannel = Arc<dyn HazardChannel>;

/// Emits hazard alerts as `ERROR` events on the `hazard` target.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingHazardChannel;

impl HazardChannel for TracingHazardChannel {
    fn emit(&self, alert: HazardAlert) {
        tracing::error!(
            target: HAZARD_TARGET,
            container = %alert.container_id,
            "HAZARD: {}",
            alert.message
        );
    }
}

/// In-memory hazard channel. Clones share the same alert list.
#[derive(Debug, Clone, Default)]
pub struct HazardLog {
    alerts: Arc<Mutex<Vec<HazardAlert>>>,
}

impl HazardLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the alerts received so far, oldest first.
    pub fn alerts(&self) -> Vec<HazardAlert> {
        self.alerts
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    pub fn len(&self) -> usize {
        self.alerts
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl HazardChannel for HazardLog {
    fn emit(&self, alert: HazardAlert) {
        self.alerts
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(alert);
    }
}
