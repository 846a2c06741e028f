//! Serial number allocation for containers.

use std::sync::atomic::{AtomicU64, Ordering};

/// Shared prefix of every container serial number.
pub const SERIAL_PREFIX: &str = "CON";

/// Allocates `CON-<kind>-<n>` serial numbers from one monotonic counter.
///
/// The counter starts at 1, is shared by every container kind and is never
/// reset. Pass one generator to everything that builds containers; tests
/// create a fresh one per case to get deterministic numbers.
#[derive(Debug)]
pub struct SerialNumberGenerator {
    next: AtomicU64,
}

impl SerialNumberGenerator {
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    /// Generator whose first allocation uses `first`.
    pub fn starting_at(first: u64) -> Self {
        Self {
            next: AtomicU64::new(first),
        }
    }

    /// Allocate the next serial number for a container kind prefix.
    pub fn allocate(&self, kind_prefix: &str) -> String {
        let n = self.next.fetch_add(1, Ordering::Relaxed);
        let serial = format!("{SERIAL_PREFIX}-{kind_prefix}-{n}");
        tracing::debug!(serial = %serial, "allocated container serial number");
        serial
    }

    /// Value the next allocation will use.
    pub fn peek(&self) -> u64 {
        self.next.load(Ordering::Relaxed)
    }
}

impl Default for SerialNumberGenerator {
    fn default() -> Self {
        Self::new()
    }
}
