//! Fleetyard CLI library.
//!
//! Command handlers, report rendering and terminal styling for the
//! `fleetyard-cli` binary.

pub mod commands;
pub mod output;
pub mod terminal;
