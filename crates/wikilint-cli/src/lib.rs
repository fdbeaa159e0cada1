//! Wikilint CLI library
//!
//! Everything the `wikilint` binary does besides argument parsing:
//! configuration layering, logging setup, report rendering, and the
//! command implementations.

pub mod cli;
pub mod commands;
pub mod config;
pub mod formatting;
pub mod logging;
