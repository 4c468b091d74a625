//! rational-cli: runoff hydrographs from a TOML basin description.
//!
//! - `config`: TOML loader for basin, rainfall and flood settings
//! - `report`: plain-text table and CSV rendering of a flood table
//! - `error`:  CLI error type wrapping I/O, TOML and model errors
pub mod config;
pub mod error;
pub mod report;
