//! Utility modules shared across the crate
//!
//! - `error`: library error type and result alias
//! - `logging`: tracing setup helpers
//! - `saver`: image file output

pub mod error;
pub mod logging;
pub mod saver;
