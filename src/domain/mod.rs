//! Domain layer: value types and the ports providers plug into.

pub mod charge;
pub mod config;
pub mod ports;
