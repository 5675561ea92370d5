//! Seapower - deterministic simulation of sea control between rival nations

pub mod core;
pub mod model;
