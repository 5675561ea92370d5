//! Simulation systems

pub mod escalation;
pub mod sea_control;

pub use escalation::{check_escalation, Escalation, ESCALATION_STEP};
pub use sea_control::{apply_sea_control, determine_sea_control, SeaControlSnapshot, SeaFlags};
