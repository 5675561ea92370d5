//! Core type definitions used throughout the codebase

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a nation agent
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AgentId(pub u32);

impl fmt::Display for AgentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Simulation step counter (one step = one year of the scenario)
pub type Step = u32;

/// The three fixed nation profiles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Archetype {
    SeaPower,
    LandPower,
    TradePower,
}

impl Archetype {
    /// All archetypes in construction order
    pub const ALL: [Archetype; 3] = [Archetype::SeaPower, Archetype::LandPower, Archetype::TradePower];

    /// Stable snake-case tag, used in sea-state labels and output
    pub fn tag(self) -> &'static str {
        match self {
            Archetype::SeaPower => "sea_power",
            Archetype::LandPower => "land_power",
            Archetype::TradePower => "trade_power",
        }
    }
}

impl fmt::Display for Archetype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Global state of the seas after a sea-control determination
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SeaState {
    /// No navy outclasses the runner-up; nobody is blockaded
    #[default]
    Contested,
    /// One archetype holds sea control and blockades the others
    Dominated(Archetype),
}

impl SeaState {
    pub fn label(self) -> String {
        match self {
            SeaState::Contested => "contested".to_string(),
            SeaState::Dominated(archetype) => format!("{}_domination", archetype.tag()),
        }
    }

    pub fn dominant(self) -> Option<Archetype> {
        match self {
            SeaState::Contested => None,
            SeaState::Dominated(archetype) => Some(archetype),
        }
    }
}

impl fmt::Display for SeaState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}
