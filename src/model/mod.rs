//! Sea power simulation
//!
//! Three nations (a sea power, a land power and a trading power) grow
//! wealth, industry, merchant fleets and navies. Each step one global rule
//! decides whether a single navy controls the sea and blockades the others.

pub mod archetype;
pub mod events;
pub mod nation;
pub mod output;
pub mod recorder;
pub mod simulation;
pub mod systems;
pub mod world;

pub use archetype::{ArchetypeProfile, IndustryRule};
pub use events::{Event, EventType, HistoryLog};
pub use nation::{Nation, Strategy};
pub use output::{Debrief, SimulationOutput, Verdict};
pub use recorder::{AgentRecord, Metric, TimeSeries};
pub use simulation::{simulate, simulate_with};
pub use world::SeaPowerModel;
