//! Simulation output and serialization

use std::time::Duration;

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::core::error::Result;
use crate::core::types::{AgentId, Archetype, SeaState, Step};
use crate::model::events::{EventType, HistoryLog};
use crate::model::nation::Nation;
use crate::model::recorder::TimeSeries;
use crate::model::world::SeaPowerModel;

/// Complete simulation output
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SimulationOutput {
    pub final_state: WorldSnapshot,
    pub history: HistoryLog,
    pub series: TimeSeries,
    /// None only for an empty roster
    pub debrief: Option<Debrief>,
    pub statistics: SimulationStats,
}

/// Serializable snapshot of the model after the last step
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct WorldSnapshot {
    pub step: Step,
    pub sea_state: SeaState,
    pub sea_state_label: String,
    pub status_message: Option<String>,
    pub nations: Vec<NationSnapshot>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NationSnapshot {
    #[serde(flatten)]
    pub nation: Nation,
    pub total_power: f64,
}

impl From<&Nation> for NationSnapshot {
    fn from(nation: &Nation) -> Self {
        Self {
            nation: nation.clone(),
            total_power: nation.total_power(),
        }
    }
}

/// Who came out on top, classified by archetype
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    /// The sea power kept its fleet superiority and strangled its rivals
    SeaPowerAscendant,
    /// The land power's self-sufficient industry outlasted the blockade
    LandPowerAscendant,
    /// Low-intensity competition let the trading nation compound its wealth
    TradeCompounding,
}

impl Verdict {
    pub fn for_winner(archetype: Archetype) -> Self {
        match archetype {
            Archetype::SeaPower => Verdict::SeaPowerAscendant,
            Archetype::LandPower => Verdict::LandPowerAscendant,
            Archetype::TradePower => Verdict::TradeCompounding,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Debrief {
    pub winner: AgentId,
    pub winner_name: String,
    pub winner_archetype: Archetype,
    pub winner_total_power: f64,
    pub verdict: Verdict,
    pub total_war_declared: bool,
}

impl Debrief {
    /// Returns None only for an empty roster
    pub fn from_nations(nations: &[Nation], history: &HistoryLog) -> Option<Self> {
        // max_by_key keeps the last maximum; rev() makes ties go to the earliest nation
        let winner = nations
            .iter()
            .rev()
            .max_by_key(|n| OrderedFloat(n.total_power()))?;

        Some(Self {
            winner: winner.id,
            winner_name: winner.name.clone(),
            winner_archetype: winner.archetype,
            winner_total_power: winner.total_power(),
            verdict: Verdict::for_winner(winner.archetype),
            total_war_declared: history
                .count_where(|e| matches!(e, EventType::TotalWarDeclared { .. }))
                > 0,
        })
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SimulationStats {
    pub steps_simulated: u32,
    pub simulation_time_ms: u64,
    pub steps_contested: u32,
    pub steps_sea_power_dominant: u32,
    pub steps_land_power_dominant: u32,
    pub steps_trade_power_dominant: u32,
    pub sea_state_changes: u32,
}

impl SimulationOutput {
    pub fn new(model: &SeaPowerModel, sea_states: &[SeaState], elapsed: Duration) -> Self {
        let nations = model.nations();
        let history = model.history().clone();

        let count = |state: SeaState| sea_states.iter().filter(|&&s| s == state).count() as u32;
        let sea_state_changes = history.count_where(|e| {
            matches!(e, EventType::SeaControlGained { .. } | EventType::SeaContested)
        }) as u32;

        let debrief = Debrief::from_nations(nations, &history);

        Self {
            final_state: WorldSnapshot {
                step: model.step_count(),
                sea_state: model.sea_state(),
                sea_state_label: model.sea_state().label(),
                status_message: model.status_message().map(str::to_string),
                nations: nations.iter().map(NationSnapshot::from).collect(),
            },
            history,
            series: model.series().clone(),
            debrief,
            statistics: SimulationStats {
                steps_simulated: model.step_count(),
                simulation_time_ms: elapsed.as_millis() as u64,
                steps_contested: count(SeaState::Contested),
                steps_sea_power_dominant: count(SeaState::Dominated(Archetype::SeaPower)),
                steps_land_power_dominant: count(SeaState::Dominated(Archetype::LandPower)),
                steps_trade_power_dominant: count(SeaState::Dominated(Archetype::TradePower)),
                sea_state_changes,
            },
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self)?)
    }

    pub fn summary(&self) -> String {
        let winner = match &self.debrief {
            Some(d) => format!("{} ({:.1} total power, {:?})", d.winner_name, d.winner_total_power, d.verdict),
            None => "none".to_string(),
        };
        format!(
            "Simulated {} steps in {}ms\nFinal sea state: {} ({} changes, {} contested steps)\nWinner: {}",
            self.statistics.steps_simulated,
            self.statistics.simulation_time_ms,
            self.final_state.sea_state_label,
            self.statistics.sea_state_changes,
            self.statistics.steps_contested,
            winner,
        )
    }
}
