//! SeaPowerModel - the world state container and its step sequence

use tracing::{debug, info};

use crate::core::config::{clamp_burden, ScenarioConfig};
use crate::core::types::{AgentId, Archetype, SeaState, Step};
use crate::model::events::{EventType, HistoryLog};
use crate::model::nation::Nation;
use crate::model::recorder::TimeSeries;
use crate::model::systems::{self, SeaControlSnapshot};

/// The three rival nations and the global state of the seas
#[derive(Clone, Debug)]
pub struct SeaPowerModel {
    /// Nations in construction order (sea, land, trade)
    nations: Vec<Nation>,
    /// Number of completed steps
    step_count: Step,
    sea_state: SeaState,
    /// Set once by the escalation and kept for the rest of the run
    status_message: Option<String>,
    history: HistoryLog,
    series: TimeSeries,
}

impl SeaPowerModel {
    /// Build the fixed roster. Burdens are clamped into [0, 1].
    pub fn new(land_power_burden: f64, sea_power_burden: f64) -> Self {
        let nations = Archetype::ALL
            .iter()
            .map(|&archetype| {
                let burden = match archetype {
                    Archetype::SeaPower => sea_power_burden,
                    Archetype::LandPower => land_power_burden,
                    Archetype::TradePower => 0.0,
                };
                Nation::new(archetype, clamp_burden(burden))
            })
            .collect();

        Self {
            nations,
            step_count: 0,
            sea_state: SeaState::Contested,
            status_message: None,
            history: HistoryLog::new(),
            series: TimeSeries::new(),
        }
    }

    pub fn from_config(config: &ScenarioConfig) -> Self {
        Self::new(config.land_power_burden, config.sea_power_burden)
    }

    /// Advance the whole world by one step
    pub fn step(&mut self) {
        let step = self.step_count;

        if let Some(escalation) = systems::check_escalation(step, &mut self.nations) {
            info!(step, agent = %escalation.agent, name = %escalation.new_name, "total war declared");
            self.history.add_event(
                EventType::TotalWarDeclared {
                    agent: escalation.agent,
                    message: escalation.message.clone(),
                },
                step,
                vec![escalation.agent],
            );
            self.status_message = Some(escalation.message);
        }

        let snapshot = systems::determine_sea_control(&self.nations);
        systems::apply_sea_control(&mut self.nations, &snapshot);
        self.record_transition(step, &snapshot);
        self.sea_state = snapshot.state;

        debug!(step, sea_state = %self.sea_state, ratio = snapshot.ratio, "sea control determined");

        for nation in &mut self.nations {
            nation.step();
        }

        self.series.collect(step, &self.nations);
        self.step_count += 1;
    }

    /// Run `steps` more steps
    pub fn run(&mut self, steps: u32) {
        for _ in 0..steps {
            self.step();
        }
    }

    fn record_transition(&mut self, step: Step, snapshot: &SeaControlSnapshot) {
        let previous = self.sea_state;
        let current = snapshot.state;
        if previous == current {
            return;
        }

        info!(step, from = %previous, to = %current, "sea state changed");

        if let Some(lost) = previous.dominant() {
            let participants = self.agent_ids_of(&[lost]);
            self.history
                .add_event(EventType::SeaControlLost { archetype: lost }, step, participants);
        }

        match current {
            SeaState::Dominated(archetype) => {
                let participants = self.agent_ids_of(&[archetype]);
                self.history.add_event(
                    EventType::SeaControlGained {
                        archetype,
                        ratio: snapshot.ratio,
                    },
                    step,
                    participants,
                );
            }
            SeaState::Contested => {
                let participants = snapshot.attrition.iter().map(|&i| self.nations[i].id).collect();
                self.history.add_event(EventType::SeaContested, step, participants);
            }
        }
    }

    fn agent_ids_of(&self, archetypes: &[Archetype]) -> Vec<AgentId> {
        self.nations
            .iter()
            .filter(|n| archetypes.contains(&n.archetype))
            .map(|n| n.id)
            .collect()
    }

    /// Change a nation's land burden mid-run (clamped into [0, 1]).
    ///
    /// The escalation check reads the land power's burden at the trigger step,
    /// so changing it before then changes the outcome. The trade power's burden
    /// is fixed and ignores this call. Returns whether a burden changed.
    pub fn set_land_security_burden(&mut self, archetype: Archetype, burden: f64) -> bool {
        if archetype.profile().fixed_burden.is_some() {
            return false;
        }
        match self.nations.iter_mut().find(|n| n.archetype == archetype) {
            Some(nation) => {
                nation.land_security_burden = clamp_burden(burden);
                true
            }
            None => false,
        }
    }

    pub fn nations(&self) -> &[Nation] {
        &self.nations
    }

    pub fn nation(&self, archetype: Archetype) -> Option<&Nation> {
        self.nations.iter().find(|n| n.archetype == archetype)
    }

    pub fn step_count(&self) -> Step {
        self.step_count
    }

    pub fn sea_state(&self) -> SeaState {
        self.sea_state
    }

    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }

    pub fn history(&self) -> &HistoryLog {
        &self.history
    }

    pub fn series(&self) -> &TimeSeries {
        &self.series
    }
}
