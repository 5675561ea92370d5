//! Events and history logging

use serde::{Deserialize, Serialize};

use crate::core::types::{AgentId, Archetype, Step};

/// A historical event
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: u32,
    pub step: Step,
    pub event_type: EventType,
    pub participants: Vec<AgentId>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum EventType {
    /// The land power switched to its total-war naval program
    TotalWarDeclared { agent: AgentId, message: String },
    /// An archetype took exclusive control of the sea
    SeaControlGained { archetype: Archetype, ratio: f64 },
    /// The previous holder lost the sea to a rival
    SeaControlLost { archetype: Archetype },
    /// Nobody holds the sea any more
    SeaContested,
}

/// The complete history log
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct HistoryLog {
    pub events: Vec<Event>,
    next_event_id: u32,
}

impl HistoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_event(&mut self, event_type: EventType, step: Step, participants: Vec<AgentId>) -> u32 {
        let id = self.next_event_id;
        self.next_event_id += 1;

        self.events.push(Event {
            id,
            step,
            event_type,
            participants,
        });

        id
    }

    pub fn events_for_step(&self, step: Step) -> impl Iterator<Item = &Event> {
        self.events.iter().filter(move |e| e.step == step)
    }

    pub fn events_for_agent(&self, agent: AgentId) -> impl Iterator<Item = &Event> {
        self.events.iter().filter(move |e| e.participants.contains(&agent))
    }

    pub fn count_where(&self, predicate: impl Fn(&EventType) -> bool) -> usize {
        self.events.iter().filter(|e| predicate(&e.event_type)).count()
    }
}
