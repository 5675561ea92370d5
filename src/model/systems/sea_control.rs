//! Sea-control determination
//!
//! Rebuilt from current navy strengths every step. Nothing from the previous
//! step's flags is read.

use std::cmp::Reverse;

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::core::types::SeaState;
use crate::model::nation::Nation;

/// Navy ratio over the runner-up needed for exclusive sea control
pub const DOMINANCE_RATIO: f64 = 1.2;

/// Navy multiplier applied to the top two fleets while the seas are contested
pub const CONTESTED_ATTRITION: f64 = 0.95;

/// Per-nation flags produced by one determination
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeaFlags {
    pub has_sea_control: bool,
    pub is_blockaded: bool,
}

/// Result of one determination, indexed like the input slice
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeaControlSnapshot {
    pub state: SeaState,
    pub flags: Vec<SeaFlags>,
    /// Indices of nations whose navy takes contested attrition
    pub attrition: Vec<usize>,
    pub ratio: f64,
}

impl SeaControlSnapshot {
    pub fn controller(&self) -> Option<usize> {
        self.flags.iter().position(|f| f.has_sea_control)
    }
}

/// Decide who controls the sea from current navies.
///
/// Ties in navy strength keep slice order, so the earlier nation ranks higher.
pub fn determine_sea_control(nations: &[Nation]) -> SeaControlSnapshot {
    let mut flags = vec![SeaFlags::default(); nations.len()];

    let mut ranked: Vec<usize> = (0..nations.len()).collect();
    ranked.sort_by_key(|&i| Reverse(OrderedFloat(nations[i].navy)));

    let (strongest, runner_up) = match ranked.as_slice() {
        [first, second, ..] => (*first, *second),
        [only] => {
            // A lone navy has nobody to contest it
            flags[*only].has_sea_control = true;
            return SeaControlSnapshot {
                state: SeaState::Dominated(nations[*only].archetype),
                flags,
                attrition: Vec::new(),
                ratio: f64::INFINITY,
            };
        }
        [] => {
            return SeaControlSnapshot {
                state: SeaState::Contested,
                flags,
                attrition: Vec::new(),
                ratio: 0.0,
            };
        }
    };

    let ratio = nations[strongest].navy / nations[runner_up].navy.max(1.0);

    if ratio > DOMINANCE_RATIO {
        for (i, flag) in flags.iter_mut().enumerate() {
            if i == strongest {
                flag.has_sea_control = true;
            } else {
                flag.is_blockaded = true;
            }
        }
        SeaControlSnapshot {
            state: SeaState::Dominated(nations[strongest].archetype),
            flags,
            attrition: Vec::new(),
            ratio,
        }
    } else {
        SeaControlSnapshot {
            state: SeaState::Contested,
            flags,
            attrition: vec![strongest, runner_up],
            ratio,
        }
    }
}

/// Overwrite every nation's flags and apply contested attrition.
pub fn apply_sea_control(nations: &mut [Nation], snapshot: &SeaControlSnapshot) {
    for (nation, flags) in nations.iter_mut().zip(&snapshot.flags) {
        nation.has_sea_control = flags.has_sea_control;
        nation.is_blockaded = flags.is_blockaded;
    }

    for &i in &snapshot.attrition {
        if let Some(nation) = nations.get_mut(i) {
            nation.navy *= CONTESTED_ATTRITION;
        }
    }
}
