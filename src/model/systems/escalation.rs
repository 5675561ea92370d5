//! Scripted naval escalation of the land power
//!
//! A single edge in the step sequence: it is checked only when the step
//! counter equals [`ESCALATION_STEP`], so it can never fire twice.

use serde::{Deserialize, Serialize};

use crate::core::types::{AgentId, Archetype, Step};
use crate::model::nation::{Nation, Strategy};

/// Step counter value at which the check runs (the 16th call to step)
pub const ESCALATION_STEP: Step = 15;

/// Land burden below which the land power feels safe enough to build a fleet
pub const ESCALATION_BURDEN_THRESHOLD: f64 = 0.1;

pub const TOTAL_WAR_STRATEGY: Strategy = Strategy {
    navy: 0.8,
    merchant: 0.0,
    industry: 0.2,
};

pub const TOTAL_WAR_MESSAGE: &str =
    "Warning: the land power has launched a total-war naval program";

/// Record of the escalation having fired
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Escalation {
    pub agent: AgentId,
    pub new_name: String,
    pub message: String,
}

/// Apply the escalation if this is the trigger step and the land power's
/// current burden is below the threshold.
pub fn check_escalation(step: Step, nations: &mut [Nation]) -> Option<Escalation> {
    if step != ESCALATION_STEP {
        return None;
    }

    let land_power = nations
        .iter_mut()
        .find(|n| n.archetype == Archetype::LandPower)?;

    if land_power.land_security_burden >= ESCALATION_BURDEN_THRESHOLD {
        return None;
    }

    land_power.strategy = TOTAL_WAR_STRATEGY;
    land_power.name = format!("{} (Total War)", Archetype::LandPower.profile().base_name);

    Some(Escalation {
        agent: land_power.id,
        new_name: land_power.name.clone(),
        message: TOTAL_WAR_MESSAGE.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster(land_burden: f64) -> Vec<Nation> {
        vec![
            Nation::new(Archetype::SeaPower, 0.05),
            Nation::new(Archetype::LandPower, land_burden),
            Nation::new(Archetype::TradePower, 0.1),
        ]
    }

    #[test]
    fn test_fires_at_trigger_step_with_low_burden() {
        let mut nations = roster(0.05);
        let escalation = check_escalation(ESCALATION_STEP, &mut nations).unwrap();

        assert_eq!(escalation.agent, AgentId(2));
        assert_eq!(escalation.new_name, "Germany (Total War)");
        assert_eq!(nations[1].strategy, TOTAL_WAR_STRATEGY);
        assert_eq!(nations[1].name, "Germany (Total War)");
        // Other nations untouched
        assert_eq!(nations[0].name, "UK (Sea)");
    }

    #[test]
    fn test_does_not_fire_on_other_steps() {
        for step in [0, 14, 16, 30, 100] {
            let mut nations = roster(0.0);
            assert!(check_escalation(step, &mut nations).is_none());
            assert_eq!(nations[1].name, "Germany (Land)");
        }
    }

    #[test]
    fn test_threshold_is_strict() {
        let mut nations = roster(0.1);
        assert!(check_escalation(ESCALATION_STEP, &mut nations).is_none());
        assert_eq!(nations[1].strategy, Archetype::LandPower.profile().strategy);
    }
}
