//! Archetype profiles - the fixed parameters behind each nation
//!
//! Every archetype-specific rule is looked up here, so adding a variant to
//! [`Archetype`] forces every rule to be decided for it.

use crate::core::types::{AgentId, Archetype};
use crate::model::nation::Strategy;

/// How an archetype's industry responds to blockade
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum IndustryRule {
    /// Self-sufficient industry: same multiplier whether blockaded or not
    Insulated(f64),
    /// Industry depends on sea lanes and collapses under blockade
    Exposed { normal: f64, blockaded: f64 },
}

impl IndustryRule {
    pub fn multiplier(self, is_blockaded: bool) -> f64 {
        match self {
            IndustryRule::Insulated(multiplier) => multiplier,
            IndustryRule::Exposed { normal, blockaded } => {
                if is_blockaded {
                    blockaded
                } else {
                    normal
                }
            }
        }
    }
}

/// Static description of one archetype
#[derive(Debug, Clone, PartialEq)]
pub struct ArchetypeProfile {
    pub id: AgentId,
    /// Name without posture suffix, used when the display name changes
    pub base_name: &'static str,
    pub display_name: &'static str,
    pub strategy: Strategy,
    /// Burden that ignores construction parameters (`None` = caller supplies it)
    pub fixed_burden: Option<f64>,
    pub industry: IndustryRule,
}

const EXPOSED_INDUSTRY: IndustryRule = IndustryRule::Exposed {
    normal: 1.5,
    blockaded: 0.2,
};

static SEA_POWER: ArchetypeProfile = ArchetypeProfile {
    id: AgentId(1),
    base_name: "UK",
    display_name: "UK (Sea)",
    strategy: Strategy {
        navy: 0.6,
        merchant: 0.3,
        industry: 0.1,
    },
    fixed_burden: None,
    industry: EXPOSED_INDUSTRY,
};

static LAND_POWER: ArchetypeProfile = ArchetypeProfile {
    id: AgentId(2),
    base_name: "Germany",
    display_name: "Germany (Land)",
    strategy: Strategy {
        navy: 0.3,
        merchant: 0.2,
        industry: 0.5,
    },
    fixed_burden: None,
    industry: IndustryRule::Insulated(4.0),
};

static TRADE_POWER: ArchetypeProfile = ArchetypeProfile {
    id: AgentId(3),
    base_name: "Netherlands",
    display_name: "Netherlands",
    strategy: Strategy {
        navy: 0.1,
        merchant: 0.8,
        industry: 0.1,
    },
    fixed_burden: Some(0.1),
    industry: EXPOSED_INDUSTRY,
};

impl Archetype {
    pub fn profile(self) -> &'static ArchetypeProfile {
        match self {
            Archetype::SeaPower => &SEA_POWER,
            Archetype::LandPower => &LAND_POWER,
            Archetype::TradePower => &TRADE_POWER,
        }
    }
}
