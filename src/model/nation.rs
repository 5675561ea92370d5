//! Nation - one agent's economic and naval state and its yearly update

use serde::{Deserialize, Serialize};

use crate::core::types::{AgentId, Archetype};

pub const STARTING_WEALTH: f64 = 500.0;
pub const STARTING_INDUSTRY: f64 = 120.0;
pub const STARTING_MERCHANT_FLEET: f64 = 50.0;
pub const STARTING_NAVY: f64 = 20.0;

/// Income per merchant ship before trade efficiency
pub const TRADE_INCOME_PER_SHIP: f64 = 2.0;
pub const TRADE_EFFICIENCY_CONTROL: f64 = 2.0;
pub const TRADE_EFFICIENCY_BLOCKADED: f64 = 0.05;
pub const TRADE_EFFICIENCY_CONTESTED: f64 = 0.8;

/// Wealth at or below which no investment happens
pub const SUBSISTENCE_FLOOR: f64 = 10.0;
/// Share of wealth reserved for investment each step
pub const INVESTMENT_RATE: f64 = 0.4;

// Build cost per unit of capacity
pub const INDUSTRY_COST: f64 = 40.0;
pub const MERCHANT_COST: f64 = 8.0;
pub const NAVY_COST: f64 = 15.0;

// Upkeep per unit per step
pub const NAVY_UPKEEP: f64 = 0.8;
pub const MERCHANT_UPKEEP: f64 = 0.2;

// Asset valuation used by total power
pub const INDUSTRY_VALUE: f64 = 5.0;
pub const NAVY_VALUE: f64 = 15.0;
pub const SHIP_VALUE: f64 = 2.0;
pub const SHIP_VALUE_BLOCKADED: f64 = 0.2;

/// Relative investment shares. Need not sum to 1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Strategy {
    pub navy: f64,
    pub merchant: f64,
    pub industry: f64,
}

/// A nation agent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Nation {
    pub id: AgentId,
    pub name: String,
    pub archetype: Archetype,
    pub strategy: Strategy,
    /// Fraction of the investment budget lost to land defense, in [0, 1]
    pub land_security_burden: f64,

    pub wealth: f64,
    pub industry: f64,
    pub merchant_fleet: f64,
    pub navy: f64,

    // Recomputed by the model every step
    pub has_sea_control: bool,
    pub is_blockaded: bool,
}

impl Nation {
    /// Create a nation at the common starting position.
    ///
    /// `land_security_burden` is ignored for archetypes with a fixed burden.
    pub fn new(archetype: Archetype, land_security_burden: f64) -> Self {
        let profile = archetype.profile();

        Self {
            id: profile.id,
            name: profile.display_name.to_string(),
            archetype,
            strategy: profile.strategy,
            land_security_burden: profile.fixed_burden.unwrap_or(land_security_burden),
            wealth: STARTING_WEALTH,
            industry: STARTING_INDUSTRY,
            merchant_fleet: STARTING_MERCHANT_FLEET,
            navy: STARTING_NAVY,
            has_sea_control: false,
            is_blockaded: false,
        }
    }

    /// Advance one step: income, then investment, then upkeep.
    pub fn step(&mut self) {
        self.economic_cycle();
        self.invest();
        self.pay_maintenance();
    }

    pub fn industrial_multiplier(&self) -> f64 {
        self.archetype.profile().industry.multiplier(self.is_blockaded)
    }

    pub fn trade_efficiency(&self) -> f64 {
        if self.has_sea_control {
            TRADE_EFFICIENCY_CONTROL
        } else if self.is_blockaded {
            TRADE_EFFICIENCY_BLOCKADED
        } else {
            TRADE_EFFICIENCY_CONTESTED
        }
    }

    /// Market value of one merchant ship
    pub fn ship_value(&self) -> f64 {
        if self.is_blockaded {
            SHIP_VALUE_BLOCKADED
        } else {
            SHIP_VALUE
        }
    }

    /// Wealth plus the valued stock of industry, navy and merchant ships
    pub fn total_power(&self) -> f64 {
        self.wealth
            + self.industry * INDUSTRY_VALUE
            + self.navy * NAVY_VALUE
            + self.merchant_fleet * self.ship_value()
    }

    fn economic_cycle(&mut self) {
        let base_income = self.industry * self.industrial_multiplier();
        let trade_income = self.merchant_fleet * TRADE_INCOME_PER_SHIP * self.trade_efficiency();
        self.wealth += base_income + trade_income;
    }

    fn invest(&mut self) {
        if self.wealth <= SUBSISTENCE_FLOOR {
            return;
        }

        let budget = self.wealth * INVESTMENT_RATE;
        self.wealth -= budget;
        let net_budget = budget * (1.0 - self.land_security_burden);

        // Only whole units get built; remainders are discarded
        self.industry += (net_budget * self.strategy.industry / INDUSTRY_COST).floor();
        self.merchant_fleet += (net_budget * self.strategy.merchant / MERCHANT_COST).floor();
        self.navy += (net_budget * self.strategy.navy / NAVY_COST).floor();
    }

    fn pay_maintenance(&mut self) {
        let cost = self.navy * NAVY_UPKEEP + self.merchant_fleet * MERCHANT_UPKEEP;
        self.wealth = (self.wealth - cost).max(0.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_new_nation_starting_values() {
        let nation = Nation::new(Archetype::SeaPower, 0.05);
        assert_eq!(nation.id, AgentId(1));
        assert_eq!(nation.name, "UK (Sea)");
        assert_eq!(nation.wealth, 500.0);
        assert_eq!(nation.industry, 120.0);
        assert_eq!(nation.merchant_fleet, 50.0);
        assert_eq!(nation.navy, 20.0);
        assert!(!nation.has_sea_control);
        assert!(!nation.is_blockaded);
    }

    #[test]
    fn test_trade_power_ignores_supplied_burden() {
        let nation = Nation::new(Archetype::TradePower, 0.9);
        assert_eq!(nation.land_security_burden, 0.1);
    }

    #[test]
    fn test_economic_cycle_contested() {
        let mut nation = Nation::new(Archetype::SeaPower, 0.05);
        nation.economic_cycle();
        // 120 * 1.5 + 50 * 2 * 0.8
        assert!(approx(nation.wealth, 500.0 + 180.0 + 80.0));
    }

    #[test]
    fn test_economic_cycle_blockaded_exposed_industry() {
        let mut nation = Nation::new(Archetype::TradePower, 0.1);
        nation.is_blockaded = true;
        nation.economic_cycle();
        // 120 * 0.2 + 50 * 2 * 0.05
        assert!(approx(nation.wealth, 500.0 + 24.0 + 5.0));
    }

    #[test]
    fn test_land_power_industry_unaffected_by_blockade() {
        let mut free = Nation::new(Archetype::LandPower, 0.5);
        let mut blockaded = free.clone();
        blockaded.is_blockaded = true;

        assert_eq!(free.industrial_multiplier(), 4.0);
        assert_eq!(blockaded.industrial_multiplier(), 4.0);

        free.economic_cycle();
        blockaded.economic_cycle();
        // Only trade income differs: 50 * 2 * (0.8 - 0.05)
        assert!(approx(free.wealth - blockaded.wealth, 75.0));
    }

    #[test]
    fn test_sea_control_trade_efficiency() {
        let mut nation = Nation::new(Archetype::SeaPower, 0.05);
        nation.has_sea_control = true;
        assert_eq!(nation.trade_efficiency(), 2.0);
        nation.economic_cycle();
        assert!(approx(nation.wealth, 500.0 + 180.0 + 200.0));
    }

    #[test]
    fn test_invest_floors_each_allocation() {
        let mut nation = Nation::new(Archetype::LandPower, 0.5);
        nation.wealth = 1060.0;
        nation.invest();
        // budget 424, net 212: industry +2 (2.65), merchant +5 (5.3), navy +4 (4.24)
        assert!(approx(nation.wealth, 636.0));
        assert_eq!(nation.industry, 122.0);
        assert_eq!(nation.merchant_fleet, 55.0);
        assert_eq!(nation.navy, 24.0);
    }

    #[test]
    fn test_invest_skipped_at_subsistence_floor() {
        let mut nation = Nation::new(Archetype::SeaPower, 0.05);
        nation.wealth = 10.0;
        nation.invest();
        assert_eq!(nation.wealth, 10.0);
        assert_eq!(nation.navy, 20.0);
        assert_eq!(nation.industry, 120.0);
    }

    #[test]
    fn test_full_burden_consumes_budget_without_building() {
        let mut nation = Nation::new(Archetype::SeaPower, 1.0);
        nation.wealth = 1000.0;
        nation.invest();
        assert!(approx(nation.wealth, 600.0));
        assert_eq!(nation.navy, 20.0);
        assert_eq!(nation.merchant_fleet, 50.0);
    }

    #[test]
    fn test_maintenance_clamps_wealth_at_zero() {
        let mut nation = Nation::new(Archetype::SeaPower, 0.05);
        nation.wealth = 5.0;
        nation.pay_maintenance();
        assert_eq!(nation.wealth, 0.0);
    }

    #[test]
    fn test_maintenance_cost() {
        let mut nation = Nation::new(Archetype::SeaPower, 0.05);
        nation.pay_maintenance();
        // 20 * 0.8 + 50 * 0.2
        assert!(approx(nation.wealth, 474.0));
    }

    #[test]
    fn test_total_power_depends_on_blockade() {
        let mut nation = Nation::new(Archetype::SeaPower, 0.05);
        // 500 + 600 + 300 + 100
        assert!(approx(nation.total_power(), 1500.0));
        nation.is_blockaded = true;
        // merchant ships lose value: 50 * 0.2
        assert!(approx(nation.total_power(), 1410.0));
    }
}
