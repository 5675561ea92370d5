//! Property tests for the model invariants over arbitrary burdens and run lengths

use proptest::prelude::*;

use seapower::core::types::{Archetype, SeaState};
use seapower::model::systems::determine_sea_control;
use seapower::model::SeaPowerModel;

fn check_step_invariants(model: &SeaPowerModel) -> Result<(), TestCaseError> {
    let nations = model.nations();

    for nation in nations {
        prop_assert!(nation.wealth >= 0.0, "{} wealth {}", nation.name, nation.wealth);
        prop_assert!(nation.navy >= 0.0);
        // Only whole factories and merchant ships are ever built
        prop_assert_eq!(nation.industry.fract(), 0.0);
        prop_assert_eq!(nation.merchant_fleet.fract(), 0.0);
        prop_assert!(!(nation.has_sea_control && nation.is_blockaded));
    }

    let controllers: Vec<_> = nations.iter().filter(|n| n.has_sea_control).collect();
    prop_assert!(controllers.len() <= 1);

    match model.sea_state() {
        SeaState::Dominated(archetype) => {
            prop_assert_eq!(controllers.len(), 1);
            prop_assert_eq!(controllers[0].archetype, archetype);
            for nation in nations.iter().filter(|n| !n.has_sea_control) {
                prop_assert!(nation.is_blockaded);
            }
        }
        SeaState::Contested => {
            prop_assert!(nations.iter().all(|n| !n.has_sea_control && !n.is_blockaded));
        }
    }

    let land_power = model.nation(Archetype::LandPower).unwrap();
    prop_assert_eq!(land_power.industrial_multiplier(), 4.0);

    Ok(())
}

proptest! {
    #[test]
    fn invariants_hold_every_step(
        land_burden in 0.0f64..=1.0,
        sea_burden in 0.0f64..=1.0,
        steps in 1u32..80,
    ) {
        let mut model = SeaPowerModel::new(land_burden, sea_burden);
        for _ in 0..steps {
            model.step();
            check_step_invariants(&model)?;
        }
    }

    #[test]
    fn sea_state_is_a_function_of_pre_step_navies(
        land_burden in 0.0f64..=1.0,
        sea_burden in 0.0f64..=1.0,
        steps in 0u32..40,
    ) {
        let mut model = SeaPowerModel::new(land_burden, sea_burden);
        model.run(steps);

        let before: Vec<f64> = model.nations().iter().map(|n| n.navy).collect();
        let expected = determine_sea_control(model.nations());
        model.step();

        prop_assert_eq!(model.sea_state(), expected.state);

        if expected.state == SeaState::Contested {
            // The top two fleets decay before investment, so they end the
            // step at 0.95x their old size plus whole ships built
            for &i in &expected.attrition {
                let built = model.nations()[i].navy - before[i] * 0.95;
                prop_assert!(built >= -1e-9);
                prop_assert!((built - built.round()).abs() < 1e-6);
            }
        }
    }

    #[test]
    fn split_runs_match_single_run(
        land_burden in 0.0f64..=1.0,
        sea_burden in 0.0f64..=1.0,
        first in 0u32..30,
        second in 0u32..30,
    ) {
        let mut whole = SeaPowerModel::new(land_burden, sea_burden);
        whole.run(first + second);

        let mut split = SeaPowerModel::new(land_burden, sea_burden);
        split.run(first);
        split.run(second);

        prop_assert_eq!(whole.nations(), split.nations());
        prop_assert_eq!(whole.sea_state(), split.sea_state());
    }
}
