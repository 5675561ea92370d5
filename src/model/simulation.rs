//! Main simulation loop

use std::time::Instant;

use tracing::info;

use crate::core::config::ScenarioConfig;
use crate::model::output::SimulationOutput;
use crate::model::world::SeaPowerModel;

/// Run a whole scenario and collect its output
pub fn simulate(config: &ScenarioConfig) -> SimulationOutput {
    simulate_with(config, |_| {})
}

/// Run a whole scenario, handing the model to `observe` after every step
pub fn simulate_with(config: &ScenarioConfig, mut observe: impl FnMut(&SeaPowerModel)) -> SimulationOutput {
    let start = Instant::now();

    let mut model = SeaPowerModel::from_config(config);
    let mut sea_states = Vec::with_capacity(config.steps as usize);

    info!(
        land_power_burden = config.land_power_burden,
        sea_power_burden = config.sea_power_burden,
        steps = config.steps,
        "starting simulation"
    );

    for _ in 0..config.steps {
        model.step();
        sea_states.push(model.sea_state());
        observe(&model);
    }

    SimulationOutput::new(&model, &sea_states, start.elapsed())
}
