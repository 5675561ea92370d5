//! Per-step time series of each nation's total power and navy
//!
//! Purely an observer: the model appends after every step and never reads it.

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::core::types::{AgentId, Step};
use crate::model::nation::Nation;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Metric {
    TotalPower,
    Navy,
}

/// One nation's reading after one step
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AgentRecord {
    pub step: Step,
    pub agent: AgentId,
    pub total_power: f64,
    pub navy: f64,
}

impl AgentRecord {
    pub fn get(&self, metric: Metric) -> f64 {
        match metric {
            Metric::TotalPower => self.total_power,
            Metric::Navy => self.navy,
        }
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct TimeSeries {
    pub records: Vec<AgentRecord>,
}

impl TimeSeries {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn collect(&mut self, step: Step, nations: &[Nation]) {
        self.records.extend(nations.iter().map(|n| AgentRecord {
            step,
            agent: n.id,
            total_power: n.total_power(),
            navy: n.navy,
        }));
    }

    /// One nation's column, in step order
    pub fn series(&self, agent: AgentId, metric: Metric) -> Vec<f64> {
        self.records
            .iter()
            .filter(|r| r.agent == agent)
            .map(|r| r.get(metric))
            .collect()
    }

    /// Every nation's column
    pub fn by_agent(&self, metric: Metric) -> AHashMap<AgentId, Vec<f64>> {
        let mut columns: AHashMap<AgentId, Vec<f64>> = AHashMap::new();
        for record in &self.records {
            columns.entry(record.agent).or_default().push(record.get(metric));
        }
        columns
    }

    pub fn steps_recorded(&self) -> usize {
        self.records.iter().map(|r| r.step).max().map_or(0, |s| s as usize + 1)
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::Archetype;

    #[test]
    fn test_collect_and_pivot() {
        let mut nations: Vec<Nation> = Archetype::ALL.iter().map(|&a| Nation::new(a, 0.5)).collect();
        let mut series = TimeSeries::new();

        series.collect(0, &nations);
        nations[0].navy = 30.0;
        series.collect(1, &nations);

        assert_eq!(series.records.len(), 6);
        assert_eq!(series.steps_recorded(), 2);
        assert_eq!(series.series(AgentId(1), Metric::Navy), vec![20.0, 30.0]);
        assert_eq!(series.series(AgentId(2), Metric::Navy), vec![20.0, 20.0]);

        let columns = series.by_agent(Metric::TotalPower);
        assert_eq!(columns.len(), 3);
        assert_eq!(columns[&AgentId(3)].len(), 2);
    }
}
