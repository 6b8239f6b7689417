//! Simulation parameters.
//!
//! The defaults reproduce the fixed ruleset: a budget of 1,000,000,000
//! units, draw costs of 200/210/220/230 that reset on every shuffle, and the
//! standard rarity thresholds. Tests build smaller configs directly.

use std::ops::Index;

use crate::cards::{HAND_SIZE, PITY_RETRY_CAP};
use crate::error::ConfigError;
use crate::rarity::RarityTable;

pub const INITIAL_BUDGET: u64 = 1_000_000_000;
pub const DRAW_COSTS: [u64; HAND_SIZE] = [200, 210, 220, 230];

/// Cost of drawing each position of the current card set.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CostSchedule(pub [u64; HAND_SIZE]);

impl Default for CostSchedule {
    fn default() -> Self {
        Self(DRAW_COSTS)
    }
}

impl CostSchedule {
    pub fn first(&self) -> u64 {
        self.0[0]
    }

    pub fn iter(&self) -> impl Iterator<Item = u64> + '_ {
        self.0.iter().copied()
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.0.iter().position(|cost| *cost == 0) {
            Some(position) => Err(ConfigError::ZeroCost { position }),
            None => Ok(()),
        }
    }
}

impl Index<usize> for CostSchedule {
    type Output = u64;

    fn index(&self, position: usize) -> &u64 {
        &self.0[position]
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SimConfig {
    pub initial_budget: u64,
    pub costs: CostSchedule,
    pub table: RarityTable,
    pub pity_retry_cap: u32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            initial_budget: INITIAL_BUDGET,
            costs: CostSchedule::default(),
            table: RarityTable::default(),
            pity_retry_cap: PITY_RETRY_CAP,
        }
    }
}

impl SimConfig {
    pub fn with_budget(initial_budget: u64) -> Self {
        Self {
            initial_budget,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.costs.validate()?;
        self.table.validate()?;
        if self.pity_retry_cap == 0 {
            return Err(ConfigError::ZeroRetryCap);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_ruleset() {
        let config = SimConfig::default();

        assert_eq!(config.initial_budget, 1_000_000_000);
        assert_eq!(config.costs.iter().collect::<Vec<_>>(), vec![200, 210, 220, 230]);
        assert_eq!(config.costs.first(), 200);
        assert_eq!(config.costs[3], 230);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_zero_cost_rejected() {
        let config = SimConfig {
            costs: CostSchedule([200, 0, 220, 230]),
            ..SimConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroCost { position: 1 }));
    }

    #[test]
    fn test_zero_retry_cap_rejected() {
        let config = SimConfig {
            pity_retry_cap: 0,
            ..SimConfig::with_budget(1_000)
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroRetryCap));
    }
}
