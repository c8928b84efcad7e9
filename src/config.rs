//! Tunable battle rules, loaded from RON.

use crate::errors::{DataError, DataResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BattleConfig {
    /// Creatures a party holds before catches overflow to the computer.
    pub party_limit: usize,
    /// A flee roll strictly below this escapes.
    pub flee_threshold: i64,
    /// Percent chance per turn that an opponent with spare creatures switches.
    pub opponent_switch_chance: u32,
    /// Invalid replies tolerated for one prompt before giving up. 0 re-prompts forever.
    pub max_prompt_attempts: u32,
}

impl Default for BattleConfig {
    fn default() -> Self {
        Self {
            party_limit: 6,
            flee_threshold: 60,
            opponent_switch_chance: 20,
            max_prompt_attempts: 0,
        }
    }
}

impl BattleConfig {
    pub fn load(path: &Path) -> DataResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| DataError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::from_ron_str(&content)
    }

    pub fn from_ron_str(content: &str) -> DataResult<Self> {
        let config: BattleConfig =
            ron::from_str(content).map_err(|e| DataError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> DataResult<()> {
        if self.party_limit == 0 {
            return Err(DataError::InvalidConfig(
                "party_limit must be at least 1".to_string(),
            ));
        }
        if self.opponent_switch_chance > 100 {
            return Err(DataError::InvalidConfig(format!(
                "opponent_switch_chance is a percentage, got {}",
                self.opponent_switch_chance
            )));
        }
        Ok(())
    }
}
