//! Spawn group descriptions: the searchable record and the user-authored
//! JSON descriptor it can be loaded from.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{PermuteError, Result};

/// Which generation ruleset applies to a spawn group. The value decides
/// the shiny roll budget and whether a bonus wave is legal.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpawnType {
    Standard,
    Outbreak,
    MassiveOutbreak,
}

impl SpawnType {
    /// PID re-rolls granted per generated entity before the shiny check
    /// gives up.
    pub fn shiny_rolls(self) -> usize {
        match self {
            SpawnType::Standard => 7,
            SpawnType::Outbreak => 26,
            SpawnType::MassiveOutbreak => 13,
        }
    }

    pub fn allows_bonus(self) -> bool {
        matches!(self, SpawnType::MassiveOutbreak)
    }
}

/// Immutable description of one spawn group to search.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct SpawnInfo {
    pub base_count: usize,
    pub base_table: u64,
    pub bonus_count: usize,
    pub bonus_table: u64,
    pub spawn_type: SpawnType,
}

impl SpawnInfo {
    pub fn total_slots(&self) -> usize {
        self.base_count + self.bonus_count
    }
}

/// User-authored spawn descriptor, serialized with the same field names
/// the companion save-reader emits.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UserSpawnInfo {
    pub species: u16,
    /// Decimal or `0x`-prefixed hex.
    pub seed: String,
    pub base_count: usize,
    pub base_table: String,
    pub bonus_count: usize,
    pub bonus_table: String,
}

impl UserSpawnInfo {
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        serde_json::from_str(&text)
            .map_err(|err| PermuteError::InvalidDescriptor(err.to_string()))
    }

    pub fn seed(&self) -> Result<u64> {
        parse_u64(&self.seed)
    }

    pub fn spawn(&self) -> Result<SpawnInfo> {
        Ok(SpawnInfo {
            base_count: self.base_count,
            base_table: parse_u64(&self.base_table)?,
            bonus_count: self.bonus_count,
            bonus_table: parse_u64(&self.bonus_table)?,
            spawn_type: if self.bonus_count > 0 {
                SpawnType::MassiveOutbreak
            } else {
                SpawnType::Outbreak
            },
        })
    }
}

fn parse_u64(text: &str) -> Result<u64> {
    let text = text.trim();
    let parsed = match text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
        Some(hex) => u64::from_str_radix(hex, 16),
        None => text.parse(),
    };
    parsed.map_err(|_| {
        PermuteError::InvalidDescriptor(format!("not a 64-bit integer: {text:?}"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn descriptor() -> UserSpawnInfo {
        UserSpawnInfo {
            species: 444,
            seed: "12880307074085126207".to_string(),
            base_count: 9,
            base_table: "0x85714105CF348588".to_string(),
            bonus_count: 7,
            bonus_table: "0x8AE0881E5F939184".to_string(),
        }
    }

    #[test]
    fn parses_decimal_and_hex_seeds() {
        let mut user = descriptor();
        assert_eq!(user.seed().unwrap(), 12880307074085126207);
        user.seed = "0xB2C2...".to_string();
        assert!(user.seed().is_err());
        user.seed = "0xDEADBABEBEEFCAFE".to_string();
        assert_eq!(user.seed().unwrap(), 0xDEAD_BABE_BEEF_CAFE);
    }

    #[test]
    fn converts_to_spawn_info() {
        let spawn = descriptor().spawn().unwrap();
        assert_eq!(spawn.base_count, 9);
        assert_eq!(spawn.base_table, 0x8571_4105_CF34_8588);
        assert_eq!(spawn.bonus_count, 7);
        assert_eq!(spawn.bonus_table, 0x8AE0_881E_5F93_9184);
        assert_eq!(spawn.spawn_type, SpawnType::MassiveOutbreak);
        assert_eq!(spawn.total_slots(), 16);
    }

    #[test]
    fn descriptor_round_trips_pascal_case() {
        let json = r#"{
            "Species": 50,
            "Seed": "16045690984503098110",
            "BaseCount": 10,
            "BaseTable": "0x112210F47DE98115",
            "BonusCount": 0,
            "BonusTable": "0x0000000000000000"
        }"#;
        let user: UserSpawnInfo = serde_json::from_str(json).unwrap();
        assert_eq!(user.species, 50);
        let spawn = user.spawn().unwrap();
        assert_eq!(spawn.spawn_type, SpawnType::Outbreak);
        assert_eq!(spawn.bonus_table, 0);
        let back = serde_json::to_string(&user).unwrap();
        assert!(back.contains("\"BaseCount\":10"));
    }

    #[test]
    fn shiny_roll_budgets() {
        assert_eq!(SpawnType::Standard.shiny_rolls(), 7);
        assert_eq!(SpawnType::Outbreak.shiny_rolls(), 26);
        assert_eq!(SpawnType::MassiveOutbreak.shiny_rolls(), 13);
    }
}
