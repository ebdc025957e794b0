//! Encounter tables: which species an opaque table hash can produce,
//! at what rate, and whether the slot is an alpha.
//!
//! The data ships as an embedded JSON resource and is parsed once into
//! an immutable map on first use.

use std::collections::HashMap;
use std::sync::LazyLock;

use serde::Deserialize;

/// One entry of an encounter table.
#[derive(Debug, Clone, Deserialize)]
pub struct EncounterSlot {
    pub species: u16,
    #[serde(default)]
    pub form: u16,
    pub rate: u32,
    #[serde(default)]
    pub alpha: bool,
    #[serde(default)]
    pub flawless_ivs: usize,
    pub level_min: u8,
    pub level_max: u8,
}

#[derive(Debug, Clone)]
pub struct EncounterTable {
    pub slots: Vec<EncounterSlot>,
    pub rate_total: u32,
}

impl EncounterTable {
    /// Slot selection by cumulative rate. `roll` comes from the slot
    /// rng's float draw over `rate_total`.
    pub fn find(&self, roll: f64) -> &EncounterSlot {
        let mut acc = 0.0;
        for slot in &self.slots {
            acc += slot.rate as f64;
            if roll < acc {
                return slot;
            }
        }
        self.slots.last().expect("encounter tables are never empty")
    }
}

static TABLES: LazyLock<HashMap<u64, EncounterTable>> = LazyLock::new(|| {
    let raw: HashMap<String, Vec<EncounterSlot>> =
        serde_json::from_str(include_str!("../resources/encounters.json"))
            .expect("embedded encounter data is well-formed");
    raw.into_iter()
        .map(|(hash, slots)| {
            let hash = u64::from_str_radix(hash.trim_start_matches("0x"), 16)
                .expect("embedded table hash is hex");
            let rate_total = slots.iter().map(|slot| slot.rate).sum();
            (hash, EncounterTable { slots, rate_total })
        })
        .collect()
});

pub fn table(hash: u64) -> Option<&'static EncounterTable> {
    TABLES.get(&hash)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_tables_load() {
        let table = table(0x8571_4105_CF34_8588).expect("table present");
        assert_eq!(table.rate_total, 100);
        assert_eq!(table.slots.len(), 3);
        assert!(super::table(0xFFFF_FFFF_FFFF_FFFF).is_none());
    }

    #[test]
    fn cumulative_slot_selection() {
        let table = table(0x8AE0_881E_5F93_9184).unwrap();
        assert_eq!(table.find(0.0).species, 444);
        assert_eq!(table.find(69.9).species, 444);
        let garchomp = table.find(70.1);
        assert_eq!(garchomp.species, 445);
        assert!(!garchomp.alpha);
        let alpha = table.find(99.7);
        assert!(alpha.alpha);
        assert_eq!(alpha.flawless_ivs, 3);
    }
}
