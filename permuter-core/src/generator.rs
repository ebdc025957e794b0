//! Entity generation: one seed in, one fully-specified spawn out.
//!
//! The draw order is fixed by the target hardware: encounter slot roll,
//! generation seed, level, then from a fresh rng on the generation seed
//! the EC, fake TID, bounded PID/shiny rolls, IVs, ability, gender,
//! nature and size bytes.

use crate::behavior;
use crate::encounters::{self, EncounterTable};
use crate::rng::Xoroshiro128Plus;
use crate::spawn::SpawnType;
use crate::species;
use crate::{PermuteError, Result};

/// Sentinel for an IV that has not been assigned yet.
pub const IV_UNSET: u8 = u8::MAX;

const SHINY_XOR_THRESHOLD: u32 = 16;
const MAX_U32: u64 = 0xFFFF_FFFF;

/// Everything known about one generated spawn. Built in a single step
/// by the generator and read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityResult {
    pub species: u16,
    pub form: u16,
    pub name: String,

    // Seed trail. All derived, never independently chosen.
    pub group_seed: u64,
    pub index: usize,
    pub slot_seed: u64,
    pub gen_seed: u64,
    pub alpha_seed: u64,

    pub level: u8,
    pub ec: u32,
    pub fake_tid: u32,
    pub pid: u32,
    pub ivs: [u8; 6],
    pub ability: u8,
    pub gender: u8,
    pub nature: u8,
    pub height: u8,
    pub weight: u8,

    pub is_shiny: bool,
    /// 0 means a square shiny, anything below the threshold a star.
    pub shiny_xor: u32,
    pub roll_count_used: usize,
    pub roll_count_allowed: usize,
    pub is_alpha: bool,
}

impl EntityResult {
    pub fn is_skittish(&self) -> bool {
        behavior::is_skittish(self.species)
    }

    pub fn is_oblivious(&self) -> bool {
        behavior::is_oblivious(self.species)
    }

    /// Whether the entity can be engaged head-on with others around.
    pub fn is_aggressive(&self) -> bool {
        self.is_alpha || !(self.is_skittish() || self.is_oblivious())
    }

    pub fn flawless_count(&self) -> usize {
        self.ivs.iter().filter(|&&iv| iv == 31).count()
    }
}

/// Where within its group a slot seed came from.
#[derive(Debug, Copy, Clone, Default)]
pub struct SlotOrigin {
    pub group_seed: u64,
    pub index: usize,
    pub alpha_seed: u64,
}

/// Generates the entity a slot seed produces against a known table.
pub fn generate(seed: u64, table: u64, spawn_type: SpawnType) -> Result<EntityResult> {
    let table = encounters::table(table).ok_or(PermuteError::UnknownTable(table))?;
    Ok(generate_in(seed, table, spawn_type, SlotOrigin::default()))
}

pub(crate) fn generate_in(
    seed: u64,
    table: &EncounterTable,
    spawn_type: SpawnType,
    origin: SlotOrigin,
) -> EntityResult {
    let mut rng = Xoroshiro128Plus::new(seed);
    let roll = rng.next_float(table.rate_total as f64);
    let slot = table.find(roll);
    let gen_seed = rng.next();
    let level = if slot.level_max > slot.level_min {
        let span = (slot.level_max - slot.level_min) as u64 + 1;
        slot.level_min + rng.next_max(span) as u8
    } else {
        slot.level_min
    };

    let mut attr = Xoroshiro128Plus::new(gen_seed);
    let ec = attr.next_max(MAX_U32) as u32;
    let fake_tid = attr.next_max(MAX_U32) as u32;

    let roll_count_allowed = spawn_type.shiny_rolls();
    let mut pid = 0u32;
    let mut shiny_xor = 0u32;
    let mut is_shiny = false;
    let mut roll_count_used = roll_count_allowed;
    for roll_count in 1..=roll_count_allowed {
        pid = attr.next_max(MAX_U32) as u32;
        shiny_xor = (pid >> 16) ^ (pid & 0xFFFF) ^ (fake_tid >> 16) ^ (fake_tid & 0xFFFF);
        if shiny_xor < SHINY_XOR_THRESHOLD {
            is_shiny = true;
            roll_count_used = roll_count;
            break;
        }
    }

    let mut ivs = [IV_UNSET; 6];
    for _ in 0..slot.flawless_ivs {
        let mut index = attr.next_max(6) as usize;
        while ivs[index] != IV_UNSET {
            index = attr.next_max(6) as usize;
        }
        ivs[index] = 31;
    }
    for iv in ivs.iter_mut() {
        if *iv == IV_UNSET {
            *iv = attr.next_max(32) as u8;
        }
    }

    let ability = attr.next_max(2) as u8;
    let gender = match species::gender_ratio(slot.species) {
        255 => 2,
        254 => 1,
        0 => 0,
        ratio => u8::from((attr.next_max(253) as u8 + 1) < ratio),
    };
    let nature = attr.next_max(25) as u8;
    let height = (attr.next_max(0x81) + attr.next_max(0x80)) as u8;
    let weight = (attr.next_max(0x81) + attr.next_max(0x80)) as u8;

    EntityResult {
        species: slot.species,
        form: slot.form,
        name: species::name(slot.species),
        group_seed: origin.group_seed,
        index: origin.index,
        slot_seed: seed,
        gen_seed,
        alpha_seed: origin.alpha_seed,
        level,
        ec,
        fake_tid,
        pid,
        ivs,
        ability,
        gender,
        nature,
        height,
        weight,
        is_shiny,
        shiny_xor,
        roll_count_used,
        roll_count_allowed,
        is_alpha: slot.alpha,
    }
}
