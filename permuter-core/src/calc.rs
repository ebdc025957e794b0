//! Seed derivation: pure functions from a group seed to the seeds used
//! at each generation step.
//!
//! A respawn batch reads two draws per despawned slot (the slot seed and
//! the alpha-move seed) and one more draw for the next group seed. Ghost
//! slots — despawns past the end of the reserve — burn their draws all
//! the same.

use crate::advance::Advance;
use crate::rng::Xoroshiro128Plus;

/// The field holds at most four entities of a spawn group at once.
pub const FIELD_CAPACITY: usize = 4;

/// Group seed after one respawn batch of `despawned` slots.
pub fn advance_seed(seed: u64, despawned: usize) -> u64 {
    let mut rng = Xoroshiro128Plus::new(seed);
    for _ in 0..despawned {
        rng.next(); // slot seed
        rng.next(); // alpha-move seed
    }
    rng.next()
}

/// Group seed after the initial capacity fill and the given advance
/// sequence, in order. `SB` contributes no batch.
pub fn group_seed(seed: u64, advances: &[Advance]) -> u64 {
    let mut seed = advance_seed(seed, FIELD_CAPACITY);
    for advance in advances {
        let count = advance.despawn_count();
        if count != 0 {
            seed = advance_seed(seed, count);
        }
    }
    seed
}

/// Seed handed to the `index`-th slot (1-based) of the batch spawned
/// from `group_seed`.
pub fn generate_seed(group_seed: u64, index: usize) -> u64 {
    let mut rng = Xoroshiro128Plus::new(group_seed);
    let mut slot_seed = 0;
    for _ in 0..index {
        slot_seed = rng.next();
        rng.next();
    }
    slot_seed
}

/// Seed that actually drives attribute generation for that slot: from
/// the slot seed, skip the encounter roll and take the next draw.
pub fn entity_seed(group_seed: u64, index: usize) -> u64 {
    let mut rng = Xoroshiro128Plus::new(generate_seed(group_seed, index));
    rng.next(); // encounter slot roll
    rng.next()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::advance::Advance::{A1, A2, A3};

    #[test]
    fn advance_seed_matches_reference() {
        assert_eq!(advance_seed(0x1234_5678_9ABC_DEF0, 1), 0x57D7_2985_D8F0_30C6);
    }

    #[test]
    fn generate_seed_matches_reference() {
        assert_eq!(
            generate_seed(0x1234_5678_9ABC_DEF0, 1),
            0x94D7_07ED_BD5A_494B
        );
        assert_eq!(
            generate_seed(0x1234_5678_9ABC_DEF0, 4),
            0x4973_C4D8_A1B6_BD12
        );
    }

    #[test]
    fn entity_seed_matches_reference() {
        assert_eq!(
            entity_seed(0x1234_5678_9ABC_DEF0, 1),
            0x4634_D519_C5FA_C72A
        );
    }

    #[test]
    fn group_seed_folds_fill_and_tokens() {
        let root = 12880307074085126207;
        assert_eq!(advance_seed(root, FIELD_CAPACITY), 0xE63F_E138_4113_30D5);
        let group = group_seed(root, &[A2, A1, A3]);
        assert_eq!(group, 0x39AF_DCE2_D70B_B622);
        // The vector the whole pipeline hangs off.
        assert_eq!(entity_seed(group, 2), 0xC509_32B4_28A7_34FD);
    }

    #[test]
    fn derivation_is_pure() {
        let root = 0xABCD_EF01_2345_6789;
        let a = group_seed(root, &[A1, A2]);
        let b = group_seed(root, &[A1, A2]);
        assert_eq!(a, b);
        // Different orderings of the same despawn total diverge.
        assert_ne!(group_seed(root, &[A1, A2]), group_seed(root, &[A2, A1]));
    }
}
