//! Spawn-group seed permutation: bit-exact reconstruction of the
//! spawner rng pipeline plus an exhaustive search over the advance
//! sequences a player can perform, reporting the spawns worth chasing.

use thiserror::Error;

pub mod advance;
pub mod behavior;
pub mod calc;
pub mod encounters;
pub mod generator;
pub mod permuter;
pub mod report;
pub mod rng;
pub mod spawn;
pub mod species;

pub use advance::Advance;
pub use behavior::{FeasibilityRule, Temperament};
pub use generator::{generate, EntityResult};
pub use permuter::{permute, permute_all, permute_with, PermuteEntry, PermuteResult, SearchCriteria};
pub use rng::Xoroshiro128Plus;
pub use spawn::{SpawnInfo, SpawnType, UserSpawnInfo};

#[derive(Debug, Error)]
pub enum PermuteError {
    #[error("spawn group has no slots to search")]
    EmptySpawnGroup,
    #[error("no encounter table for hash {0:#018X}")]
    UnknownTable(u64),
    #[error("bonus wave is only valid for massive outbreaks")]
    BonusNotAllowed,
    #[error("invalid spawn descriptor: {0}")]
    InvalidDescriptor(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PermuteError>;
