//! Species temperament: static membership tables and the rule deciding
//! which temperaments make a multi-advance unobtainable.

use crate::generator::EntityResult;

/// Observed field behaviour of a species.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Temperament {
    /// Attacks or ignores the player; can be grouped into multi battles.
    Aggressive,
    /// Flees as soon as any other entity is engaged nearby.
    Skittish,
    /// Never reacts, but cannot be herded into a multi battle either.
    Oblivious,
}

// Sorted for binary search.
const SKITTISH: &[u16] = &[46, 63, 64, 77, 133, 172, 234, 396, 399, 431, 441];
const OBLIVIOUS: &[u16] = &[54, 55, 129, 265, 412, 415];

pub fn is_skittish(species: u16) -> bool {
    SKITTISH.binary_search(&species).is_ok()
}

pub fn is_oblivious(species: u16) -> bool {
    OBLIVIOUS.binary_search(&species).is_ok()
}

pub fn temperament(species: u16) -> Temperament {
    if is_skittish(species) {
        Temperament::Skittish
    } else if is_oblivious(species) {
        Temperament::Oblivious
    } else {
        Temperament::Aggressive
    }
}

/// Which temperaments forbid multi-advances within a phase, and whether
/// alpha status overrides the species temperament.
#[derive(Debug, Clone)]
pub struct FeasibilityRule {
    pub blocking: Vec<Temperament>,
    pub alpha_exempt: bool,
}

impl Default for FeasibilityRule {
    fn default() -> Self {
        Self {
            blocking: vec![Temperament::Skittish],
            alpha_exempt: true,
        }
    }
}

impl FeasibilityRule {
    /// Accepts every path regardless of what spawned.
    pub fn permissive() -> Self {
        Self {
            blocking: Vec::new(),
            alpha_exempt: true,
        }
    }

    pub fn blocks(&self, entity: &EntityResult) -> bool {
        if self.alpha_exempt && entity.is_alpha {
            return false;
        }
        self.blocking.contains(&temperament(entity.species))
    }
}
