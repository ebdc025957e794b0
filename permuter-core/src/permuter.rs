//! The search engine: exhaustive depth-first enumeration of every
//! advance sequence a spawn group admits, generating the spawns each
//! batch would produce and keeping the ones worth reporting.
//!
//! Generation is never pruned by feasibility — temperament belongs to
//! the generated species, so a sequence must be generated before it can
//! be judged. Structurally duplicate orderings (tokens after an empty
//! reserve) are never visited at all.

use log::debug;

use crate::advance::Advance;
use crate::behavior::FeasibilityRule;
use crate::calc::{self, FIELD_CAPACITY};
use crate::encounters::{self, EncounterTable};
use crate::generator::{generate_in, EntityResult, SlotOrigin};
use crate::rng::Xoroshiro128Plus;
use crate::spawn::{SpawnInfo, SpawnType};
use crate::{PermuteError, Result};

/// What makes a generated entity worth reporting.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum SearchCriteria {
    #[default]
    Shiny,
    Alpha,
    ShinyOrAlpha,
    Any,
}

impl SearchCriteria {
    pub fn matches(self, entity: &EntityResult) -> bool {
        match self {
            SearchCriteria::Shiny => entity.is_shiny,
            SearchCriteria::Alpha => entity.is_alpha,
            SearchCriteria::ShinyOrAlpha => entity.is_shiny || entity.is_alpha,
            SearchCriteria::Any => true,
        }
    }
}

/// One matching spawn together with the advance path that reaches it.
/// The seed trail lives on the entity itself.
#[derive(Debug, Clone)]
pub struct PermuteEntry {
    pub advances: Vec<Advance>,
    pub entity: EntityResult,
}

/// Aggregate of a full search over one spawn group.
#[derive(Debug, Clone)]
pub struct PermuteResult {
    pub spawn_info: SpawnInfo,
    pub root_seed: u64,
    pub results: Vec<PermuteEntry>,
    /// Complete advance sequences visited; exposed for exhaustiveness
    /// checks.
    pub sequences_visited: u64,
}

impl PermuteResult {
    pub fn has_results(&self) -> bool {
        !self.results.is_empty()
    }
}

/// Searches with the default criteria (shiny) and feasibility rule.
pub fn permute(spawn: &SpawnInfo, root_seed: u64) -> Result<PermuteResult> {
    permute_with(
        spawn,
        root_seed,
        SearchCriteria::default(),
        &FeasibilityRule::default(),
    )
}

pub fn permute_with(
    spawn: &SpawnInfo,
    root_seed: u64,
    criteria: SearchCriteria,
    rule: &FeasibilityRule,
) -> Result<PermuteResult> {
    if spawn.total_slots() == 0 {
        return Err(PermuteError::EmptySpawnGroup);
    }
    if spawn.bonus_count > 0 && !spawn.spawn_type.allows_bonus() {
        return Err(PermuteError::BonusNotAllowed);
    }
    let base = encounters::table(spawn.base_table)
        .ok_or(PermuteError::UnknownTable(spawn.base_table))?;
    let bonus = if spawn.bonus_count > 0 {
        Some(
            encounters::table(spawn.bonus_table)
                .ok_or(PermuteError::UnknownTable(spawn.bonus_table))?,
        )
    } else {
        None
    };

    let mut search = Search {
        criteria,
        rule,
        spawn_type: spawn.spawn_type,
        base,
        bonus,
        bonus_count: spawn.bonus_count,
        path: Vec::new(),
        results: Vec::new(),
        sequences: 0,
    };
    search.run(root_seed, spawn.base_count);
    debug!(
        "searched {} sequences for seed {root_seed:#018X}: {} result(s)",
        search.sequences,
        search.results.len()
    );
    Ok(PermuteResult {
        spawn_info: *spawn,
        root_seed,
        results: search.results,
        sequences_visited: search.sequences,
    })
}

/// Fans independent spawn groups out over scoped worker threads. No
/// state is shared between workers; each returns an owned result.
pub fn permute_all(
    groups: &[(SpawnInfo, u64)],
    criteria: SearchCriteria,
    rule: &FeasibilityRule,
) -> Vec<Result<PermuteResult>> {
    std::thread::scope(|scope| {
        let handles: Vec<_> = groups
            .iter()
            .map(|(spawn, seed)| scope.spawn(move || permute_with(spawn, *seed, criteria, rule)))
            .collect();
        handles
            .into_iter()
            .map(|handle| handle.join().expect("permute worker panicked"))
            .collect()
    })
}

/// Feasibility bookkeeping for the phase being walked. The rule in play:
/// a phase holding both a multi action and a blocking-temperament spawn
/// is unobtainable.
#[derive(Debug, Copy, Clone)]
struct Phase {
    multi: bool,
    blocking: bool,
}

impl Phase {
    fn new() -> Self {
        Self {
            multi: false,
            blocking: false,
        }
    }

    fn feasible(self) -> bool {
        !(self.multi && self.blocking)
    }
}

struct Search<'a> {
    criteria: SearchCriteria,
    rule: &'a FeasibilityRule,
    spawn_type: SpawnType,
    base: &'a EncounterTable,
    bonus: Option<&'a EncounterTable>,
    bonus_count: usize,
    path: Vec<Advance>,
    results: Vec<PermuteEntry>,
    sequences: u64,
}

impl<'a> Search<'a> {
    fn run(&mut self, root_seed: u64, base_count: usize) {
        let fill = base_count.min(FIELD_CAPACITY);
        let spawned = self.spawn_batch(root_seed, fill, self.base);
        let mut phase = Phase::new();
        phase.blocking = self.any_blocking(&spawned);
        self.record(&spawned, phase);
        let seed = if fill > 0 {
            calc::advance_seed(root_seed, fill)
        } else {
            root_seed
        };
        self.walk_base(seed, base_count - fill, fill, phase);
    }

    fn walk_base(&mut self, seed: u64, reserve: usize, alive: usize, phase: Phase) {
        if reserve == 0 {
            self.start_bonus(seed);
            return;
        }
        self.step(seed, reserve, alive, phase, self.base, true);
    }

    fn walk_bonus(&mut self, seed: u64, reserve: usize, alive: usize, phase: Phase) {
        if reserve == 0 {
            self.sequences += 1;
            return;
        }
        let table = self.bonus.expect("bonus phase requires a bonus table");
        self.step(seed, reserve, alive, phase, table, false);
    }

    /// Tries every advance token admissible at this node and recurses.
    /// The token may despawn past the reserve; the overshoot spawns
    /// ghosts that burn rng draws but produce no entity.
    fn step(
        &mut self,
        seed: u64,
        reserve: usize,
        alive: usize,
        phase: Phase,
        table: &'a EncounterTable,
        in_base: bool,
    ) {
        for count in 1..=alive.min(FIELD_CAPACITY) {
            let real = count.min(reserve);
            let spawned = self.spawn_batch(seed, real, table);
            let token = Advance::from_count(count);
            let next_phase = Phase {
                multi: phase.multi || token.is_multi(),
                blocking: phase.blocking || self.any_blocking(&spawned),
            };
            self.path.push(token);
            self.record(&spawned, next_phase);
            let next_seed = calc::advance_seed(seed, count);
            let next_alive = alive - count + real;
            if in_base {
                self.walk_base(next_seed, reserve - real, next_alive, next_phase);
            } else {
                self.walk_bonus(next_seed, reserve - real, next_alive, next_phase);
            }
            self.path.pop();
        }
    }

    /// Base reserve is empty: clear the leftovers and open the bonus
    /// wave, or finish the sequence when there is none.
    fn start_bonus(&mut self, seed: u64) {
        let Some(table) = self.bonus else {
            self.sequences += 1;
            return;
        };
        self.path.push(Advance::SB);
        let fill = self.bonus_count.min(FIELD_CAPACITY);
        let spawned = self.spawn_batch(seed, fill, table);
        let phase = Phase {
            multi: false,
            blocking: self.any_blocking(&spawned),
        };
        self.record(&spawned, phase);
        let next_seed = calc::advance_seed(seed, fill);
        self.walk_bonus(next_seed, self.bonus_count - fill, fill, phase);
        self.path.pop();
    }

    fn spawn_batch(
        &self,
        group_seed: u64,
        count: usize,
        table: &EncounterTable,
    ) -> Vec<EntityResult> {
        let mut rng = Xoroshiro128Plus::new(group_seed);
        let mut spawned = Vec::with_capacity(count);
        for index in 1..=count {
            let slot_seed = rng.next();
            let alpha_seed = rng.next();
            let origin = SlotOrigin {
                group_seed,
                index,
                alpha_seed,
            };
            spawned.push(generate_in(slot_seed, table, self.spawn_type, origin));
        }
        spawned
    }

    fn any_blocking(&self, spawned: &[EntityResult]) -> bool {
        spawned.iter().any(|entity| self.rule.blocks(entity))
    }

    fn record(&mut self, spawned: &[EntityResult], phase: Phase) {
        if !phase.feasible() {
            return;
        }
        for entity in spawned {
            if self.criteria.matches(entity) {
                self.results.push(PermuteEntry {
                    advances: self.path.clone(),
                    entity: entity.clone(),
                });
            }
        }
    }
}
