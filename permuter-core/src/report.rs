//! Plain-text rendering of search results.

use std::collections::BTreeMap;

use crate::advance::Advance;
use crate::permuter::{PermuteEntry, PermuteResult};

const NATURES: [&str; 25] = [
    "Hardy", "Lonely", "Brave", "Adamant", "Naughty", "Bold", "Docile", "Relaxed", "Impish",
    "Lax", "Timid", "Hasty", "Serious", "Jolly", "Naive", "Modest", "Mild", "Quiet", "Bashful",
    "Rash", "Calm", "Gentle", "Sassy", "Careful", "Quirky",
];

pub fn nature_name(nature: u8) -> &'static str {
    NATURES.get(nature as usize).copied().unwrap_or("???")
}

fn gender_symbol(gender: u8) -> &'static str {
    match gender {
        0 => "M",
        1 => "F",
        _ => "-",
    }
}

fn path_label(advances: &[Advance]) -> String {
    if advances.is_empty() {
        "start".to_string()
    } else {
        advances
            .iter()
            .map(|advance| advance.label())
            .collect::<Vec<_>>()
            .join("|")
    }
}

fn entry_line(entry: &PermuteEntry) -> String {
    let entity = &entry.entity;
    let mut marks = String::new();
    if entity.is_alpha {
        marks.push('a');
    }
    if entity.is_shiny {
        marks.push(if entity.shiny_xor == 0 { '■' } else { '★' });
    }
    format!(
        "{path} -> slot {index}: {name}{marks} lv{level} EC:{ec:08X} PID:{pid:08X} \
         IVs:{ivs} ({flawless} flawless) {ability}/{gender}/{nature} H:{height} W:{weight} \
         seed {seed:016X}",
        path = path_label(&entry.advances),
        index = entity.index,
        name = entity.name,
        level = entity.level,
        ec = entity.ec,
        pid = entity.pid,
        ivs = entity
            .ivs
            .iter()
            .map(|iv| iv.to_string())
            .collect::<Vec<_>>()
            .join("-"),
        flawless = entity.flawless_count(),
        ability = entity.ability,
        gender = gender_symbol(entity.gender),
        nature = nature_name(entity.nature),
        height = entity.height,
        weight = entity.weight,
        seed = entity.slot_seed,
    )
}

/// Renders a full result as printable lines: a header, one line per
/// matching entry, and a per-species tally.
pub fn lines(result: &PermuteResult) -> Vec<String> {
    let mut out = Vec::with_capacity(result.results.len() + 4);
    out.push(format!(
        "seed {seed} ({seed:#018X}): {found} result(s) across {sequences} sequence(s)",
        seed = result.root_seed,
        found = result.results.len(),
        sequences = result.sequences_visited,
    ));
    if result.results.is_empty() {
        out.push("no matches for this spawn group".to_string());
        return out;
    }

    for entry in &result.results {
        out.push(entry_line(entry));
    }

    let mut tally: BTreeMap<&str, usize> = BTreeMap::new();
    for entry in &result.results {
        *tally.entry(entry.entity.name.as_str()).or_default() += 1;
    }
    let summary = tally
        .iter()
        .map(|(name, count)| format!("{name} x{count}"))
        .collect::<Vec<_>>()
        .join(", ");
    out.push(format!("species: {summary}"));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::behavior::FeasibilityRule;
    use crate::permuter::{permute_with, SearchCriteria};
    use crate::spawn::{SpawnInfo, SpawnType};

    #[test]
    fn nature_names() {
        assert_eq!(nature_name(0), "Hardy");
        assert_eq!(nature_name(24), "Quirky");
        assert_eq!(nature_name(25), "???");
    }

    #[test]
    fn path_labels() {
        use crate::advance::Advance::{A1, A2, SB};
        assert_eq!(path_label(&[]), "start");
        assert_eq!(path_label(&[A2, A1, SB]), "A2|A1|SB");
    }

    #[test]
    fn renders_hits_and_summary() {
        let spawn = SpawnInfo {
            base_count: 9,
            base_table: 0x8571_4105_CF34_8588,
            bonus_count: 7,
            bonus_table: 0x8AE0_881E_5F93_9184,
            spawn_type: SpawnType::MassiveOutbreak,
        };
        let result = permute_with(
            &spawn,
            12880307074085126207,
            SearchCriteria::Shiny,
            &FeasibilityRule::default(),
        )
        .unwrap();
        let lines = lines(&result);
        assert!(lines[0].contains("7 result(s)"));
        assert!(lines.iter().any(|line| line.contains('★')));
        assert!(lines.last().unwrap().starts_with("species: "));
    }

    #[test]
    fn renders_empty_results() {
        let spawn = SpawnInfo {
            base_count: 8,
            base_table: 0x1122_10F4_7DE9_8115,
            bonus_count: 0,
            bonus_table: 0,
            spawn_type: SpawnType::Outbreak,
        };
        let result = permute_with(
            &spawn,
            1000,
            SearchCriteria::Shiny,
            &FeasibilityRule::default(),
        )
        .unwrap();
        let lines = lines(&result);
        assert_eq!(lines.len(), 2);
        assert!(lines[1].contains("no matches"));
    }
}
