//! Static species metadata for the species the embedded encounter
//! tables and behavior lists reference.

struct SpeciesInfo {
    id: u16,
    name: &'static str,
    /// Gender ratio byte with the game's magic values: 0 male-only,
    /// 254 female-only, 255 genderless; anything else is the female
    /// threshold for the gender roll.
    gender_ratio: u8,
}

const SPECIES_INFO: &[SpeciesInfo] = &[
    SpeciesInfo { id: 46, name: "Paras", gender_ratio: 127 },
    SpeciesInfo { id: 50, name: "Diglett", gender_ratio: 127 },
    SpeciesInfo { id: 54, name: "Psyduck", gender_ratio: 127 },
    SpeciesInfo { id: 55, name: "Golduck", gender_ratio: 127 },
    SpeciesInfo { id: 63, name: "Abra", gender_ratio: 63 },
    SpeciesInfo { id: 64, name: "Kadabra", gender_ratio: 63 },
    SpeciesInfo { id: 77, name: "Ponyta", gender_ratio: 127 },
    SpeciesInfo { id: 129, name: "Magikarp", gender_ratio: 127 },
    SpeciesInfo { id: 133, name: "Eevee", gender_ratio: 31 },
    SpeciesInfo { id: 172, name: "Pichu", gender_ratio: 127 },
    SpeciesInfo { id: 234, name: "Stantler", gender_ratio: 127 },
    SpeciesInfo { id: 265, name: "Wurmple", gender_ratio: 127 },
    SpeciesInfo { id: 396, name: "Starly", gender_ratio: 127 },
    SpeciesInfo { id: 399, name: "Bidoof", gender_ratio: 127 },
    SpeciesInfo { id: 412, name: "Burmy", gender_ratio: 127 },
    SpeciesInfo { id: 415, name: "Combee", gender_ratio: 225 },
    SpeciesInfo { id: 431, name: "Glameow", gender_ratio: 191 },
    SpeciesInfo { id: 441, name: "Chatot", gender_ratio: 127 },
    SpeciesInfo { id: 443, name: "Gible", gender_ratio: 127 },
    SpeciesInfo { id: 444, name: "Gabite", gender_ratio: 127 },
    SpeciesInfo { id: 445, name: "Garchomp", gender_ratio: 127 },
    SpeciesInfo { id: 899, name: "Wyrdeer", gender_ratio: 127 },
];

fn lookup(species: u16) -> Option<&'static SpeciesInfo> {
    SPECIES_INFO
        .binary_search_by_key(&species, |info| info.id)
        .ok()
        .map(|idx| &SPECIES_INFO[idx])
}

pub fn name(species: u16) -> String {
    match lookup(species) {
        Some(info) => info.name.to_string(),
        None => format!("Species {species}"),
    }
}

pub fn gender_ratio(species: u16) -> u8 {
    lookup(species).map_or(127, |info| info.gender_ratio)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_sorted_for_binary_search() {
        assert!(SPECIES_INFO.windows(2).all(|pair| pair[0].id < pair[1].id));
    }

    #[test]
    fn known_and_unknown_species() {
        assert_eq!(name(445), "Garchomp");
        assert_eq!(name(9999), "Species 9999");
        assert_eq!(gender_ratio(133), 31);
        assert_eq!(gender_ratio(9999), 127);
    }
}
