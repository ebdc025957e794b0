//! Advance tokens: the discrete player actions that move the spawn
//! group's rng state forward.

use std::fmt;

/// One player-triggerable action between respawn batches.
///
/// `A1..A4` despawn that many on-field entities in a single action (a
/// multi battle or scare); the spawner refills from the reserve. `SB`
/// clears whatever is left of the base wave and starts the bonus wave;
/// it burns no rng on its own.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Advance {
    A1,
    A2,
    A3,
    A4,
    SB,
}

impl Advance {
    /// Number of slots this action despawns.
    pub fn despawn_count(self) -> usize {
        match self {
            Advance::A1 => 1,
            Advance::A2 => 2,
            Advance::A3 => 3,
            Advance::A4 => 4,
            Advance::SB => 0,
        }
    }

    /// Whether this action removes more than one entity at once. Multi
    /// actions are what skittish spawns make unobtainable.
    pub fn is_multi(self) -> bool {
        self.despawn_count() >= 2
    }

    // Search-internal; counts come from a 1..=FIELD_CAPACITY loop.
    pub(crate) fn from_count(count: usize) -> Self {
        match count {
            1 => Advance::A1,
            2 => Advance::A2,
            3 => Advance::A3,
            4 => Advance::A4,
            _ => panic!("despawn count out of range: {count}"),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Advance::A1 => "A1",
            Advance::A2 => "A2",
            Advance::A3 => "A3",
            Advance::A4 => "A4",
            Advance::SB => "SB",
        }
    }
}

impl fmt::Display for Advance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::Advance;

    #[test]
    fn counts_and_multi() {
        assert_eq!(Advance::A1.despawn_count(), 1);
        assert_eq!(Advance::A4.despawn_count(), 4);
        assert_eq!(Advance::SB.despawn_count(), 0);
        assert!(!Advance::A1.is_multi());
        assert!(Advance::A2.is_multi());
        assert!(!Advance::SB.is_multi());
    }

    #[test]
    fn round_trips_from_count() {
        for count in 1..=4 {
            assert_eq!(Advance::from_count(count).despawn_count(), count);
        }
    }
}
