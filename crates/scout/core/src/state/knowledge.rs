use std::collections::BTreeSet;

use super::Coordinate;

/// Locations the agent has classified so far.
///
/// Both sets only ever grow during a mission and hold each coordinate once.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Knowledge {
    safe: BTreeSet<Coordinate>,
    enemy: BTreeSet<Coordinate>,
    /// Whether the last scan saw an enemy tag anywhere in the window.
    pub enemy_nearby: bool,
}

impl Knowledge {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if the coordinate was not known to be safe yet.
    pub fn record_safe(&mut self, location: Coordinate) -> bool {
        self.safe.insert(location)
    }

    /// Returns true if the coordinate was not known to hold an enemy yet.
    pub fn record_enemy(&mut self, location: Coordinate) -> bool {
        self.enemy.insert(location)
    }

    pub fn safe(&self) -> impl Iterator<Item = Coordinate> + '_ {
        self.safe.iter().copied()
    }

    pub fn enemies(&self) -> impl Iterator<Item = Coordinate> + '_ {
        self.enemy.iter().copied()
    }

    pub fn is_safe(&self, location: Coordinate) -> bool {
        self.safe.contains(&location)
    }

    pub fn is_enemy(&self, location: Coordinate) -> bool {
        self.enemy.contains(&location)
    }

    pub fn safe_count(&self) -> usize {
        self.safe.len()
    }

    pub fn enemy_count(&self) -> usize {
        self.enemy.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_records_are_ignored() {
        let mut knowledge = Knowledge::new();
        assert!(knowledge.record_safe(Coordinate::new(2, 3)));
        assert!(!knowledge.record_safe(Coordinate::new(2, 3)));
        assert!(knowledge.record_enemy(Coordinate::new(2, 3)));

        assert_eq!(knowledge.safe_count(), 1);
        assert_eq!(knowledge.enemy_count(), 1);
    }
}
