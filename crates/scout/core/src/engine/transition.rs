//! Control-state transition table.

use std::collections::BTreeMap;

use crate::event::EventKind;
use crate::state::ControlState;

/// Fixed `(state, event) → next state` mapping. A missing entry means the
/// agent stays where it is.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransitionTable {
    edges: BTreeMap<(ControlState, EventKind), ControlState>,
}

impl TransitionTable {
    const STANDARD: [(ControlState, EventKind, ControlState); 7] = [
        (
            ControlState::Orienting,
            EventKind::Oriented,
            ControlState::Exploring,
        ),
        (
            ControlState::Orienting,
            EventKind::LandmarkSighted,
            ControlState::SeekingLandmark,
        ),
        (
            ControlState::Orienting,
            EventKind::EndOfMission,
            ControlState::ReturningHome,
        ),
        (
            ControlState::SeekingLandmark,
            EventKind::Oriented,
            ControlState::Exploring,
        ),
        (
            ControlState::SeekingLandmark,
            EventKind::EndOfMission,
            ControlState::ReturningHome,
        ),
        (
            ControlState::Exploring,
            EventKind::EndOfMission,
            ControlState::ReturningHome,
        ),
        (
            ControlState::ReturningHome,
            EventKind::OutpostReached,
            ControlState::Done,
        ),
    ];

    /// The scout mission table.
    pub fn standard() -> Self {
        Self {
            edges: Self::STANDARD
                .into_iter()
                .map(|(from, event, to)| ((from, event), to))
                .collect(),
        }
    }

    /// Next state for `event` fired in `from`, if the table maps it.
    ///
    /// [`EventKind::NoEvent`] and the terminal state never map anywhere.
    pub fn next(&self, from: ControlState, event: EventKind) -> Option<ControlState> {
        if from.is_terminal() || event == EventKind::NoEvent {
            return None;
        }
        self.edges.get(&(from, event)).copied()
    }

    /// All edges leaving `from`.
    pub fn outgoing(
        &self,
        from: ControlState,
    ) -> impl Iterator<Item = (EventKind, ControlState)> + '_ {
        self.edges
            .iter()
            .filter(move |((state, _), _)| *state == from)
            .map(|((_, event), to)| (*event, *to))
    }
}

impl Default for TransitionTable {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unmapped_pairs_stay() {
        let table = TransitionTable::standard();
        assert_eq!(
            table.next(ControlState::Exploring, EventKind::LandmarkSighted),
            None
        );
        assert_eq!(
            table.next(ControlState::Orienting, EventKind::NoEvent),
            None
        );
    }

    #[test]
    fn done_has_no_way_out() {
        let table = TransitionTable::standard();
        assert_eq!(table.outgoing(ControlState::Done).count(), 0);
        assert_eq!(
            table.next(ControlState::Done, EventKind::EndOfMission),
            None
        );
    }

    #[test]
    fn orienting_has_three_exits() {
        let table = TransitionTable::standard();
        let exits: Vec<_> = table.outgoing(ControlState::Orienting).collect();
        assert_eq!(exits.len(), 3);
        assert!(exits.contains(&(EventKind::LandmarkSighted, ControlState::SeekingLandmark)));
    }
}
