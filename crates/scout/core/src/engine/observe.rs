use crate::perception::{Perception, TagKind};
use crate::state::AgentState;

/// Records what the window shows into the agent's knowledge.
///
/// Every on-board cell is classified as safe or enemy-held. Coordinates are
/// only recorded once the agent is oriented; the enemy-nearby flag is
/// refreshed either way.
pub(crate) fn observe(state: &mut AgentState, perception: &Perception<'_>) {
    let position = state.position();
    let mut enemy_nearby = false;

    for (i, j, cell) in perception.visible() {
        let hostile = cell.contains(TagKind::Enemy);
        enemy_nearby |= hostile;

        let Some(at) = position else { continue };
        let location = at.relative(i, j);
        if hostile {
            state.knowledge.record_enemy(location);
        } else {
            state.knowledge.record_safe(location);
        }
    }

    state.knowledge.enemy_nearby = enemy_nearby;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{AgentIdentity, Coordinate};

    #[test]
    fn oriented_scan_classifies_every_visible_cell() {
        let mut state =
            AgentState::new(AgentIdentity::scout(0), 10, 50).oriented_at(Coordinate::new(0, 4));
        let window = Perception::open()
            .with_off_board(0, 0)
            .with_off_board(0, 1)
            .with_off_board(0, 2)
            .with_tag(2, 2, "E4");

        observe(&mut state, &window);

        assert!(state.knowledge.enemy_nearby);
        assert_eq!(state.knowledge.safe_count(), 5);
        assert!(state.knowledge.is_enemy(Coordinate::new(1, 5)));
        assert!(state.knowledge.is_safe(Coordinate::new(0, 4)));
    }

    #[test]
    fn blind_scan_only_sets_the_flag() {
        let mut state = AgentState::new(AgentIdentity::scout(0), 10, 50);
        observe(&mut state, &Perception::open().with_tag(0, 0, "E1"));

        assert!(state.knowledge.enemy_nearby);
        assert_eq!(state.knowledge.safe_count(), 0);
        assert_eq!(state.knowledge.enemy_count(), 0);
    }
}
