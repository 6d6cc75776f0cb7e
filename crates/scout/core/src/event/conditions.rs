use super::{EventKind, EventOutcome, StatePatch};
use crate::localization;
use crate::perception::{CoLocated, Perception, TagKind};
use crate::state::AgentState;
use crate::{MissionConfig, ScoutConfig};

/// Checks a single condition against the current state and window.
///
/// Never mutates anything; side effects are returned as a patch.
pub fn check(
    kind: EventKind,
    state: &AgentState,
    perception: &Perception<'_>,
    mission: &MissionConfig,
    config: &ScoutConfig,
) -> EventOutcome {
    match kind {
        // Reserved for agent-to-agent exchange.
        EventKind::PlayerSighted => EventOutcome::new(kind, false),
        EventKind::LandmarkSighted => EventOutcome::new(kind, perception.sees(TagKind::Landmark)),
        EventKind::Oriented => oriented(state, perception, mission),
        EventKind::NotOriented => EventOutcome::new(kind, !state.is_oriented()),
        EventKind::EndOfMission => {
            let threshold = config.return_threshold(cost_to_home(state, config));
            EventOutcome::new(kind, state.clock.remaining < threshold)
        }
        EventKind::OutpostReached => outpost_reached(perception),
        EventKind::NoEvent => EventOutcome::new(kind, true),
    }
}

fn oriented(
    state: &AgentState,
    perception: &Perception<'_>,
    mission: &MissionConfig,
) -> EventOutcome {
    let result = localization::estimate(state, perception, &mission.landmarks);
    let outcome = EventOutcome::new(EventKind::Oriented, result.oriented);
    match result.patch {
        Some(patch) => outcome.with_patch(StatePatch::Localize(patch)),
        None => outcome,
    }
}

fn outpost_reached(perception: &Perception<'_>) -> EventOutcome {
    let outpost = perception
        .co_located()
        .iter()
        .position(|entity| matches!(entity, CoLocated::Outpost(_)));
    match outpost {
        Some(outpost) => EventOutcome::new(EventKind::OutpostReached, true)
            .with_patch(StatePatch::Deposit { outpost }),
        None => EventOutcome::new(EventKind::OutpostReached, false),
    }
}

/// Estimated turns needed to walk home from the current position.
///
/// Without a position, or without a home, the estimate falls back to a flat
/// `blind_cost_factor × board_size`.
pub fn cost_to_home(state: &AgentState, config: &ScoutConfig) -> u32 {
    match (state.position(), state.home()) {
        (Some(at), Some(home)) => {
            let dx = at.x.abs_diff(home.x);
            let dy = at.y.abs_diff(home.y);
            let diagonal = dx.min(dy);
            let straight = dx.max(dy) - diagonal;
            diagonal
                .saturating_mul(config.diagonal_cost)
                .saturating_add(straight.saturating_mul(config.orthogonal_cost))
        }
        _ => state.board_size().saturating_mul(config.blind_cost_factor),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::perception::MemoryOutpost;
    use crate::state::{AgentIdentity, Coordinate};

    fn scout() -> AgentState {
        AgentState::new(AgentIdentity::scout(0), 10, 100)
    }

    #[test]
    fn cost_mixes_diagonal_and_straight_steps() {
        let config = ScoutConfig::default();
        let state = scout().oriented_at(Coordinate::new(4, 1));
        // one diagonal, three straight
        assert_eq!(cost_to_home(&state, &config), 3 + 3 * 2);
        assert_eq!(cost_to_home(&scout(), &config), 20);
    }

    #[test]
    fn blind_cost_saturates_on_huge_boards() {
        let state = AgentState::new(AgentIdentity::scout(0), u32::MAX, 100);
        assert_eq!(cost_to_home(&state, &ScoutConfig::default()), u32::MAX);
    }

    #[test]
    fn end_of_mission_uses_floored_margin() {
        let config = ScoutConfig::default();
        let mission = MissionConfig::new(10, 100);
        let window = Perception::open();
        // cost 2 -> threshold 3
        let state = scout().oriented_at(Coordinate::new(0, 1));

        let at_three = state.clone().with_remaining_turns(3);
        let outcome = check(EventKind::EndOfMission, &at_three, &window, &mission, &config);
        assert!(!outcome.fired);

        let at_two = state.with_remaining_turns(2);
        let outcome = check(EventKind::EndOfMission, &at_two, &window, &mission, &config);
        assert!(outcome.fired);
    }

    #[test]
    fn player_sighted_never_fires() {
        let window = Perception::open()
            .with_tag(0, 1, "P3")
            .with_co_located(CoLocated::Player { id: "P3" });
        let outcome = check(
            EventKind::PlayerSighted,
            &scout(),
            &window,
            &MissionConfig::new(10, 100),
            &ScoutConfig::default(),
        );
        assert!(!outcome.fired);
        assert_eq!(outcome.patch, None);
    }

    #[test]
    fn outpost_patch_points_at_the_outpost_handle() {
        let outpost = MemoryOutpost::new(Coordinate::new(0, 0));
        let window = Perception::open()
            .with_co_located(CoLocated::Enemy { id: "E1" })
            .with_co_located(CoLocated::Outpost(&outpost));
        let outcome = outpost_reached(&window);
        assert!(outcome.fired);
        assert_eq!(outcome.patch, Some(StatePatch::Deposit { outpost: 1 }));
    }
}
