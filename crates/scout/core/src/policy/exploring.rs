use super::home_side;
use crate::error::PolicyError;
use crate::navigation::step_toward;
use crate::perception::Perception;
use crate::state::{AgentState, Axis, ControlState, Coordinate, Step};

/// Meeting point with the messenger for this agent's half of the board.
///
/// Per axis: `n/4 + 1` when home is on the low edge, `n/4 + n/2 + 1`
/// otherwise.
pub fn rendezvous(state: &AgentState) -> Coordinate {
    let n = i32::try_from(state.board_size()).unwrap_or(i32::MAX);
    let pick = |axis| {
        if home_side(state.home(), axis) < 0 {
            n / 4 + 1
        } else {
            n / 4 + n / 2 + 1
        }
    };
    Coordinate::new(pick(Axis::X), pick(Axis::Y))
}

/// Walks to the rendezvous point; after meeting the messenger, drifts
/// diagonally away from home until recalled.
pub fn exploring(state: &AgentState, _: &Perception<'_>) -> Result<Step, PolicyError> {
    if state.met_messenger {
        return Ok(Step::new(
            -home_side(state.home(), Axis::X),
            -home_side(state.home(), Axis::Y),
        ));
    }
    let position = state.position().ok_or(PolicyError::NotOriented {
        state: ControlState::Exploring,
    })?;
    Ok(step_toward(position, rendezvous(state)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::AgentIdentity;

    #[test]
    fn rendezvous_depends_on_home_half() {
        let low = AgentState::new(AgentIdentity::scout(0), 20, 50);
        assert_eq!(rendezvous(&low), Coordinate::new(6, 6));

        let mixed = AgentState::new(AgentIdentity::scout(2), 20, 50);
        assert_eq!(rendezvous(&mixed), Coordinate::new(16, 6));
    }

    #[test]
    fn walks_to_rendezvous_then_away_from_home() {
        let mut state =
            AgentState::new(AgentIdentity::scout(0), 20, 50).oriented_at(Coordinate::new(1, 9));
        let window = Perception::open();
        assert_eq!(exploring(&state, &window), Ok(Step::new(1, -1)));

        state.met_messenger = true;
        assert_eq!(exploring(&state, &window), Ok(Step::new(1, 1)));
    }

    #[test]
    fn unoriented_exploring_is_an_invariant_violation() {
        let state = AgentState::new(AgentIdentity::scout(0), 20, 50);
        assert!(exploring(&state, &Perception::open()).is_err());
    }
}
