use super::home_side;
use crate::error::PolicyError;
use crate::navigation::step_toward;
use crate::perception::Perception;
use crate::state::{AgentState, Axis, ControlState, Step};

/// Goes home. Oriented agents navigate straight to the outpost; blind ones
/// step toward the home corner, except along an axis whose next cell in that
/// direction is off the board.
pub fn returning_home(state: &AgentState, perception: &Perception<'_>) -> Result<Step, PolicyError> {
    let home = state.home().ok_or(PolicyError::NoHome {
        state: ControlState::ReturningHome,
    })?;

    if let Some(position) = state.position() {
        return Ok(step_toward(position, home));
    }

    let axis_step = |axis| {
        let sign = home_side(Some(home), axis);
        if perception.has_neighbour(axis, sign) {
            sign
        } else {
            0
        }
    };
    Ok(Step::new(axis_step(Axis::X), axis_step(Axis::Y)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{AgentIdentity, Coordinate};

    #[test]
    fn oriented_agent_navigates_to_home() {
        let window = Perception::open();
        let state = AgentState::new(AgentIdentity::scout(0), 10, 50);

        let at = state.clone().oriented_at(Coordinate::new(5, 5));
        assert_eq!(returning_home(&at, &window), Ok(Step::new(-1, -1)));

        let at = state.oriented_at(Coordinate::new(5, 0));
        assert_eq!(returning_home(&at, &window), Ok(Step::new(-1, 0)));
    }

    #[test]
    fn blind_agent_stops_at_visible_boundary() {
        let state = AgentState::new(AgentIdentity::scout(0), 10, 50);
        let top_edge = Perception::open()
            .with_off_board(0, 0)
            .with_off_board(0, 1)
            .with_off_board(0, 2);

        assert_eq!(returning_home(&state, &top_edge), Ok(Step::new(0, -1)));
        assert_eq!(
            returning_home(&state, &Perception::open()),
            Ok(Step::new(-1, -1))
        );
    }

    #[test]
    fn messenger_has_nowhere_to_return() {
        let state = AgentState::new(AgentIdentity::messenger(5), 10, 50);
        assert_eq!(
            returning_home(&state, &Perception::open()),
            Err(PolicyError::NoHome {
                state: ControlState::ReturningHome
            })
        );
    }
}
