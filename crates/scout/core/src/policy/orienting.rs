use super::{home_side, rendezvous};
use crate::error::PolicyError;
use crate::navigation::step_toward;
use crate::perception::Perception;
use crate::state::{AgentState, Axis, Step};

/// Heads for the edges around the home corner until both axes are fixed.
///
/// With no edge found yet both axes step toward the home corner's side. Once
/// one axis has a fix it is held still and only the free axis keeps moving.
/// An agent that is already localized but still orienting (a stronger event
/// such as standing on an outpost masked `Oriented`) walks toward its
/// rendezvous point, which also takes it off the masking cell.
pub fn orienting(state: &AgentState, _: &Perception<'_>) -> Result<Step, PolicyError> {
    if let Some(position) = state.position() {
        return Ok(step_toward(position, rendezvous(state)));
    }

    let x = home_side(state.home(), Axis::X);
    let y = home_side(state.home(), Axis::Y);
    let step = match (state.edge_fix(Axis::X), state.edge_fix(Axis::Y)) {
        (Some(_), None) => Step::new(0, y),
        (None, Some(_)) => Step::new(x, 0),
        _ => Step::new(x, y),
    };
    Ok(step)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::localization::LocalizationPatch;
    use crate::state::{AgentIdentity, Coordinate, Edge, EdgeFix};

    #[test]
    fn heads_for_the_home_corner_sides() {
        let window = Perception::open();
        let origin_home = AgentState::new(AgentIdentity::scout(0), 10, 50);
        assert_eq!(orienting(&origin_home, &window), Ok(Step::new(-1, -1)));

        let far_home = AgentState::new(AgentIdentity::scout(3), 10, 50);
        assert_eq!(orienting(&far_home, &window), Ok(Step::new(1, 1)));

        let mixed = AgentState::new(AgentIdentity::scout(1), 10, 50);
        assert_eq!(orienting(&mixed, &window), Ok(Step::new(-1, 1)));
    }

    #[test]
    fn holds_the_axis_that_is_already_fixed() {
        let mut state = AgentState::new(AgentIdentity::scout(0), 10, 50);
        LocalizationPatch {
            x_fix: Some(EdgeFix::adjacent(Edge::Top)),
            ..LocalizationPatch::default()
        }
        .apply(&mut state);

        assert_eq!(orienting(&state, &Perception::open()), Ok(Step::new(0, -1)));
    }

    #[test]
    fn localized_agent_leaves_for_the_rendezvous() {
        let state = AgentState::new(AgentIdentity::scout(0), 10, 50).oriented_at(Coordinate::new(0, 0));
        assert_eq!(orienting(&state, &Perception::open()), Ok(Step::new(1, 1)));
    }
}
