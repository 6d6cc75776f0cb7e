//! Movement policies, one per control state.
//!
//! A policy is a plain function of the agent state and the perception
//! window. It never mutates state; the controller records the step it
//! returns. Errors signal states the transition table should have made
//! impossible and are downgraded to "no movement" by the controller.
mod exploring;
mod orienting;
mod returning;
mod seeking;

use crate::error::PolicyError;
use crate::perception::Perception;
use crate::state::{AgentState, Axis, ControlState, Coordinate, Step};

pub use exploring::{exploring, rendezvous};
pub use orienting::orienting;
pub use returning::returning_home;
pub use seeking::seeking_landmark;

/// Signature shared by every state policy.
pub type Policy = fn(&AgentState, &Perception<'_>) -> Result<Step, PolicyError>;

/// Policy governing `state`.
pub fn policy_for(state: ControlState) -> Policy {
    match state {
        ControlState::Orienting => orienting,
        ControlState::SeekingLandmark => seeking_landmark,
        ControlState::Exploring => exploring,
        ControlState::ReturningHome => returning_home,
        ControlState::Done => done,
    }
}

/// Terminal state: never moves.
pub fn done(_: &AgentState, _: &Perception<'_>) -> Result<Step, PolicyError> {
    Ok(Step::STAY)
}

/// Direction of the home corner along `axis`: `-1` when home sits on the low
/// edge, `+1` otherwise. Agents without a home lean toward the low edge.
pub(crate) fn home_side(home: Option<Coordinate>, axis: Axis) -> i32 {
    match home {
        Some(home) if home.get(axis) != 0 => 1,
        _ => -1,
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;
    use crate::state::AgentIdentity;

    #[test]
    fn done_never_moves() {
        let state = AgentState::new(AgentIdentity::scout(2), 8, 10);
        let window = Perception::open().with_tag(0, 0, "L1");
        assert_eq!(done(&state, &window), Ok(Step::STAY));
    }

    #[test]
    fn every_state_has_a_policy() {
        let state = AgentState::new(AgentIdentity::scout(0), 8, 10)
            .oriented_at(Coordinate::new(3, 3));
        let window = Perception::open().with_tag(2, 2, "L1");
        for control in ControlState::iter() {
            let step = policy_for(control)(&state, &window).expect("policy should succeed");
            assert!((-1..=1).contains(&step.dx()) && (-1..=1).contains(&step.dy()));
        }
    }

    #[test]
    fn home_side_follows_the_home_corner() {
        let far = Some(Coordinate::new(11, 0));
        assert_eq!(home_side(far, Axis::X), 1);
        assert_eq!(home_side(far, Axis::Y), -1);
        assert_eq!(home_side(None, Axis::X), -1);
    }
}
