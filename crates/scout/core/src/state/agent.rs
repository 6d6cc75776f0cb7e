use std::fmt;

use super::{Axis, Coordinate, EdgeFix, Knowledge, Step, far_edge};

/// Mission role handed out by the host.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Role {
    /// Territorial scout with a corner outpost to report back to.
    #[default]
    Scout,
    /// Relay role without a home outpost.
    Messenger,
}

/// Who the agent is. Fixed for the whole mission.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgentIdentity {
    pub id: u32,
    pub role: Role,
}

impl AgentIdentity {
    pub const fn scout(id: u32) -> Self {
        Self {
            id,
            role: Role::Scout,
        }
    }

    pub const fn messenger(id: u32) -> Self {
        Self {
            id,
            role: Role::Messenger,
        }
    }

    /// Tag this agent shows up as in other agents' windows.
    pub fn tag(&self) -> String {
        format!("P{}", self.id)
    }

    /// Corner outpost assigned to this identity on a board of `board_size`.
    ///
    /// Scouts are spread over the four padded corners by `id % 4`; messengers
    /// have no home.
    pub fn home(&self, board_size: u32) -> Option<Coordinate> {
        if self.role == Role::Messenger {
            return None;
        }
        let far = far_edge(board_size);
        let home = match self.id % 4 {
            0 => Coordinate::new(0, 0),
            1 => Coordinate::new(0, far),
            2 => Coordinate::new(far, 0),
            _ => Coordinate::new(far, far),
        };
        Some(home)
    }
}

impl fmt::Display for AgentIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.role, self.id)
    }
}

/// Turn bookkeeping. `remaining` counts down once per communication phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnClock {
    pub budget: u32,
    pub elapsed: u32,
    pub remaining: u32,
}

impl TurnClock {
    pub const fn new(budget: u32) -> Self {
        Self {
            budget,
            elapsed: 0,
            remaining: budget,
        }
    }

    pub fn advance(&mut self) {
        self.elapsed = self.elapsed.saturating_add(1);
        self.remaining = self.remaining.saturating_sub(1);
    }
}

/// Everything the agent knows about itself and the board.
///
/// Owned exclusively by the controller. The position and the edge fixes only
/// change through [`crate::LocalizationPatch`] and committed steps, which
/// keeps the position either fully unknown or fully resolved.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgentState {
    identity: AgentIdentity,
    home: Option<Coordinate>,
    board_size: u32,
    pub(crate) position: Option<Coordinate>,
    pub(crate) x_fix: Option<EdgeFix>,
    pub(crate) y_fix: Option<EdgeFix>,
    pub(crate) pending: Option<Step>,
    pub clock: TurnClock,
    pub knowledge: Knowledge,
    /// Set once the rendezvous with a messenger happened. No condition sets
    /// it yet, so the second exploring phase is currently unreachable.
    pub met_messenger: bool,
}

impl AgentState {
    pub fn new(identity: AgentIdentity, board_size: u32, turn_budget: u32) -> Self {
        Self {
            identity,
            home: identity.home(board_size),
            board_size,
            position: None,
            x_fix: None,
            y_fix: None,
            pending: None,
            clock: TurnClock::new(turn_budget),
            knowledge: Knowledge::new(),
            met_messenger: false,
        }
    }

    /// Starts the agent with a known position, e.g. for hosts that spawn
    /// scouts on their outpost.
    #[must_use]
    pub fn oriented_at(mut self, position: Coordinate) -> Self {
        self.position = Some(position);
        self
    }

    #[must_use]
    pub fn with_remaining_turns(mut self, remaining: u32) -> Self {
        self.clock.remaining = remaining;
        self
    }

    pub fn identity(&self) -> AgentIdentity {
        self.identity
    }

    pub fn home(&self) -> Option<Coordinate> {
        self.home
    }

    pub fn board_size(&self) -> u32 {
        self.board_size
    }

    /// Coordinate of the high edge cell on either axis.
    pub fn far_anchor(&self) -> i32 {
        far_edge(self.board_size)
    }

    pub fn position(&self) -> Option<Coordinate> {
        self.position
    }

    pub fn is_oriented(&self) -> bool {
        self.position.is_some()
    }

    pub fn edge_fix(&self, axis: Axis) -> Option<EdgeFix> {
        match axis {
            Axis::X => self.x_fix,
            Axis::Y => self.y_fix,
        }
    }

    pub fn pending_step(&self) -> Option<Step> {
        self.pending
    }

    /// Applies a step the host has validated and carried out.
    pub(crate) fn integrate(&mut self, step: Step) {
        if let Some(position) = self.position.as_mut() {
            *position = position.offset(step);
        }
        self.x_fix = self.x_fix.map(|fix| fix.advance(step));
        self.y_fix = self.y_fix.map(|fix| fix.advance(step));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Edge;

    #[test]
    fn homes_cover_the_four_padded_corners() {
        let homes: Vec<_> = (0..4)
            .map(|id| AgentIdentity::scout(id).home(10))
            .collect();
        assert_eq!(
            homes,
            vec![
                Some(Coordinate::new(0, 0)),
                Some(Coordinate::new(0, 11)),
                Some(Coordinate::new(11, 0)),
                Some(Coordinate::new(11, 11)),
            ]
        );
        assert_eq!(AgentIdentity::messenger(0).home(10), None);
    }

    #[test]
    fn integrate_moves_position_and_fixes_together() {
        let mut state = AgentState::new(AgentIdentity::scout(0), 10, 50);
        state.x_fix = Some(EdgeFix::adjacent(Edge::Top));
        state.integrate(Step::new(1, 1));

        assert_eq!(state.position(), None);
        assert_eq!(state.edge_fix(Axis::X).map(|fix| fix.distance), Some(1));
        assert_eq!(state.edge_fix(Axis::Y), None);

        let mut state = state.oriented_at(Coordinate::new(3, 3));
        state.integrate(Step::new(-1, 0));
        assert_eq!(state.position(), Some(Coordinate::new(2, 3)));
    }

    #[test]
    fn clock_never_underflows() {
        let mut clock = TurnClock::new(1);
        clock.advance();
        clock.advance();
        assert_eq!(clock.remaining, 0);
        assert_eq!(clock.elapsed, 2);
    }
}
