//! Decision controller.
//!
//! [`ScoutAgent`] is the only entry point a host needs. A tick runs the
//! following steps:
//!
//! 1. drop any step the host never confirmed;
//! 2. record what the window shows;
//! 3. evaluate every condition, applying their patches;
//! 4. pick the highest-priority condition;
//! 5. follow the transition table if it maps `(state, condition)`;
//! 6. run the current state's policy and keep the step as pending.
//!
//! The pending step is folded into the position only when the host calls
//! [`ScoutAgent::on_move_committed`].
mod observe;
mod transition;

pub use transition::TransitionTable;

use crate::config::{MissionConfig, ScoutConfig};
use crate::error::{ConfigError, PolicyError, ScoutError};
use crate::event::{self, EventKind};
use crate::perception::{CoLocated, Perception};
use crate::policy;
use crate::state::{AgentIdentity, AgentState, ControlState, Step};

/// Summary of one decision, kept for inspection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DecisionRecord {
    /// Turns elapsed when the decision was taken.
    pub turn: u32,
    pub event: EventKind,
    pub from: ControlState,
    pub to: ControlState,
    pub step: Step,
}

impl DecisionRecord {
    pub fn transitioned(&self) -> bool {
        self.from != self.to
    }
}

/// Finite-state scout controller.
#[derive(Clone, Debug)]
pub struct ScoutAgent {
    state: AgentState,
    control: ControlState,
    mission: MissionConfig,
    config: ScoutConfig,
    table: TransitionTable,
    last: Option<DecisionRecord>,
}

impl ScoutAgent {
    /// Starts a mission for `identity`.
    pub fn init(identity: AgentIdentity, mission: MissionConfig) -> Result<Self, ConfigError> {
        mission.validate()?;
        let state = AgentState::new(identity, mission.board_size, mission.turn_budget);
        tracing::debug!(
            "agent {} starting mission: board {}, {} turns, home {:?}",
            identity,
            mission.board_size,
            mission.turn_budget,
            state.home()
        );
        Ok(Self::resume(state, ControlState::default(), mission))
    }

    /// Rebuilds a controller around existing state, e.g. a restored snapshot.
    pub fn resume(state: AgentState, control: ControlState, mission: MissionConfig) -> Self {
        Self {
            state,
            control,
            mission,
            config: ScoutConfig::default(),
            table: TransitionTable::standard(),
            last: None,
        }
    }

    #[must_use]
    pub fn with_config(mut self, config: ScoutConfig) -> Self {
        self.config = config;
        self
    }

    pub fn state(&self) -> &AgentState {
        &self.state
    }

    pub fn control(&self) -> ControlState {
        self.control
    }

    pub fn mission(&self) -> &MissionConfig {
        &self.mission
    }

    pub fn config(&self) -> &ScoutConfig {
        &self.config
    }

    pub fn last_decision(&self) -> Option<&DecisionRecord> {
        self.last.as_ref()
    }

    /// Chooses this tick's step. Both components are always in `-1..=1`.
    pub fn decide(&mut self, perception: &Perception<'_>) -> Step {
        if let Some(stale) = self.state.pending.take() {
            tracing::debug!(
                "agent {} dropping unconfirmed step {}",
                self.state.identity(),
                stale
            );
        }

        if self.control.is_terminal() {
            return self.finish(EventKind::NoEvent, self.control, Step::STAY);
        }

        observe::observe(&mut self.state, perception);

        let outcomes =
            event::evaluate_all(&mut self.state, perception, &self.mission, &self.config);
        let selection = event::select(&outcomes);

        let from = self.control;
        if let Some(next) = self.table.next(from, selection.winner) {
            self.control = next;
        }

        let step = match policy::policy_for(self.control)(&self.state, perception) {
            Ok(step) => step,
            Err(error) => {
                self.report(&error);
                Step::STAY
            }
        };

        self.state.pending = Some(step);
        self.finish(selection.winner, from, step)
    }

    /// The host carried out the last step.
    pub fn on_move_committed(&mut self) {
        if let Some(step) = self.state.pending.take() {
            self.state.integrate(step);
        }
    }

    /// Start-of-turn exchange window. Advances the turn clock.
    pub fn on_communication_phase(&mut self, perception: &Perception<'_>) {
        self.state.clock.advance();
        for entity in perception.co_located() {
            if let CoLocated::Player { id } = entity {
                tracing::trace!(
                    "agent {} shares a cell with {}; no exchange protocol yet",
                    self.state.identity(),
                    id
                );
            }
        }
    }

    fn finish(&mut self, event: EventKind, from: ControlState, step: Step) -> Step {
        let record = DecisionRecord {
            turn: self.state.clock.elapsed,
            event,
            from,
            to: self.control,
            step,
        };
        if record.transitioned() {
            tracing::info!(
                "agent {} turn {}: {} -> {} on {}",
                self.state.identity(),
                record.turn,
                record.from,
                record.to,
                record.event
            );
        }
        tracing::debug!(
            "agent {} turn {}: {} in {} -> {}",
            self.state.identity(),
            record.turn,
            record.event,
            record.to,
            record.step
        );
        self.last = Some(record);
        step
    }

    fn report(&self, error: &PolicyError) {
        let severity = error.severity();
        if severity.is_internal() {
            tracing::error!(
                "agent {} {} ({}): {}",
                self.state.identity(),
                error.error_code(),
                severity.as_str(),
                error
            );
        } else {
            tracing::debug!(
                "agent {} {} ({}): {}",
                self.state.identity(),
                error.error_code(),
                severity.as_str(),
                error
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Coordinate;

    #[test]
    fn init_rejects_invalid_missions() {
        let result = ScoutAgent::init(AgentIdentity::scout(0), MissionConfig::new(0, 10));
        assert_eq!(result.err(), Some(ConfigError::EmptyBoard));
    }

    #[test]
    fn uncommitted_steps_are_not_integrated() {
        let state = AgentState::new(AgentIdentity::scout(0), 10, 100)
            .oriented_at(Coordinate::new(5, 5));
        let mut agent =
            ScoutAgent::resume(state, ControlState::Exploring, MissionConfig::new(10, 100));

        agent.decide(&Perception::open());
        agent.decide(&Perception::open());
        assert_eq!(agent.state().position(), Some(Coordinate::new(5, 5)));

        agent.on_move_committed();
        assert_eq!(agent.state().position(), Some(Coordinate::new(4, 4)));
        assert_eq!(agent.state().pending_step(), None);
    }

    #[test]
    fn communication_phase_runs_the_clock() {
        let mut agent =
            ScoutAgent::init(AgentIdentity::scout(1), MissionConfig::new(10, 30)).expect("valid");
        agent.on_communication_phase(&Perception::open());
        agent.on_communication_phase(&Perception::open());
        assert_eq!(agent.state().clock.remaining, 28);
        assert_eq!(agent.state().clock.elapsed, 2);
    }
}
