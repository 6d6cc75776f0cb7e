//! Prioritised conditions ("events") checked every tick.
//!
//! Each condition is a function of the agent state and the perception window
//! returning whether it fired and, optionally, a [`StatePatch`]. Patches are
//! applied as soon as their condition has been evaluated, whichever condition
//! ends up winning, because localization progresses through them.
mod conditions;
mod selection;

use arrayvec::ArrayVec;

pub use conditions::{check, cost_to_home};
pub use selection::{Selection, select};

use crate::localization::LocalizationPatch;
use crate::perception::{CoLocated, Perception};
use crate::state::AgentState;
use crate::{MissionConfig, ScoutConfig};

/// Condition identifiers. `NoEvent` is the zero-priority winner when nothing
/// else fires and never triggers a transition.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::AsRefStr,
    strum::EnumCount,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum EventKind {
    PlayerSighted,
    LandmarkSighted,
    Oriented,
    NotOriented,
    EndOfMission,
    OutpostReached,
    NoEvent,
}

impl EventKind {
    /// Real conditions in the order they are evaluated. `NotOriented` comes
    /// after `Oriented` so it sees this tick's localization, and
    /// `EndOfMission` after both so it can use a freshly resolved position.
    pub const EVALUATION_ORDER: [EventKind; 6] = [
        EventKind::PlayerSighted,
        EventKind::LandmarkSighted,
        EventKind::Oriented,
        EventKind::NotOriented,
        EventKind::EndOfMission,
        EventKind::OutpostReached,
    ];

    pub const fn priority(self) -> u32 {
        match self {
            EventKind::PlayerSighted => 10,
            EventKind::LandmarkSighted => 4,
            EventKind::Oriented => 6,
            EventKind::NotOriented => 1,
            EventKind::EndOfMission => 1000,
            EventKind::OutpostReached => 10,
            EventKind::NoEvent => 0,
        }
    }
}

/// State change requested by a condition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatePatch {
    Localize(LocalizationPatch),
    /// Push everything the agent knows into the co-located outpost at this
    /// index of [`Perception::co_located`].
    Deposit { outpost: usize },
}

impl StatePatch {
    pub fn apply(self, state: &mut AgentState, perception: &Perception<'_>) {
        match self {
            StatePatch::Localize(patch) => {
                let was_oriented = state.is_oriented();
                patch.apply(state);
                if let (false, Some(position)) = (was_oriented, state.position()) {
                    tracing::info!("agent {} localized at {}", state.identity(), position);
                }
            }
            StatePatch::Deposit { outpost } => match perception.co_located().get(outpost) {
                Some(CoLocated::Outpost(outpost)) => {
                    if outpost.data().is_none() {
                        outpost.set_data(state.identity().tag());
                    }
                    for location in state.knowledge.safe() {
                        outpost.add_safe_location(location);
                    }
                    for location in state.knowledge.enemies() {
                        outpost.add_enemy_location(location);
                    }
                    tracing::info!(
                        "agent {} deposited {} safe and {} enemy locations at {}",
                        state.identity(),
                        state.knowledge.safe_count(),
                        state.knowledge.enemy_count(),
                        outpost.location()
                    );
                }
                other => tracing::error!(
                    "agent {} deposit target #{} is not an outpost: {:?}",
                    state.identity(),
                    outpost,
                    other
                ),
            },
        }
    }
}

/// Result of checking one condition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EventOutcome {
    pub kind: EventKind,
    pub fired: bool,
    pub patch: Option<StatePatch>,
}

impl EventOutcome {
    pub const fn new(kind: EventKind, fired: bool) -> Self {
        Self {
            kind,
            fired,
            patch: None,
        }
    }

    #[must_use]
    pub const fn with_patch(mut self, patch: StatePatch) -> Self {
        self.patch = Some(patch);
        self
    }
}

/// Evaluates every condition in [`EventKind::EVALUATION_ORDER`], applying
/// each patch before the next condition runs.
pub fn evaluate_all(
    state: &mut AgentState,
    perception: &Perception<'_>,
    mission: &MissionConfig,
    config: &ScoutConfig,
) -> ArrayVec<EventOutcome, 6> {
    let mut outcomes = ArrayVec::new();
    for kind in EventKind::EVALUATION_ORDER {
        let outcome = check(kind, state, perception, mission, config);
        if let Some(patch) = outcome.patch {
            patch.apply(state, perception);
        }
        outcomes.push(outcome);
    }
    outcomes
}

#[cfg(test)]
mod tests {
    use strum::EnumCount;

    use super::*;

    #[test]
    fn evaluation_order_covers_every_real_condition() {
        assert_eq!(EventKind::EVALUATION_ORDER.len(), EventKind::COUNT - 1);
        assert!(!EventKind::EVALUATION_ORDER.contains(&EventKind::NoEvent));
    }

    #[test]
    fn end_of_mission_outranks_everything() {
        let top = EventKind::EVALUATION_ORDER
            .into_iter()
            .max_by_key(|kind| kind.priority());
        assert_eq!(top, Some(EventKind::EndOfMission));
    }
}
