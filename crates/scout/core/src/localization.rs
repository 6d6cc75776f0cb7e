//! Self-localization from board edges and landmarks.
//!
//! An unoriented agent learns one axis at a time: when both corners on one
//! side of the window are off-board, it is standing next to that edge. Once
//! both axes carry an [`EdgeFix`], the absolute position follows. Standing on
//! a landmark short-circuits the whole process. After the position is known
//! the estimator never touches the state again.

use crate::perception::{CoLocated, Edges, Perception};
use crate::state::{AgentState, Axis, Coordinate, Edge, EdgeFix};

/// Writes the estimator wants applied to the agent state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LocalizationPatch {
    pub position: Option<Coordinate>,
    pub x_fix: Option<EdgeFix>,
    pub y_fix: Option<EdgeFix>,
}

impl LocalizationPatch {
    pub fn apply(self, state: &mut AgentState) {
        if let Some(fix) = self.x_fix {
            state.x_fix = Some(fix);
        }
        if let Some(fix) = self.y_fix {
            state.y_fix = Some(fix);
        }
        if let Some(position) = self.position {
            state.position = Some(position);
        }
    }
}

/// Outcome of one estimator run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Localization {
    /// Position known after applying `patch`.
    pub oriented: bool,
    pub patch: Option<LocalizationPatch>,
}

impl Localization {
    const fn known() -> Self {
        Self {
            oriented: true,
            patch: None,
        }
    }
}

/// Runs the estimator for this tick without mutating anything.
///
/// `landmarks` is the list announced at mission start; a co-located landmark
/// outside it is still trusted but reported.
pub fn estimate(
    state: &AgentState,
    perception: &Perception<'_>,
    landmarks: &[Coordinate],
) -> Localization {
    if state.is_oriented() {
        return Localization::known();
    }

    if let Some((id, location)) = co_located_landmark(perception) {
        if !landmarks.is_empty() && !landmarks.contains(&location) {
            tracing::warn!(
                "agent {} stands on landmark {} at {} which was not announced",
                state.identity(),
                id,
                location
            );
        }
        return Localization {
            oriented: true,
            patch: Some(LocalizationPatch {
                position: Some(location),
                ..LocalizationPatch::default()
            }),
        };
    }

    let edges = perception.edges();
    let new_x = detect(state, edges, Axis::X);
    let new_y = detect(state, edges, Axis::Y);
    if new_x.is_none() && new_y.is_none() {
        return Localization::default();
    }

    let position = match (new_x.or(state.x_fix), new_y.or(state.y_fix)) {
        (Some(x), Some(y)) => {
            let far = state.far_anchor();
            Some(Coordinate::new(x.resolve(far), y.resolve(far)))
        }
        _ => None,
    };

    Localization {
        oriented: position.is_some(),
        patch: Some(LocalizationPatch {
            position,
            x_fix: new_x,
            y_fix: new_y,
        }),
    }
}

/// New fix for `axis`, if it is still unresolved and an edge is in view.
/// The low edge is checked before the high one.
fn detect(state: &AgentState, edges: Edges, axis: Axis) -> Option<EdgeFix> {
    if state.edge_fix(axis).is_some() {
        return None;
    }
    [Edge::low(axis), Edge::high(axis)]
        .into_iter()
        .find(|&edge| edges.touches(edge))
        .map(EdgeFix::adjacent)
}

fn co_located_landmark<'p>(perception: &'p Perception<'_>) -> Option<(&'p str, Coordinate)> {
    perception.co_located().iter().find_map(|entity| match entity {
        CoLocated::Landmark { id, location } => Some((*id, *location)),
        CoLocated::Player { .. } | CoLocated::Enemy { .. } | CoLocated::Outpost(_) => None,
    })
}
