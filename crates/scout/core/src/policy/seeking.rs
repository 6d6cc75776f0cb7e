use crate::error::PolicyError;
use crate::perception::{Perception, TagKind};
use crate::state::{AgentState, ControlState, Step};

/// Steps onto the first landmark in the window (row-major scan).
pub fn seeking_landmark(_: &AgentState, perception: &Perception<'_>) -> Result<Step, PolicyError> {
    let (i, j) = perception
        .find(TagKind::Landmark)
        .ok_or(PolicyError::LandmarkNotInView {
            state: ControlState::SeekingLandmark,
        })?;
    Ok(Step::new(i as i32 - 1, j as i32 - 1))
}
