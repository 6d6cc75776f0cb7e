/// Behaviour mode of the agent. Exactly one is active at a time and it alone
/// decides which movement policy runs.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ControlState {
    /// Looking for board edges to work out where we are.
    #[default]
    Orienting,
    /// Walking onto a landmark seen in the window.
    SeekingLandmark,
    /// Oriented; heading for the rendezvous point.
    Exploring,
    /// Out of time; heading back to the home outpost.
    ReturningHome,
    /// Knowledge delivered. Terminal.
    Done,
}

impl ControlState {
    pub const fn is_terminal(self) -> bool {
        matches!(self, ControlState::Done)
    }
}
