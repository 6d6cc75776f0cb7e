use crate::state::{Coordinate, Step};

/// Greedy step from `from` toward `target`.
///
/// Each axis moves by the sign of its remaining distance, so the agent walks
/// diagonally until one axis lines up and then straight along the other.
/// Obstacles are not considered.
pub fn step_toward(from: Coordinate, target: Coordinate) -> Step {
    Step::new(target.x - from.x, target.y - from.y)
}
