use std::fmt;

/// Absolute board coordinate.
///
/// Boards are padded by one cell on every side, so for a board of size `n`
/// both axes run from `0` to `n + 1` inclusive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    pub x: i32,
    pub y: i32,
}

impl Coordinate {
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub const fn get(self, axis: Axis) -> i32 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
        }
    }

    /// Coordinate reached by taking `step` from here.
    pub const fn offset(self, step: Step) -> Self {
        Self {
            x: self.x + step.dx as i32,
            y: self.y + step.dy as i32,
        }
    }

    /// Coordinate of the snapshot cell `(i, j)` when standing here.
    pub const fn relative(self, i: usize, j: usize) -> Self {
        Self {
            x: self.x + i as i32 - 1,
            y: self.y + j as i32 - 1,
        }
    }
}

/// Coordinate of the high edge cell for a board of `board_size`. Saturates
/// instead of wrapping for sizes beyond the `i32` range.
pub(crate) fn far_edge(board_size: u32) -> i32 {
    i32::try_from(board_size).unwrap_or(i32::MAX).saturating_add(1)
}

impl Default for Coordinate {
    fn default() -> Self {
        Self::ORIGIN
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Single-cell move. Both components are always in `-1..=1`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Step {
    dx: i8,
    dy: i8,
}

impl Step {
    pub const STAY: Self = Self { dx: 0, dy: 0 };

    /// Builds a step from raw deltas, keeping only their sign.
    pub const fn new(dx: i32, dy: i32) -> Self {
        Self {
            dx: dx.signum() as i8,
            dy: dy.signum() as i8,
        }
    }

    pub const fn dx(self) -> i32 {
        self.dx as i32
    }

    pub const fn dy(self) -> i32 {
        self.dy as i32
    }

    pub const fn get(self, axis: Axis) -> i32 {
        match axis {
            Axis::X => self.dx as i32,
            Axis::Y => self.dy as i32,
        }
    }

    pub const fn is_stay(self) -> bool {
        self.dx == 0 && self.dy == 0
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:+}, {:+}]", self.dx, self.dy)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum Axis {
    X,
    Y,
}

/// Board edge as seen from the 3×3 window.
///
/// The x axis runs along snapshot rows, so its edges are `Top` (row 0) and
/// `Bottom` (row 2); the y axis runs along columns with `Left` (column 0) and
/// `Right` (column 2).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum Edge {
    Top,
    Bottom,
    Left,
    Right,
}

impl Edge {
    pub const fn axis(self) -> Axis {
        match self {
            Edge::Top | Edge::Bottom => Axis::X,
            Edge::Left | Edge::Right => Axis::Y,
        }
    }

    /// True for the edge sitting at coordinate 0.
    pub const fn is_low(self) -> bool {
        matches!(self, Edge::Top | Edge::Left)
    }

    pub const fn low(axis: Axis) -> Self {
        match axis {
            Axis::X => Edge::Top,
            Axis::Y => Edge::Left,
        }
    }

    pub const fn high(axis: Axis) -> Self {
        match axis {
            Axis::X => Edge::Bottom,
            Axis::Y => Edge::Right,
        }
    }
}

/// Distance from a detected board edge, tracked per axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EdgeFix {
    pub edge: Edge,
    pub distance: i32,
}

impl EdgeFix {
    /// Fix taken while standing right next to `edge`.
    pub const fn adjacent(edge: Edge) -> Self {
        Self { edge, distance: 0 }
    }

    /// Moves the fix along with a committed step.
    pub const fn advance(self, step: Step) -> Self {
        let delta = step.get(self.edge.axis());
        let distance = if self.edge.is_low() {
            self.distance + delta
        } else {
            self.distance - delta
        };
        Self {
            edge: self.edge,
            distance,
        }
    }

    /// Absolute coordinate on this fix's axis.
    ///
    /// `far_anchor` is the coordinate of the high edge cell.
    pub const fn resolve(self, far_anchor: i32) -> i32 {
        if self.edge.is_low() {
            self.distance
        } else {
            far_anchor - self.distance
        }
    }
}
