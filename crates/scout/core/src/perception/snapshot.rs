use bitflags::bitflags;

use super::CoLocated;
use crate::state::{Axis, Edge};

/// Entity class encoded in the first character of a tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum TagKind {
    Enemy,
    Player,
    Outpost,
    Landmark,
}

impl TagKind {
    pub fn classify(tag: &str) -> Option<Self> {
        match tag.chars().next()? {
            'E' => Some(Self::Enemy),
            'P' => Some(Self::Player),
            'O' => Some(Self::Outpost),
            'L' => Some(Self::Landmark),
            _ => None,
        }
    }
}

/// On-board cell of the perception window.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VisibleCell {
    pub tags: Vec<String>,
}

impl VisibleCell {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_tags<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tags: tags.into_iter().map(Into::into).collect(),
        }
    }

    pub fn contains(&self, kind: TagKind) -> bool {
        self.tags
            .iter()
            .any(|tag| TagKind::classify(tag) == Some(kind))
    }
}

bitflags! {
    /// Board edges adjacent to the agent, detected from the window corners.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct Edges: u8 {
        const TOP = 1 << 0;
        const BOTTOM = 1 << 1;
        const LEFT = 1 << 2;
        const RIGHT = 1 << 3;
    }
}

impl Edges {
    pub const fn of(edge: Edge) -> Self {
        match edge {
            Edge::Top => Self::TOP,
            Edge::Bottom => Self::BOTTOM,
            Edge::Left => Self::LEFT,
            Edge::Right => Self::RIGHT,
        }
    }

    pub fn touches(self, edge: Edge) -> bool {
        self.contains(Self::of(edge))
    }
}

/// Corners flanking `edge`, as `(i, j)` window indices.
const fn corners(edge: Edge) -> [(usize, usize); 2] {
    match edge {
        Edge::Top => [(0, 0), (0, 2)],
        Edge::Bottom => [(2, 0), (2, 2)],
        Edge::Left => [(0, 0), (2, 0)],
        Edge::Right => [(0, 2), (2, 2)],
    }
}

/// What the agent sees this tick: the 3×3 window centred on itself and the
/// entities sharing its cell.
///
/// `cells[i][j]` holds the cell at offset `(i - 1, j - 1)`; `None` marks an
/// off-board cell.
pub struct Perception<'a> {
    cells: [[Option<VisibleCell>; 3]; 3],
    co_located: Vec<CoLocated<'a>>,
}

impl<'a> Perception<'a> {
    pub fn new(cells: [[Option<VisibleCell>; 3]; 3], co_located: Vec<CoLocated<'a>>) -> Self {
        Self { cells, co_located }
    }

    /// Window with every cell on the board and nothing in sight.
    pub fn open() -> Self {
        Self::new(Default::default(), Vec::new()).fill_empty()
    }

    fn fill_empty(mut self) -> Self {
        for row in self.cells.iter_mut() {
            for cell in row.iter_mut() {
                *cell = Some(VisibleCell::empty());
            }
        }
        self
    }

    fn slot(&mut self, i: usize, j: usize) -> Option<&mut Option<VisibleCell>> {
        self.cells.get_mut(i)?.get_mut(j)
    }

    /// Marks `(i, j)` as off-board. Indices outside the window are ignored.
    #[must_use]
    pub fn with_off_board(mut self, i: usize, j: usize) -> Self {
        if let Some(slot) = self.slot(i, j) {
            *slot = None;
        }
        self
    }

    /// Adds a tag to an on-board cell. Off-board cells and indices outside
    /// the window are left alone.
    #[must_use]
    pub fn with_tag(mut self, i: usize, j: usize, tag: impl Into<String>) -> Self {
        if let Some(cell) = self.slot(i, j).and_then(Option::as_mut) {
            cell.tags.push(tag.into());
        }
        self
    }

    #[must_use]
    pub fn with_co_located(mut self, entity: CoLocated<'a>) -> Self {
        self.co_located.push(entity);
        self
    }

    pub fn cell(&self, i: usize, j: usize) -> Option<&VisibleCell> {
        self.cells.get(i)?.get(j)?.as_ref()
    }

    pub fn is_off_board(&self, i: usize, j: usize) -> bool {
        self.cell(i, j).is_none()
    }

    /// On-board cells in row-major order.
    pub fn visible(&self) -> impl Iterator<Item = (usize, usize, &VisibleCell)> + '_ {
        self.cells.iter().enumerate().flat_map(|(i, row)| {
            row.iter()
                .enumerate()
                .filter_map(move |(j, cell)| cell.as_ref().map(|cell| (i, j, cell)))
        })
    }

    /// First cell in row-major order holding a tag of `kind`.
    pub fn find(&self, kind: TagKind) -> Option<(usize, usize)> {
        self.visible()
            .find(|(_, _, cell)| cell.contains(kind))
            .map(|(i, j, _)| (i, j))
    }

    pub fn sees(&self, kind: TagKind) -> bool {
        self.find(kind).is_some()
    }

    pub fn co_located(&self) -> &[CoLocated<'a>] {
        &self.co_located
    }

    /// Edges whose two flanking corners are both off-board.
    pub fn edges(&self) -> Edges {
        [Edge::Top, Edge::Bottom, Edge::Left, Edge::Right]
            .into_iter()
            .filter(|&edge| {
                corners(edge)
                    .iter()
                    .all(|&(i, j)| self.is_off_board(i, j))
            })
            .fold(Edges::empty(), |acc, edge| acc | Edges::of(edge))
    }

    /// Whether the neighbouring cell one step along `axis` in direction
    /// `sign` is on the board.
    pub fn has_neighbour(&self, axis: Axis, sign: i32) -> bool {
        let index = (1 + sign.signum()) as usize;
        match axis {
            Axis::X => !self.is_off_board(index, 1),
            Axis::Y => !self.is_off_board(1, index),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_are_classified_by_first_character() {
        assert_eq!(TagKind::classify("E12"), Some(TagKind::Enemy));
        assert_eq!(TagKind::classify("L7"), Some(TagKind::Landmark));
        assert_eq!(TagKind::classify("x"), None);
        assert_eq!(TagKind::classify(""), None);
    }

    #[test]
    fn corner_window_reports_two_edges() {
        let window = Perception::open()
            .with_off_board(0, 0)
            .with_off_board(0, 1)
            .with_off_board(0, 2)
            .with_off_board(1, 0)
            .with_off_board(2, 0);

        assert_eq!(window.edges(), Edges::TOP | Edges::LEFT);
        assert!(!window.has_neighbour(Axis::X, -1));
        assert!(window.has_neighbour(Axis::X, 1));
    }

    #[test]
    fn single_missing_corner_is_not_an_edge() {
        let window = Perception::open().with_off_board(0, 0);
        assert_eq!(window.edges(), Edges::empty());
    }

    #[test]
    fn builders_ignore_indices_outside_the_window() {
        let window = Perception::open()
            .with_off_board(3, 0)
            .with_off_board(0, 7)
            .with_tag(5, 5, "L1");

        assert_eq!(window.visible().count(), 9);
        assert_eq!(window.find(TagKind::Landmark), None);
    }

    #[test]
    fn find_scans_row_major_and_skips_off_board() {
        let window = Perception::open()
            .with_off_board(0, 0)
            .with_tag(2, 0, "L1")
            .with_tag(0, 2, "L7");

        assert_eq!(window.find(TagKind::Landmark), Some((0, 2)));
        assert_eq!(window.find(TagKind::Enemy), None);
    }
}
