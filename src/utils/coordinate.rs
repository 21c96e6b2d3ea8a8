/// Cell position on a grid: `x` is the row, `y` is the column.
///
/// Coordinates carry no bounds of their own; they are checked against a
/// particular [`crate::Grid`] when used.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coordinate {
    pub x: i64,
    pub y: i64,
}

impl Coordinate {
    /// Moore neighborhood offsets, clockwise starting from `(0, +1)`.
    pub const NEIGHBOR_OFFSETS: [(i64, i64); 8] = [
        (0, 1),
        (1, 1),
        (1, 0),
        (1, -1),
        (0, -1),
        (-1, -1),
        (-1, 0),
        (-1, 1),
    ];

    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// `None` if the shifted position doesn't fit into `i64`.
    pub fn offset(self, dx: i64, dy: i64) -> Option<Self> {
        Some(Self::new(self.x.checked_add(dx)?, self.y.checked_add(dy)?))
    }

    /// Neighbors in clockwise order; those overflowing `i64` are skipped.
    pub fn neighbors(self) -> impl Iterator<Item = Coordinate> {
        Self::NEIGHBOR_OFFSETS
            .into_iter()
            .filter_map(move |(dx, dy)| self.offset(dx, dy))
    }
}

impl From<(i64, i64)> for Coordinate {
    fn from((x, y): (i64, i64)) -> Self {
        Self::new(x, y)
    }
}
