/// Single coordinate axis used for board rows, columns, and positions.
pub type Coord = u8;

/// Count type used for mine counts and total-tile counts.
pub type CellCount = u16;

/// Two-dimensional coordinates `(row, column)`.
pub type Coord2 = (Coord, Coord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

/// Whether `coords` falls inside a grid of `size` rows and columns.
pub const fn in_bounds(coords: Coord2, size: Coord2) -> bool {
    coords.0 < size.0 && coords.1 < size.1
}

/// Iterates every coordinate of a grid in row-major order.
pub fn iter_coords((rows, columns): Coord2) -> impl Iterator<Item = Coord2> {
    (0..rows).flat_map(move |row| (0..columns).map(move |column| (row, column)))
}

/// Row/column offsets of the 8 surrounding tiles.
const NEIGHBOR_OFFSETS: [(i8, i8); 8] = [
    (0, -1),
    (0, 1),
    (-1, 0),
    (-1, -1),
    (-1, 1),
    (1, 0),
    (1, -1),
    (1, 1),
];

/// Up to 8 in-bounds neighbors of `center` on a `size` grid, `center` excluded.
pub fn neighbors(center: Coord2, size: Coord2) -> impl Iterator<Item = Coord2> + Clone {
    NEIGHBOR_OFFSETS.iter().filter_map(move |&(d_row, d_column)| {
        let row = center.0.checked_add_signed(d_row)?;
        let column = center.1.checked_add_signed(d_column)?;
        in_bounds((row, column), size).then_some((row, column))
    })
}
