/// Single row or column index on the board.
pub type Coord = u8;

/// Count type used for mine counts and total-cell counts.
pub type CellCount = u16;

/// Board position as `(row, col)`.
pub type Pos = (Coord, Coord);

/// Board dimensions as `(rows, cols)`.
pub type Bounds = Pos;

pub(crate) fn nd(pos: Pos) -> [usize; 2] {
    [pos.0.into(), pos.1.into()]
}

pub const fn cell_total(rows: Coord, cols: Coord) -> CellCount {
    let rows = rows as CellCount;
    let cols = cols as CellCount;
    rows.saturating_mul(cols)
}

const MOORE_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Iterates the in-bounds Moore neighbors of `pos`, clipped at the board
/// edges. Yields at most 8 positions and never `pos` itself.
pub fn moore_neighbors(pos: Pos, bounds: Bounds) -> impl Iterator<Item = Pos> {
    let (rows, cols) = bounds;
    MOORE_OFFSETS.iter().filter_map(move |&(dr, dc)| {
        let row = pos.0.checked_add_signed(dr)?;
        let col = pos.1.checked_add_signed(dc)?;
        (row < rows && col < cols).then_some((row, col))
    })
}
