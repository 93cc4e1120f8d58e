use crate::types::Coord;

/// Number of row indices representable as single-letter labels.
pub const LETTER_ROWS: Coord = 26;

/// Row index to its display letter, `0 -> 'A'`. `None` for indices that do
/// not fit a single letter.
pub fn row_label(index: Coord) -> Option<char> {
    (index < LETTER_ROWS).then(|| char::from(b'A' + index))
}

/// Row letter back to its index, accepting lowercase. `None` for
/// non-alphabetic input.
pub fn row_index(label: char) -> Option<Coord> {
    let label = label.to_ascii_uppercase();
    label
        .is_ascii_uppercase()
        .then(|| (label as u8) - b'A')
}
