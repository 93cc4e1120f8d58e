use serde::{Deserialize, Serialize};

/// Placeholder symbol for cells whose content is hidden or not yet computed.
pub const BLANK_SYMBOL: char = '_';

/// Display symbol for a mined cell.
pub const MINE_SYMBOL: char = '*';

/// State of a single board cell.
///
/// `display` holds the cell's true symbol (mine marker or adjacent-mine
/// digit) once displays have been computed; until then it is the blank
/// placeholder. `revealed` is monotonic: it never reverts to false.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub(crate) has_mine: bool,
    pub(crate) revealed: bool,
    pub(crate) display: char,
}

impl Cell {
    pub const fn has_mine(self) -> bool {
        self.has_mine
    }

    pub const fn is_revealed(self) -> bool {
        self.revealed
    }

    pub const fn display(self) -> char {
        self.display
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            has_mine: false,
            revealed: false,
            display: BLANK_SYMBOL,
        }
    }
}
