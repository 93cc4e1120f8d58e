use std::collections::VecDeque;

use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::cell::{BLANK_SYMBOL, Cell, MINE_SYMBOL};
use crate::error::{GameError, Result};
use crate::generator::MineGenerator;
use crate::types::{Bounds, CellCount, Coord, Pos, cell_total, moore_neighbors, nd};

/// Validated board parameters.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    rows: Coord,
    cols: Coord,
    mines: CellCount,
}

impl GameConfig {
    pub fn new(rows: Coord, cols: Coord, mines: CellCount) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(GameError::invalid("board dimensions must be positive"));
        }
        if mines > cell_total(rows, cols) {
            return Err(GameError::invalid("mine count exceeds cell count"));
        }
        Ok(Self { rows, cols, mines })
    }

    pub const fn rows(&self) -> Coord {
        self.rows
    }

    pub const fn cols(&self) -> Coord {
        self.cols
    }

    pub const fn mines(&self) -> CellCount {
        self.mines
    }

    pub const fn total_cells(&self) -> CellCount {
        cell_total(self.rows, self.cols)
    }
}

/// Valid transitions:
/// - InProgress -> Lost, on revealing a mined cell
/// - InProgress -> Won, on revealing the last safe cell
///
/// Lost and Won are terminal; reveals on a finished board are ignored.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    InProgress,
    Lost,
    Won,
}

impl GameStatus {
    pub const fn is_over(self) -> bool {
        matches!(self, Self::Lost | Self::Won)
    }
}

impl Default for GameStatus {
    fn default() -> Self {
        Self::InProgress
    }
}

/// Outcome of a reveal request.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    /// Out of bounds, already revealed, or the game is over; nothing changed.
    Ignored,
    /// A safe cell was revealed; carries its display symbol.
    Revealed(char),
    /// The last safe cell was revealed and the game is won.
    Cleared(char),
    /// A mined cell was revealed and the game is lost.
    Detonated,
}

impl RevealOutcome {
    /// Whether this outcome changed any board state.
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::Ignored)
    }
}

/// The minesweeper board engine.
///
/// Owns the full game state: mine layout, per-cell reveal flags, display
/// symbols, and the win/loss status. Setup runs in three steps — construct,
/// plant mines through a [`MineGenerator`], then [`Board::compute_display`] —
/// after which [`Board::reveal`] drives the game to a terminal status.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    config: GameConfig,
    cells: Array2<Cell>,
    mine_count: CellCount,
    mines_planted: bool,
    revealed_count: CellCount,
    status: GameStatus,
}

impl Board {
    /// Creates a blank board: every cell unrevealed, mine-free, and showing
    /// the blank placeholder.
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            cells: Array2::default((config.rows.into(), config.cols.into())),
            mine_count: 0,
            mines_planted: false,
            revealed_count: 0,
            status: GameStatus::default(),
        }
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn bounds(&self) -> Bounds {
        (self.config.rows, self.config.cols)
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_game_over(&self) -> bool {
        self.status.is_over()
    }

    /// True iff every safe cell has been revealed. Only meaningful while the
    /// status is not [`GameStatus::Lost`]; a lost game never reports a win.
    pub fn is_win(&self) -> bool {
        self.status != GameStatus::Lost && self.revealed_count == self.safe_cells()
    }

    /// Number of mines actually planted so far.
    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn revealed_count(&self) -> CellCount {
        self.revealed_count
    }

    pub fn has_mine_at(&self, pos: Pos) -> bool {
        self.in_bounds(pos) && self.cells[nd(pos)].has_mine
    }

    /// Display symbol of a cell, `None` when out of bounds.
    pub fn display_at(&self, pos: Pos) -> Option<char> {
        self.in_bounds(pos).then(|| self.cells[nd(pos)].display)
    }

    pub fn cell_at(&self, pos: Pos) -> Option<Cell> {
        self.in_bounds(pos).then(|| self.cells[nd(pos)])
    }

    /// Plants mines through `generator`. Mines can be planted only once per
    /// board; the layout is immutable afterwards.
    pub fn plant_mines<G: MineGenerator>(&mut self, generator: &mut G) -> Result<()> {
        if self.mines_planted {
            return Err(GameError::invalid("mines already planted"));
        }
        generator.plant(self)?;
        self.mines_planted = true;
        log::debug!(
            "planted {} mines on {}x{} board",
            self.mine_count,
            self.config.rows,
            self.config.cols
        );
        Ok(())
    }

    /// Number of mines among the up-to-8 Moore neighbors of `pos`, clipped
    /// at the board edges. Pure function of the mine layout.
    pub fn adjacent_mine_count(&self, pos: Pos) -> u8 {
        moore_neighbors(pos, self.bounds())
            .filter(|&neighbor| self.cells[nd(neighbor)].has_mine)
            .count()
            .try_into()
            .unwrap()
    }

    /// Populates every cell's display symbol from the mine layout: the mine
    /// marker for mined cells, the adjacent-mine digit `'0'..='8'` otherwise.
    /// Run once after planting; recomputing is harmless since mines never
    /// move.
    pub fn compute_display(&mut self) {
        for row in 0..self.config.rows {
            for col in 0..self.config.cols {
                let pos = (row, col);
                let symbol = if self.cells[nd(pos)].has_mine {
                    MINE_SYMBOL
                } else {
                    char::from(b'0' + self.adjacent_mine_count(pos))
                };
                self.cells[nd(pos)].display = symbol;
            }
        }
    }

    /// Reveals the cell at `pos`.
    ///
    /// Out-of-bounds and already-revealed positions are ignored without any
    /// state change, as is every reveal once the game is over. Revealing a
    /// mined cell sets the status to [`GameStatus::Lost`] and does not
    /// cascade. Revealing a zero-count cell flood-fills its neighbors.
    pub fn reveal(&mut self, pos: Pos) -> RevealOutcome {
        if self.status.is_over() || !self.in_bounds(pos) {
            return RevealOutcome::Ignored;
        }
        if self.cells[nd(pos)].revealed {
            return RevealOutcome::Ignored;
        }

        if self.cells[nd(pos)].has_mine {
            self.cells[nd(pos)].revealed = true;
            self.status = GameStatus::Lost;
            log::debug!("mine detonated at {:?}", pos);
            return RevealOutcome::Detonated;
        }

        self.flood_reveal(pos);

        let display = self.cells[nd(pos)].display;
        // Lost before Won: unreachable here since the cascade only ever
        // reaches safe cells, but the ordering is part of the contract.
        if self.status != GameStatus::Lost && self.revealed_count == self.safe_cells() {
            self.status = GameStatus::Won;
            log::debug!("all safe cells revealed, game won");
            RevealOutcome::Cleared(display)
        } else {
            RevealOutcome::Revealed(display)
        }
    }

    /// Player-facing or debug view of the grid: revealed cells (or all cells
    /// when `show_all`) show their display symbol, the rest show the blank
    /// placeholder.
    pub fn display_snapshot(&self, show_all: bool) -> Array2<char> {
        self.cells.map(|cell| {
            if show_all || cell.revealed {
                cell.display
            } else {
                BLANK_SYMBOL
            }
        })
    }

    pub(crate) fn in_bounds(&self, pos: Pos) -> bool {
        pos.0 < self.config.rows && pos.1 < self.config.cols
    }

    /// Marks a mine at `pos`, returning false when the cell is already
    /// mined. Only reachable from generators during setup.
    pub(crate) fn plant_mine(&mut self, pos: Pos) -> bool {
        let cell = &mut self.cells[nd(pos)];
        if cell.has_mine {
            return false;
        }
        cell.has_mine = true;
        self.mine_count += 1;
        true
    }

    fn safe_cells(&self) -> CellCount {
        self.config.total_cells() - self.mine_count
    }

    /// Iterative flood fill over a worklist of positions. A cell enters the
    /// queue at most a bounded number of times and is revealed at most once;
    /// the revealed flag alone guarantees termination. Mines never enter the
    /// queue: only neighbors of zero-count cells are enqueued, and a cell
    /// adjacent to a mine has a nonzero count.
    fn flood_reveal(&mut self, start: Pos) {
        let bounds = self.bounds();
        let mut pending = VecDeque::from([start]);

        while let Some(pos) = pending.pop_front() {
            let cell = self.cells[nd(pos)];
            if cell.revealed {
                continue;
            }
            self.cells[nd(pos)].revealed = true;
            self.revealed_count += 1;
            log::trace!("revealed {:?} showing {}", pos, cell.display);

            if cell.display == '0' {
                pending.extend(
                    moore_neighbors(pos, bounds)
                        .filter(|&neighbor| !self.cells[nd(neighbor)].revealed),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::{FixedMineGenerator, RandomMineGenerator};

    fn board(rows: Coord, cols: Coord, mines: &[Pos]) -> Board {
        let config = GameConfig::new(rows, cols, mines.len() as CellCount).unwrap();
        let mut board = Board::new(config);
        board
            .plant_mines(&mut FixedMineGenerator::new(mines.to_vec()))
            .unwrap();
        board.compute_display();
        board
    }

    #[test]
    fn config_rejects_zero_dimensions() {
        assert!(GameConfig::new(0, 3, 0).is_err());
        assert!(GameConfig::new(3, 0, 0).is_err());
    }

    #[test]
    fn config_rejects_too_many_mines() {
        assert!(GameConfig::new(3, 3, 10).is_err());
        assert!(GameConfig::new(3, 3, 9).is_ok());
    }

    #[test]
    fn blank_board_shows_placeholders_only() {
        let board = Board::new(GameConfig::new(2, 2, 0).unwrap());
        let snapshot = board.display_snapshot(true);
        assert!(snapshot.iter().all(|&symbol| symbol == BLANK_SYMBOL));
        assert_eq!(board.status(), GameStatus::InProgress);
    }

    #[test]
    fn adjacent_counts_match_moore_neighborhood() {
        let board = board(3, 3, &[(0, 0)]);
        assert_eq!(board.adjacent_mine_count((0, 1)), 1);
        assert_eq!(board.adjacent_mine_count((1, 1)), 1);
        assert_eq!(board.adjacent_mine_count((2, 2)), 0);
    }

    #[test]
    fn compute_display_marks_mines_and_digits() {
        let board = board(3, 3, &[(1, 1)]);
        assert_eq!(board.display_at((1, 1)), Some(MINE_SYMBOL));
        assert_eq!(board.display_at((0, 0)), Some('1'));
        assert_eq!(board.display_at((2, 2)), Some('1'));
    }

    #[test]
    fn revealing_mine_loses_without_cascading() {
        let mut board = board(3, 3, &[(1, 1)]);
        assert_eq!(board.reveal((1, 1)), RevealOutcome::Detonated);
        assert_eq!(board.status(), GameStatus::Lost);
        assert!(board.is_game_over());
        assert!(!board.is_win());
        for pos in moore_neighbors((1, 1), board.bounds()) {
            assert!(!board.cell_at(pos).unwrap().is_revealed());
        }
    }

    #[test]
    fn reveal_out_of_bounds_is_ignored() {
        let mut board = board(3, 3, &[(1, 1)]);
        let before = board.clone();
        assert_eq!(board.reveal((3, 0)), RevealOutcome::Ignored);
        assert_eq!(board.reveal((0, 200)), RevealOutcome::Ignored);
        assert_eq!(board, before);
    }

    #[test]
    fn reveal_already_revealed_is_ignored() {
        let mut board = board(3, 3, &[(1, 1)]);
        assert_eq!(board.reveal((0, 0)), RevealOutcome::Revealed('1'));
        let before = board.clone();
        assert_eq!(board.reveal((0, 0)), RevealOutcome::Ignored);
        assert_eq!(board, before);
    }

    #[test]
    fn reveal_after_loss_is_ignored() {
        let mut board = board(3, 3, &[(1, 1)]);
        board.reveal((1, 1));
        let before = board.clone();
        assert_eq!(board.reveal((0, 0)), RevealOutcome::Ignored);
        assert_eq!(board, before);
        assert_eq!(board.status(), GameStatus::Lost);
    }

    #[test]
    fn nonzero_cell_does_not_cascade() {
        let mut board = board(3, 3, &[(1, 1)]);
        assert_eq!(board.reveal((0, 0)), RevealOutcome::Revealed('1'));
        assert_eq!(board.revealed_count(), 1);
    }

    #[test]
    fn zero_mine_board_cascades_to_win_from_any_cell() {
        for row in 0..3 {
            for col in 0..3 {
                let mut board = board(3, 3, &[]);
                assert_eq!(board.reveal((row, col)), RevealOutcome::Cleared('0'));
                assert_eq!(board.revealed_count(), 9);
                assert_eq!(board.status(), GameStatus::Won);
                assert!(board.is_win());
            }
        }
    }

    #[test]
    fn cascade_stops_at_numbered_border() {
        // Mine in the far corner of a 4x4 board: the zero region covers
        // everything except the mine, so revealing (0, 0) wins.
        let mut board = board(4, 4, &[(3, 3)]);
        assert_eq!(board.reveal((0, 0)), RevealOutcome::Cleared('0'));
        assert!(!board.cell_at((3, 3)).unwrap().is_revealed());
        assert_eq!(board.status(), GameStatus::Won);
    }

    #[test]
    fn one_by_one_board_wins_immediately() {
        let mut board = board(1, 1, &[]);
        assert_eq!(board.reveal((0, 0)), RevealOutcome::Cleared('0'));
        assert_eq!(board.status(), GameStatus::Won);
        assert!(board.is_win());
    }

    #[test]
    fn snapshot_hides_unrevealed_cells_from_player() {
        let mut board = board(3, 3, &[(1, 1)]);
        board.reveal((0, 0));
        let player_view = board.display_snapshot(false);
        assert_eq!(player_view[[0, 0]], '1');
        assert_eq!(player_view[[1, 1]], BLANK_SYMBOL);
        let full_view = board.display_snapshot(true);
        assert_eq!(full_view[[1, 1]], MINE_SYMBOL);
    }

    #[test]
    fn planting_twice_is_rejected() {
        let config = GameConfig::new(3, 3, 1).unwrap();
        let mut board = Board::new(config);
        board
            .plant_mines(&mut RandomMineGenerator::from_seed(7))
            .unwrap();
        let result = board.plant_mines(&mut RandomMineGenerator::from_seed(8));
        assert!(result.is_err());
        assert_eq!(board.mine_count(), 1);
    }
}
