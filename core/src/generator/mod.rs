use crate::board::Board;
use crate::error::{GameError, Result};
use crate::types::Pos;

pub use random::RandomMineGenerator;

mod random;

/// Mine-placement strategy, run exactly once during board setup.
pub trait MineGenerator {
    fn plant(&mut self, board: &mut Board) -> Result<()>;
}

/// Plants mines at explicit coordinates, for deterministic layouts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FixedMineGenerator {
    positions: Vec<Pos>,
}

impl FixedMineGenerator {
    pub fn new(positions: impl Into<Vec<Pos>>) -> Self {
        Self {
            positions: positions.into(),
        }
    }
}

impl MineGenerator for FixedMineGenerator {
    fn plant(&mut self, board: &mut Board) -> Result<()> {
        for &pos in &self.positions {
            if !board.in_bounds(pos) {
                return Err(GameError::invalid("mine coordinate out of bounds"));
            }
            board.plant_mine(pos);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::GameConfig;

    #[test]
    fn fixed_generator_plants_requested_layout() {
        let mut board = Board::new(GameConfig::new(3, 3, 2).unwrap());
        let mut generator = FixedMineGenerator::new([(0, 0), (2, 2)]);
        board.plant_mines(&mut generator).unwrap();
        assert!(board.has_mine_at((0, 0)));
        assert!(board.has_mine_at((2, 2)));
        assert_eq!(board.mine_count(), 2);
    }

    #[test]
    fn fixed_generator_rejects_out_of_bounds_mine() {
        let mut board = Board::new(GameConfig::new(3, 3, 1).unwrap());
        let mut generator = FixedMineGenerator::new([(5, 5)]);
        assert!(board.plant_mines(&mut generator).is_err());
    }

    #[test]
    fn fixed_generator_ignores_duplicate_coordinates() {
        let mut board = Board::new(GameConfig::new(3, 3, 1).unwrap());
        let mut generator = FixedMineGenerator::new([(1, 1), (1, 1)]);
        board.plant_mines(&mut generator).unwrap();
        assert_eq!(board.mine_count(), 1);
    }
}
