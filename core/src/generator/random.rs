use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::board::Board;
use crate::error::{GameError, Result};
use crate::generator::MineGenerator;
use crate::types::CellCount;

/// Uniform random placement: picks cells without row/col ordering bias and
/// retries on duplicate picks until exactly the configured number of mines
/// is planted.
///
/// The random source is injected at construction, so a fixed seed makes the
/// layout reproducible.
#[derive(Clone, Debug)]
pub struct RandomMineGenerator {
    rng: SmallRng,
}

impl RandomMineGenerator {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            rng: SmallRng::from_os_rng(),
        }
    }
}

impl MineGenerator for RandomMineGenerator {
    fn plant(&mut self, board: &mut Board) -> Result<()> {
        use rand::Rng;

        let target = board.config().mines();
        let (rows, cols) = board.bounds();

        // Fail fast instead of looping forever on an unsatisfiable target.
        // GameConfig already guarantees this on the normal path.
        if target > board.config().total_cells() - board.mine_count() {
            return Err(GameError::invalid("mine count exceeds free cell count"));
        }

        let mut planted: CellCount = 0;
        while planted < target {
            let pos = (
                self.rng.random_range(0..rows),
                self.rng.random_range(0..cols),
            );
            if board.plant_mine(pos) {
                planted += 1;
                log::trace!("planted mine at {:?}", pos);
            }
        }
        Ok(())
    }
}
