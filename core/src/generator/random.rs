use ndarray::Array2;
use rand::SeedableRng;
use rand::rngs::SmallRng;

use super::*;

/// Purely random placement; the first opened cell may well be a mine.
#[derive(Clone, Debug)]
pub struct RandomBoardGenerator {
    rng: SmallRng,
}

impl RandomBoardGenerator {
    pub fn new(seed: u64) -> Self {
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

impl BoardGenerator for RandomBoardGenerator {
    fn generate(&mut self, config: BoardConfig) -> Board {
        place_mines(config, &mut self.rng)
    }
}

/// Rejection sampling: draw uniform coordinates, skip the ones already mined.
///
/// Terminates almost surely because a valid config always leaves one safe cell.
pub(crate) fn place_mines<R: rand::Rng>(config: BoardConfig, rng: &mut R) -> Board {
    let (rows, cols) = config.size();
    let mut mine_mask: Array2<bool> = Array2::default(config.size().to_nd_index());
    let mut placed: CellCount = 0;
    let mut draws: u32 = 0;

    while placed < config.mines() {
        let coords = (rng.random_range(0..rows), rng.random_range(0..cols));
        draws += 1;
        let cell = &mut mine_mask[coords.to_nd_index()];
        if !*cell {
            *cell = true;
            placed += 1;
        }
    }

    log::debug!(
        "Generated {}x{} board with {} mines in {} draws",
        rows,
        cols,
        placed,
        draws
    );
    Board::from_valid_mask(&mine_mask)
}
