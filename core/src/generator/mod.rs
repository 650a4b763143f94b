use crate::*;
pub use random::*;

mod random;

/// Strategy producing the static board of a new game.
pub trait BoardGenerator {
    fn generate(&mut self, config: BoardConfig) -> Board;
}

impl<G: BoardGenerator + ?Sized> BoardGenerator for Box<G> {
    fn generate(&mut self, config: BoardConfig) -> Board {
        (**self).generate(config)
    }
}

/// Validates the dimensions and generates a random board from `rng`.
pub fn generate<R: rand::Rng>(
    rows: Coord,
    cols: Coord,
    mine_count: CellCount,
    rng: &mut R,
) -> Result<Board> {
    let config = BoardConfig::new(rows, cols, mine_count)?;
    Ok(place_mines(config, rng))
}
