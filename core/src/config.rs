use core::fmt;
use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::*;

/// Board dimensions and mine count, validated so that at least one cell is safe.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    rows: Coord,
    cols: Coord,
    mines: CellCount,
}

impl BoardConfig {
    pub const fn new_unchecked(rows: Coord, cols: Coord, mines: CellCount) -> Self {
        Self { rows, cols, mines }
    }

    pub fn new(rows: Coord, cols: Coord, mines: CellCount) -> Result<Self> {
        if rows == 0 || cols == 0 || mines >= mult(rows, cols) {
            return Err(GameError::InvalidConfiguration { rows, cols, mines });
        }
        Ok(Self::new_unchecked(rows, cols, mines))
    }

    pub const fn rows(&self) -> Coord {
        self.rows
    }

    pub const fn cols(&self) -> Coord {
        self.cols
    }

    pub const fn size(&self) -> Coord2 {
        (self.rows, self.cols)
    }

    pub const fn mines(&self) -> CellCount {
        self.mines
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.rows, self.cols)
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Self::Easy, Self::Medium, Self::Hard];

    pub const fn config(self) -> BoardConfig {
        match self {
            Self::Easy => BoardConfig::new_unchecked(8, 8, 10),
            Self::Medium => BoardConfig::new_unchecked(12, 12, 20),
            Self::Hard => BoardConfig::new_unchecked(16, 16, 40),
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownDifficulty(pub String);

impl fmt::Display for UnknownDifficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown difficulty {:?}, expected easy, medium or hard", self.0)
    }
}

impl core::error::Error for UnknownDifficulty {}

impl FromStr for Difficulty {
    type Err = UnknownDifficulty;

    fn from_str(s: &str) -> core::result::Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|level| level.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownDifficulty(s.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_are_valid_configs() {
        for level in Difficulty::ALL {
            let preset = level.config();
            assert_eq!(
                BoardConfig::new(preset.rows(), preset.cols(), preset.mines()),
                Ok(preset)
            );
        }
        assert_eq!(Difficulty::Hard.config().size(), (16, 16));
        assert_eq!(Difficulty::Medium.config().mines(), 20);
    }

    #[test]
    fn rejects_full_board() {
        assert_eq!(
            BoardConfig::new(3, 3, 9),
            Err(GameError::InvalidConfiguration {
                rows: 3,
                cols: 3,
                mines: 9
            })
        );
    }

    #[test]
    fn rejects_empty_dimension() {
        assert!(BoardConfig::new(0, 4, 0).is_err());
        assert!(BoardConfig::new(4, 0, 0).is_err());
    }

    #[test]
    fn accepts_mine_free_board() {
        assert!(BoardConfig::new(1, 1, 0).is_ok());
    }

    #[test]
    fn difficulty_parses_case_insensitively() {
        assert_eq!("Medium".parse(), Ok(Difficulty::Medium));
        assert_eq!(" hard ".parse(), Ok(Difficulty::Hard));
        assert!("expert".parse::<Difficulty>().is_err());
        assert_eq!(Difficulty::default().to_string(), "easy");
    }
}
