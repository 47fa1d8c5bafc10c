#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use board::*;
pub use error::*;
pub use generator::*;
pub use tile::*;
pub use types::*;

mod board;
mod error;
mod generator;
mod tile;
mod types;

/// Board dimensions and mine count a game is (re)started with.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "GameConfigFields")]
pub struct GameConfig {
    size: Coord2,
    mines: CellCount,
}

/// Unchecked wire form, deserialized values go through `GameConfig::new`.
#[derive(Deserialize)]
struct GameConfigFields {
    size: Coord2,
    mines: CellCount,
}

impl TryFrom<GameConfigFields> for GameConfig {
    type Error = GameError;

    fn try_from(fields: GameConfigFields) -> Result<Self> {
        Self::new(fields.size, fields.mines)
    }
}

impl GameConfig {
    pub(crate) const fn new_unchecked(size: Coord2, mines: CellCount) -> Self {
        Self { size, mines }
    }

    /// Rejects empty boards and caps `mines` at the number of tiles.
    pub fn new((rows, columns): Coord2, mines: CellCount) -> Result<Self> {
        if rows == 0 || columns == 0 {
            return Err(GameError::InvalidDimensions);
        }

        let total_tiles = mult(rows, columns);
        if mines > total_tiles {
            log::warn!(
                "Requested {} mines but only {} tiles fit, capping",
                mines,
                total_tiles
            );
        }

        Ok(Self::new_unchecked((rows, columns), mines.min(total_tiles)))
    }

    pub const fn size(&self) -> Coord2 {
        self.size
    }

    pub const fn rows(&self) -> Coord {
        self.size.0
    }

    pub const fn columns(&self) -> Coord {
        self.size.1
    }

    pub const fn mines(&self) -> CellCount {
        self.mines
    }

    pub const fn total_tiles(&self) -> CellCount {
        mult(self.size.0, self.size.1)
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum MarkOutcome {
    NoChange,
    Changed,
}

impl MarkOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Changed => true,
        }
    }
}

/// Outcome of revealing a tile
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum RevealOutcome {
    NoChange,
    Revealed,
    HitMine,
    Won,
}

impl RevealOutcome {
    /// Whether this outcome could have caused an update to the board
    pub const fn has_update(self) -> bool {
        use RevealOutcome::*;
        match self {
            NoChange => false,
            Revealed => true,
            HitMine => true,
            Won => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_rejects_empty_board() {
        assert_eq!(GameConfig::new((0, 5), 1), Err(GameError::InvalidDimensions));
        assert_eq!(GameConfig::new((5, 0), 0), Err(GameError::InvalidDimensions));
    }

    #[test]
    fn config_caps_mines_at_tile_count() {
        let config = GameConfig::new((3, 4), 500).unwrap();

        assert_eq!(config.mines(), 12);
        assert_eq!(config.total_tiles(), 12);
        assert_eq!((config.rows(), config.columns()), (3, 4));
    }

    #[test]
    fn config_keeps_zero_mines() {
        assert_eq!(GameConfig::new((5, 5), 0).unwrap().mines(), 0);
    }

    #[test]
    fn config_reads_from_json() {
        let config: GameConfig = serde_json::from_str(r#"{"size":[16,30],"mines":99}"#).unwrap();

        assert_eq!(config, GameConfig::new((16, 30), 99).unwrap());
    }

    #[test]
    fn config_from_json_is_validated() {
        let empty = serde_json::from_str::<GameConfig>(r#"{"size":[0,30],"mines":1}"#);
        assert!(empty.is_err());

        let config: GameConfig = serde_json::from_str(r#"{"size":[2,2],"mines":9}"#).unwrap();
        assert_eq!(config.mines(), 4);
    }
}
