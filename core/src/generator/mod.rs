use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;
pub use random::*;

mod random;

/// Source of mine placements for a fresh game.
///
/// The board validates whatever a generator returns, so a generator only has
/// to care about where the mines go.
pub trait MineGenerator {
    fn generate(&mut self, config: GameConfig) -> MineLayout;
}

/// Fixed set of mine positions, indexed `[row, column]`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "MineLayoutFields")]
pub struct MineLayout {
    mine_mask: Array2<bool>,
    mine_count: CellCount,
}

#[derive(Deserialize)]
struct MineLayoutFields {
    mine_mask: Array2<bool>,
    mine_count: CellCount,
}

impl TryFrom<MineLayoutFields> for MineLayout {
    type Error = GameError;

    fn try_from(fields: MineLayoutFields) -> Result<Self> {
        let layout = Self::from_mine_mask(fields.mine_mask)?;
        if layout.mine_count != fields.mine_count {
            return Err(GameError::MineCountMismatch);
        }
        Ok(layout)
    }
}

impl MineLayout {
    pub fn from_mine_mask(mine_mask: Array2<bool>) -> Result<Self> {
        let (rows, columns) = mine_mask.dim();
        if rows == 0 || columns == 0 {
            return Err(GameError::InvalidDimensions);
        }
        if rows > usize::from(Coord::MAX) || columns > usize::from(Coord::MAX) {
            return Err(GameError::InvalidBoardShape);
        }

        let mine_count = mine_mask.iter().filter(|&&is_mine| is_mine).count();
        Ok(Self {
            mine_mask,
            // bounded by `Coord::MAX * Coord::MAX`
            mine_count: mine_count as CellCount,
        })
    }

    pub fn from_mine_coords(size: Coord2, mine_coords: &[Coord2]) -> Result<Self> {
        if size.0 == 0 || size.1 == 0 {
            return Err(GameError::InvalidDimensions);
        }

        let mut mine_mask: Array2<bool> = Array2::default(size.to_nd_index());
        for &coords in mine_coords {
            if !in_bounds(coords, size) {
                return Err(GameError::InvalidCoords);
            }
            mine_mask[coords.to_nd_index()] = true;
        }

        Self::from_mine_mask(mine_mask)
    }

    pub fn game_config(&self) -> GameConfig {
        GameConfig::new_unchecked(self.size(), self.mine_count)
    }

    pub fn size(&self) -> Coord2 {
        let (rows, columns) = self.mine_mask.dim();
        (rows as Coord, columns as Coord)
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn contains_mine(&self, coords: Coord2) -> bool {
        in_bounds(coords, self.size()) && self[coords]
    }
}

impl Index<Coord2> for MineLayout {
    type Output = bool;

    fn index(&self, (row, column): Coord2) -> &Self::Output {
        &self.mine_mask[(row as usize, column as usize)]
    }
}

/// Replays the same layout on every reset.
impl MineGenerator for MineLayout {
    fn generate(&mut self, _config: GameConfig) -> MineLayout {
        self.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_from_coords_counts_duplicates_once() {
        let layout = MineLayout::from_mine_coords((3, 4), &[(0, 0), (2, 3), (0, 0)]).unwrap();

        assert_eq!(layout.size(), (3, 4));
        assert_eq!(layout.mine_count(), 2);
        assert!(layout.contains_mine((2, 3)));
        assert!(!layout.contains_mine((1, 1)));
        assert!(!layout.contains_mine((3, 0)));
    }

    #[test]
    fn layout_rejects_out_of_range_mines() {
        assert_eq!(
            MineLayout::from_mine_coords((2, 2), &[(2, 0)]),
            Err(GameError::InvalidCoords)
        );
    }

    #[test]
    fn layout_rejects_empty_grid() {
        assert_eq!(
            MineLayout::from_mine_coords((0, 3), &[]),
            Err(GameError::InvalidDimensions)
        );
    }

    #[test]
    fn layout_reports_its_config() {
        let layout = MineLayout::from_mine_coords((2, 5), &[(1, 4)]).unwrap();
        let config = layout.game_config();

        assert_eq!(config.size(), (2, 5));
        assert_eq!(config.mines(), 1);
    }

    #[test]
    fn layout_from_json_must_agree_with_its_mask() {
        let layout = MineLayout::from_mine_coords((3, 3), &[(1, 1)]).unwrap();
        let mut json = serde_json::to_value(&layout).unwrap();

        let restored: MineLayout = serde_json::from_value(json.clone()).unwrap();
        assert_eq!(restored, layout);

        json["mine_count"] = serde_json::Value::from(5);
        assert!(serde_json::from_value::<MineLayout>(json).is_err());
    }
}
