use serde::{Deserialize, Serialize};

use crate::*;

/// Player annotation drawn on top of a tile.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Marker {
    None,
    Flag,
    QuestionMark,
    /// End-of-game display state: flagged, but not a mine.
    FalseFlag,
}

impl Marker {
    /// Next marker in the player cycle `None -> Flag -> QuestionMark -> None`.
    pub const fn cycled(self) -> Self {
        use Marker::*;
        match self {
            None => Flag,
            Flag => QuestionMark,
            QuestionMark => None,
            FalseFlag => FalseFlag,
        }
    }

    /// Whether a player can set this marker directly.
    pub const fn is_player_marker(self) -> bool {
        !matches!(self, Self::FalseFlag)
    }
}

impl Default for Marker {
    fn default() -> Self {
        Self::None
    }
}

/// One cell of the board.
///
/// Tiles carry no handle to their board. Board-level facts a display needs,
/// such as whether the game has ended, are passed in by the caller.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    row: Coord,
    column: Coord,
    mine: bool,
    revealed: bool,
    surrounding_mines: u8,
    marker: Marker,
}

impl Tile {
    pub const fn new((row, column): Coord2) -> Self {
        Self {
            row,
            column,
            mine: false,
            revealed: false,
            surrounding_mines: 0,
            marker: Marker::None,
        }
    }

    pub const fn row(&self) -> Coord {
        self.row
    }

    pub const fn column(&self) -> Coord {
        self.column
    }

    pub const fn coords(&self) -> Coord2 {
        (self.row, self.column)
    }

    pub const fn is_mine(&self) -> bool {
        self.mine
    }

    pub const fn is_revealed(&self) -> bool {
        self.revealed
    }

    pub const fn surrounding_mines(&self) -> u8 {
        self.surrounding_mines
    }

    pub const fn marker(&self) -> Marker {
        self.marker
    }

    /// Clears play state, keeping coordinates.
    pub(crate) fn reset(&mut self) {
        self.mine = false;
        self.revealed = false;
        self.surrounding_mines = 0;
        self.marker = Marker::None;
    }

    pub(crate) fn set_mine(&mut self, mine: bool) {
        self.mine = mine;
    }

    pub(crate) fn set_revealed(&mut self) {
        self.revealed = true;
    }

    pub(crate) fn set_marker(&mut self, marker: Marker) {
        self.marker = marker;
    }

    pub(crate) fn set_surrounding_mines(&mut self, count: u8) {
        debug_assert!(count <= 8);
        self.surrounding_mines = count;
    }

    pub(crate) fn add_surrounding_mine(&mut self) {
        self.set_surrounding_mines(self.surrounding_mines + 1);
    }

    pub(crate) fn remove_surrounding_mine(&mut self) {
        self.surrounding_mines = self.surrounding_mines.saturating_sub(1);
    }
}
