use std::fmt;

use minesweeper_core::{Board, GameState, Marker, Tile};

/// Character drawn for a tile. The game state only matters for revealed mines.
pub fn glyph(tile: &Tile, state: GameState) -> char {
    // flags stay on the board after the game ends
    if !tile.is_revealed() || tile.marker() == Marker::Flag {
        return match tile.marker() {
            Marker::Flag => 'F',
            Marker::QuestionMark => '?',
            Marker::None | Marker::FalseFlag => '#',
        };
    }

    if tile.is_mine() {
        return match state {
            GameState::Won => 'o',
            GameState::Active | GameState::Lost => '*',
        };
    }

    match (tile.marker(), tile.surrounding_mines()) {
        (Marker::FalseFlag, _) => 'X',
        (_, 0) => '.',
        (_, count) => char::from(b'0' + count),
    }
}

/// Text rendering of a whole board with row/column labels and counters.
pub struct BoardView<'a>(pub &'a Board);

impl fmt::Display for BoardView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let board = self.0;
        let state = board.state();
        let (_, columns) = board.size();

        write!(f, "    ")?;
        for column in 0..columns {
            write!(f, "{:>3}", column)?;
        }
        writeln!(f)?;

        for (row, tiles) in board.grid().rows().into_iter().enumerate() {
            write!(f, "{:>3} ", row)?;
            for tile in tiles {
                write!(f, "{:>3}", glyph(tile, state))?;
            }
            writeln!(f)?;
        }

        write!(
            f,
            "mines left: {}  tiles left: {}",
            board.mines_left(),
            board.tiles_left()
        )
    }
}
