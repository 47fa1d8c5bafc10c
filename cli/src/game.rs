use minesweeper_core::*;

use crate::command::Command;

/// What the front-end should do after a command.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Flow {
    Continue,
    Redraw,
    Quit,
}

/// A board plus the generator every new game draws its mines from.
pub struct Session<G> {
    board: Board,
    config: GameConfig,
    generator: G,
}

impl<G: MineGenerator> Session<G> {
    pub fn new(config: GameConfig, mut generator: G) -> Result<Self> {
        let board = Board::new_with(config, &mut generator)?;
        let mut session = Self {
            board,
            config,
            generator,
        };
        session.check_for_end();
        Ok(session)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Status line for a finished game.
    pub fn banner(&self) -> Option<&'static str> {
        match self.board.state() {
            GameState::Active => None,
            GameState::Won => Some("YOU WIN!"),
            GameState::Lost => Some("GAME OVER!"),
        }
    }

    pub fn apply(&mut self, command: Command) -> anyhow::Result<Flow> {
        match command {
            Command::Reveal(coords) => self.reveal(coords),
            Command::Mark(coords) => {
                let outcome = self.board.cycle_marker(coords)?;
                Ok(if outcome.has_update() {
                    Flow::Redraw
                } else {
                    Flow::Continue
                })
            }
            Command::New(config) => {
                if let Some(config) = config {
                    self.config = config;
                }
                self.board.reset_with(self.config, &mut self.generator)?;
                self.check_for_end();
                Ok(Flow::Redraw)
            }
            Command::Quit => Ok(Flow::Quit),
        }
    }

    /// Marked tiles and finished games are not revealable from the front-end.
    fn reveal(&mut self, coords: Coord2) -> anyhow::Result<Flow> {
        if self.board.is_finished() {
            anyhow::bail!("game is over, start a new one with `n`");
        }
        let tile = self.board.tile(coords).ok_or(GameError::InvalidCoords)?;
        if matches!(tile.marker(), Marker::Flag | Marker::QuestionMark) {
            anyhow::bail!("tile {coords:?} is marked, clear the marker first");
        }

        let outcome = self.board.reveal_tile(coords);
        log::debug!("reveal {:?}: {:?}", coords, outcome);
        self.check_for_end();

        Ok(if outcome.has_update() {
            Flow::Redraw
        } else {
            Flow::Continue
        })
    }

    fn check_for_end(&mut self) {
        if self.board.is_finished() {
            self.board.reveal_all_tiles();
        }
    }
}
