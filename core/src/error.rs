use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Board needs at least one row and one column")]
    InvalidDimensions,
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Mine layout does not match the board size")]
    InvalidBoardShape,
    #[error("Mine count does not match the mine mask")]
    MineCountMismatch,
    #[error("False flags are only set by the end-of-game reveal")]
    ReservedMarker,
    #[error("Game already ended, no new moves are accepted")]
    AlreadyEnded,
}

pub type Result<T> = core::result::Result<T, GameError>;
