use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum BingoError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(#[from] InvalidArgument),
}

/// Reason a caller-supplied identifier was refused.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum InvalidArgument {
    #[error("player name is required")]
    MissingPlayerName,
    #[error("cell key is required")]
    MissingCellKey,
    #[error("cell key collides with the `name` field")]
    ReservedCellKey,
    #[error("cell key is not on the board")]
    UnknownCell,
}

pub type Result<T> = core::result::Result<T, BingoError>;
