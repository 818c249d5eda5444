use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Canvas size is not an exact multiple of the cell size")]
    CanvasNotDivisible,
    #[error("Grid cannot fit the starting snake and its food")]
    GridTooSmall,
    #[error("Grid dimensions exceed the supported coordinate range")]
    GridTooLarge,
}

pub type Result<T> = core::result::Result<T, GameError>;
