use thiserror::Error;

use crate::grid::Position;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MazeError {
    #[error("invalid maze dimensions {width}x{height}: both must be at least 1")]
    InvalidDimension { width: usize, height: usize },

    #[error("cells {from:?} and {to:?} are not adjacent")]
    NotAdjacent { from: Position, to: Position },
}

pub type Result<T> = std::result::Result<T, MazeError>;
