pub mod cell;
pub mod error;
pub mod generator;
pub mod grid;
pub mod maze;
pub mod observer;
pub mod solver;

pub use cell::Cell;
pub use error::MazeError;
pub use generator::{generate, Generator};
pub use grid::{Direction, Position, Size};
pub use maze::Maze;
pub use observer::{EventLog, MazeEvent, NoopObserver, Observer};
pub use solver::{solve, Solution, Solver};
