use log::{debug, trace};
use rand::rngs::OsRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_xorshift::XorShiftRng;

use crate::error::Result;
use crate::grid::Position;
use crate::maze::Maze;
use crate::observer::{MazeEvent, Observer};

/// Randomized recursive backtracker over an explicit stack.
///
/// Each [`Generator::tick`] performs one push (carving into an unvisited
/// neighbor) or one pop (backtracking from a dead end), so a renderer can
/// animate the carve one step at a time.
pub struct Generator {
    maze: Maze,
    rng: XorShiftRng,
    seed: u64,
    stack: Vec<Position>,
    carved: usize,
}

impl Generator {
    pub fn new(mut maze: Maze, seed: Option<u64>) -> Self {
        let seed = seed.unwrap_or_else(|| {
            let seed: u64 = OsRng.gen();
            debug!("Drew seed {} from the OS", seed);
            seed
        });

        maze.open_entrance_and_exit();

        let start = maze.entrance();
        maze.set_visited(start, true);

        let mut stack = Vec::with_capacity(maze.size());
        stack.push(start);

        debug!(
            "Carving {}x{} maze from {:?}",
            maze.width(),
            maze.height(),
            start
        );

        Self {
            maze,
            rng: XorShiftRng::seed_from_u64(seed),
            seed,
            stack,
            carved: 1,
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn maze(&self) -> &Maze {
        &self.maze
    }

    pub fn done(&self) -> bool {
        self.stack.is_empty()
    }

    /// Cells not yet reached by the carve.
    pub fn remaining(&self) -> usize {
        self.maze.size() - self.carved
    }

    pub fn tick<O>(&mut self, observer: &mut O) -> bool
    where
        O: Observer + ?Sized,
    {
        let current = match self.stack.last() {
            None => return false,
            Some(&position) => position,
        };

        let choices: Vec<_> = self
            .maze
            .neighbors_of(current)
            .into_iter()
            .filter(|&(_, position)| !self.maze.is_visited(position))
            .collect();

        match choices.choose(&mut self.rng) {
            Some(&(direction, _)) => {
                if let Some(next) = self.maze.carve(current, direction) {
                    trace!("carve {:?} -> {:?}", current, next);

                    self.maze.set_visited(next, true);
                    self.stack.push(next);
                    self.carved += 1;
                }
            }
            None => {
                self.stack.pop();
                observer.handle_event(&MazeEvent::CellFinalized(current));
            }
        }

        true
    }

    /// Runs the carve to completion and hands back the maze with every
    /// `visited` flag cleared, ready for solving.
    pub fn finish<O>(mut self, observer: &mut O) -> Maze
    where
        O: Observer + ?Sized,
    {
        while self.tick(observer) {}

        self.maze.reset_visited();

        debug!(
            "Carved {} passages with seed {}",
            self.maze.open_edge_count(),
            self.seed
        );

        self.maze
    }
}

pub fn generate<O>(width: usize, height: usize, seed: Option<u64>, observer: &mut O) -> Result<Maze>
where
    O: Observer + ?Sized,
{
    let maze = Maze::new(width, height)?;

    Ok(Generator::new(maze, seed).finish(observer))
}
