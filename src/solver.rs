use log::{debug, trace};

use crate::grid::{Direction, Position};
use crate::maze::Maze;
use crate::observer::{MazeEvent, Observer};

/// Order in which the solver tries the sides of a cell.
const SEARCH_ORDER: [Direction; 4] = [
    Direction::West,
    Direction::East,
    Direction::North,
    Direction::South,
];

#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Solution {
    pub solved: bool,
    /// Entrance to exit; empty unless `solved`.
    pub path: Vec<Position>,
}

/// Depth-first search from the entrance to the exit.
///
/// The maze must have every `visited` flag cleared before the solver is
/// created; call [`Maze::reset_visited`] between repeated solves.
pub struct Solver<'a> {
    maze: &'a mut Maze,
    stack: Vec<Position>,
    solved: bool,
}

impl<'a> Solver<'a> {
    pub fn new(maze: &'a mut Maze) -> Self {
        let start = maze.entrance();
        maze.set_visited(start, true);

        let mut stack = Vec::with_capacity(maze.size());
        stack.push(start);

        Self {
            maze,
            stack,
            solved: false,
        }
    }

    pub fn done(&self) -> bool {
        self.solved || self.stack.is_empty()
    }

    pub fn tick<O>(&mut self, observer: &mut O) -> bool
    where
        O: Observer + ?Sized,
    {
        if self.done() {
            return false;
        }

        let current = match self.stack.last() {
            None => return false,
            Some(&position) => position,
        };

        if current == self.maze.exit() {
            self.solved = true;
            return false;
        }

        match self.next_step(current) {
            Some(next) => {
                observer.handle_event(&MazeEvent::Move {
                    from: current,
                    to: next,
                    undone: false,
                });

                self.maze.set_visited(next, true);
                self.stack.push(next);
            }
            None => {
                self.stack.pop();

                if let Some(&parent) = self.stack.last() {
                    trace!("backtrack {:?} -> {:?}", current, parent);

                    observer.handle_event(&MazeEvent::Move {
                        from: parent,
                        to: current,
                        undone: true,
                    });
                }
            }
        }

        true
    }

    fn next_step(&self, current: Position) -> Option<Position> {
        SEARCH_ORDER.into_iter().find_map(|direction| {
            if self.maze.has_wall(current, direction) {
                return None;
            }

            self.maze
                .neighbor(current, direction)
                .filter(|&next| !self.maze.is_visited(next))
        })
    }

    pub fn solution(&self) -> Solution {
        if self.solved {
            Solution {
                solved: true,
                path: self.stack.clone(),
            }
        } else {
            Solution::default()
        }
    }

    pub fn solve<O>(mut self, observer: &mut O) -> Solution
    where
        O: Observer + ?Sized,
    {
        while self.tick(observer) {}

        let solution = self.solution();

        debug!(
            "Solve finished: solved={} path length={}",
            solution.solved,
            solution.path.len()
        );

        solution
    }
}

pub fn solve<O>(maze: &mut Maze, observer: &mut O) -> Solution
where
    O: Observer + ?Sized,
{
    Solver::new(maze).solve(observer)
}
