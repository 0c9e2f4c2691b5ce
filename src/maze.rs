use crate::cell::Cell;
use crate::error::{MazeError, Result};
use crate::grid::{Direction, Grid, GridIter, Position};

/// Wall state for a `width` x `height` rectangle of cells.
///
/// Walls between neighbors are stored on both cells and every mutation goes
/// through [`Maze::open_between`] (or the crate-internal `carve`), which
/// clears both sides together.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Maze {
    grid: Grid<Cell>,
}

impl Maze {
    pub fn new(width: usize, height: usize) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(MazeError::InvalidDimension { width, height });
        }

        Ok(Self {
            grid: Grid::new(width, height, &mut |_, _| Cell::default()),
        })
    }

    pub fn width(&self) -> usize {
        self.grid.width()
    }

    pub fn height(&self) -> usize {
        self.grid.height()
    }

    pub fn size(&self) -> usize {
        self.grid.size()
    }

    pub fn entrance(&self) -> Position {
        (0, 0)
    }

    pub fn exit(&self) -> Position {
        (self.width() - 1, self.height() - 1)
    }

    pub fn cell(&self, (x, y): Position) -> Option<&Cell> {
        self.grid.get(x, y)
    }

    pub fn cells(&self) -> GridIter<Cell> {
        self.grid.iter()
    }

    pub fn neighbors_of(&self, (x, y): Position) -> Vec<(Direction, Position)> {
        self.grid.get_neighbor_positions(x, y)
    }

    pub fn neighbor(&self, (x, y): Position, direction: Direction) -> Option<Position> {
        self.grid.get_neighbor_position(x, y, direction)
    }

    /// Direction from `from` to `to` when both are in bounds and share an edge.
    pub fn direction_between(&self, from: Position, to: Position) -> Option<Direction> {
        if !self.grid.contains(from.0, from.1) || !self.grid.contains(to.0, to.1) {
            return None;
        }

        Direction::between(from, to)
    }

    /// Whether the cell at `position` has its wall up on `direction`.
    /// Out-of-bounds positions report every wall as present.
    pub fn has_wall(&self, position: Position, direction: Direction) -> bool {
        self.cell(position).map_or(true, |cell| cell.has_wall(direction))
    }

    pub fn open_between(&mut self, from: Position, to: Position) -> Result<()> {
        let direction = self
            .direction_between(from, to)
            .ok_or(MazeError::NotAdjacent { from, to })?;

        self.carve(from, direction);

        Ok(())
    }

    pub fn is_open(&self, from: Position, to: Position) -> bool {
        match self.direction_between(from, to) {
            Some(direction) => !self.has_wall(from, direction),
            None => false,
        }
    }

    /// Clears the wall between `from` and its neighbor on `direction` on both
    /// sides, returning the neighbor. `None` leaves the maze untouched.
    pub(crate) fn carve(&mut self, from: Position, direction: Direction) -> Option<Position> {
        let to = self.neighbor(from, direction)?;

        self.set_wall(from, direction, false);
        self.set_wall(to, direction.invert(), false);

        Some(to)
    }

    /// Opens the north wall of the entrance and the south wall of the exit.
    pub fn open_entrance_and_exit(&mut self) {
        let entrance = self.entrance();
        let exit = self.exit();

        self.set_wall(entrance, Direction::North, false);
        self.set_wall(exit, Direction::South, false);
    }

    fn set_wall(&mut self, (x, y): Position, direction: Direction, present: bool) {
        if let Some(cell) = self.grid.get_mut(x, y) {
            cell.walls[direction] = present;
        }
    }

    pub fn is_visited(&self, position: Position) -> bool {
        self.cell(position).map_or(false, Cell::visited)
    }

    pub fn set_visited(&mut self, (x, y): Position, visited: bool) {
        if let Some(cell) = self.grid.get_mut(x, y) {
            cell.visited = visited;
        }
    }

    pub fn reset_visited(&mut self) {
        for cell in self.grid.iter_mut() {
            cell.visited = false;
        }
    }

    /// Number of open walls between pairs of cells inside the maze.
    pub fn open_edge_count(&self) -> usize {
        self.cells()
            .map(|(x, y, cell)| {
                [Direction::East, Direction::South]
                    .into_iter()
                    .filter(|&direction| {
                        !cell.has_wall(direction) && self.neighbor((x, y), direction).is_some()
                    })
                    .count()
            })
            .sum()
    }
}
