use enum_map::{enum_map, EnumMap};

use crate::grid::Direction;

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    /// `true` while the wall on that side blocks movement.
    pub(crate) walls: EnumMap<Direction, bool>,
    pub(crate) visited: bool,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            walls: enum_map! { _ => true },
            visited: false,
        }
    }
}

impl Cell {
    pub fn has_wall(&self, direction: Direction) -> bool {
        self.walls[direction]
    }

    pub fn visited(&self) -> bool {
        self.visited
    }

    pub fn open_sides(&self) -> Vec<Direction> {
        self.walls
            .iter()
            .filter(|(_, present)| !**present)
            .map(|(direction, _)| direction)
            .collect()
    }
}
