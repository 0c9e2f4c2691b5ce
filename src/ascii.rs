use std::collections::HashSet;

use maze_backtracker::{Direction, Maze, Position};

/// Text picture of the maze, marking the cells on `path` with `*`.
pub fn render(maze: &Maze, path: &[Position]) -> String {
    let on_path: HashSet<Position> = path.iter().copied().collect();
    let mut output = String::new();

    for y in 0..maze.height() {
        for x in 0..maze.width() {
            output.push('+');
            output.push_str(if maze.has_wall((x, y), Direction::North) { "---" } else { "   " });
        }
        output.push_str("+\n");

        for x in 0..maze.width() {
            output.push(if maze.has_wall((x, y), Direction::West) { '|' } else { ' ' });
            output.push_str(if on_path.contains(&(x, y)) { " * " } else { "   " });
        }
        let last = (maze.width() - 1, y);
        output.push(if maze.has_wall(last, Direction::East) { '|' } else { ' ' });
        output.push('\n');
    }

    let bottom = maze.height() - 1;
    for x in 0..maze.width() {
        output.push('+');
        output.push_str(if maze.has_wall((x, bottom), Direction::South) { "---" } else { "   " });
    }
    output.push('+');

    output
}
