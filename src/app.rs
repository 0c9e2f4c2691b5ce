use crate::ascii;
use crate::cli::AppConfig;

use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, info, warn};
use maze_backtracker::{Generator, Maze, MazeEvent, Observer, Solution, Solver};
use std::time::Duration;

/// Tallies solver moves for the summary log line
#[derive(Debug, Default)]
struct MoveStats {
    forward: usize,
    undone: usize,
}

impl Observer for MoveStats {
    fn handle_event(&mut self, event: &MazeEvent) {
        if let MazeEvent::Move { undone, .. } = event {
            if *undone {
                self.undone += 1;
            } else {
                self.forward += 1;
            }
        }
    }
}

pub struct MazeApp {
    config: AppConfig,
}

impl MazeApp {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        let maze = Maze::new(self.config.size.width, self.config.size.height)?;
        let generator = Generator::new(maze, self.config.seed);

        info!("Using seed: {}", generator.seed());

        // Progress bar
        let progress = if self.config.progress {
            ProgressBar::new(self.config.size.area() as u64)
        } else {
            ProgressBar::hidden()
        };
        progress.enable_steady_tick(Duration::from_millis(200));
        progress.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos:>5}/{len}")?
                .progress_chars("#>-"),
        );

        let mut on_carve = |event: &MazeEvent| {
            if let MazeEvent::CellFinalized(_) = event {
                progress.inc(1);
            }
        };

        let mut maze = generator.finish(&mut on_carve);

        progress.finish_and_clear();
        info!("maze created");

        let solution = if self.config.solve {
            Some(self.solve(&mut maze))
        } else {
            None
        };

        #[cfg(feature = "serde")]
        if self.config.json {
            let output = serde_json::json!({
                "maze": maze,
                "solution": solution,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);

            return Ok(());
        }

        let path = solution.map(|s| s.path).unwrap_or_default();
        println!("{}", ascii::render(&maze, &path));

        Ok(())
    }

    fn solve(&self, maze: &mut Maze) -> Solution {
        let mut stats = MoveStats::default();
        let solution = Solver::new(maze).solve(&mut stats);

        debug!(
            "{} moves, {} of them undone",
            stats.forward + stats.undone,
            stats.undone
        );

        if solution.solved {
            info!("maze solved!");
        } else {
            warn!("maze cannot be solved!");
        }

        maze.reset_visited();

        solution
    }
}
