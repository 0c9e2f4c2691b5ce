use maze_backtracker::Size;
use structopt::StructOpt;
use structopt_flags::QuietVerbose;

#[derive(Debug)]
pub struct AppConfig {
    pub size: Size,
    pub seed: Option<u64>,
    pub solve: bool,
    pub progress: bool,
    #[cfg(feature = "serde")]
    pub json: bool,
}

#[derive(Debug, StructOpt)]
#[structopt(
    name = "Maze Backtracker",
    about = "Carve a perfect maze and find a path through it"
)]
pub struct Opt {
    #[structopt(flatten)]
    pub verbose: QuietVerbose,

    #[structopt(
        parse(try_from_str),
        short,
        long,
        default_value = "16x12",
        help = "Maze size in cells, columns x rows"
    )]
    size: Size,

    #[structopt(parse(try_from_str), long, help = "Random seed")]
    seed: Option<u64>,

    #[structopt(long, help = "Only carve the maze, skip solving it")]
    no_solve: bool,

    #[structopt(long, help = "Hide the progress bar while carving")]
    no_progress: bool,

    #[cfg(feature = "serde")]
    #[structopt(long, help = "Print the maze and solution as JSON")]
    json: bool,
}

impl Opt {
    pub fn to_app_config(self) -> Result<AppConfig, &'static str> {
        if self.size.width == 0 || self.size.height == 0 {
            Err("Maze size must be at least 1x1")?
        }

        Ok(AppConfig {
            size: self.size,
            seed: self.seed,
            solve: !self.no_solve,
            progress: !self.no_progress,
            #[cfg(feature = "serde")]
            json: self.json,
        })
    }
}
