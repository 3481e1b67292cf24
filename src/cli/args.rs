use clap::{Args, ValueEnum};
use std::path::PathBuf;

/// Search algorithm used by `pathkit path`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Algorithm {
    /// Fewest moves, ignoring cell costs
    Bfs,
    /// Any path, depth first
    Dfs,
    /// Cheapest path
    Dijkstra,
    /// Cheapest path guided by distance to the goal
    #[default]
    Astar,
}

impl Algorithm {
    pub fn as_str(self) -> &'static str {
        match self {
            Algorithm::Bfs => "bfs",
            Algorithm::Dfs => "dfs",
            Algorithm::Dijkstra => "dijkstra",
            Algorithm::Astar => "astar",
        }
    }
}

#[derive(Args, Debug)]
pub struct PathArgs {
    /// Grid file
    pub grid: PathBuf,

    /// Search algorithm
    #[arg(long, short, value_enum, default_value_t)]
    pub algorithm: Algorithm,

    /// Allow diagonal moves (overrides config)
    #[arg(long)]
    pub diagonal: bool,

    /// Stop A* after this many expansions (overrides config)
    #[arg(long)]
    pub step_limit: Option<usize>,
}

#[derive(Args, Debug)]
pub struct LevelsArgs {
    /// Grid file
    pub grid: PathBuf,

    /// Allow diagonal moves (overrides config)
    #[arg(long)]
    pub diagonal: bool,
}

#[derive(Args, Debug)]
pub struct MixArgs {
    /// File with one integer per line
    pub input: PathBuf,

    /// Multiply every value by this key before mixing
    #[arg(long, short, default_value_t = 1, allow_negative_numbers = true)]
    pub key: i64,

    /// Number of mixing rounds
    #[arg(long, short, default_value_t = 1)]
    pub rounds: usize,
}
