//! Command trait and context for dispatching commands

use std::fs;
use std::path::Path;
use std::time::Instant;

use crate::cli::{Cli, Commands};
use pathkit_core::config::GridConfig;
use pathkit_core::error::{PathkitError, Result};
use pathkit_core::grid::Grid;

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, start: Instant) -> Self {
        Self { cli, start }
    }

    /// Grid legend from `--config`, `$PATHKIT_CONFIG_DIR` or the user config dir
    pub fn grid_config(&self) -> Result<GridConfig> {
        GridConfig::load(self.cli.config.as_deref())
    }

    /// Read and parse a grid file, with `--diagonal` forcing diagonal moves on
    pub fn load_grid(&self, path: &Path, diagonal: bool) -> Result<(Grid, GridConfig)> {
        let mut config = self.grid_config()?;
        config.diagonal |= diagonal;

        let text = fs::read_to_string(path).map_err(|e| {
            PathkitError::Other(format!("failed to read {}: {}", path.display(), e))
        })?;
        let grid = Grid::parse(&text, &config)?;
        super::trace_command!(self.start, "grid_loaded");
        Ok((grid, config))
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("pathkit {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Graph search and ring mixing for puzzle inputs.");
        println!();
        println!("Run `pathkit --help` for usage information.");
        Ok(())
    }
}

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Commands::Path(args) => crate::commands::path::execute(ctx, args),
            Commands::Levels(args) => crate::commands::levels::execute(ctx, args),
            Commands::Mix(args) => crate::commands::mix::execute(ctx, args),
        }
    }
}
