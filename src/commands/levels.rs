//! `pathkit levels` command - BFS level sizes from the start cell

use serde_json::json;

use crate::cli::{LevelsArgs, OutputFormat};
use crate::commands::dispatch::trace_command;
use crate::commands::dispatch::CommandContext;
use pathkit_core::error::Result;
use pathkit_core::search::Graph;

/// Execute the levels command
#[tracing::instrument(skip_all, fields(grid = %args.grid.display()))]
pub fn execute(ctx: &CommandContext, args: &LevelsArgs) -> Result<()> {
    let (grid, _) = ctx.load_grid(&args.grid, args.diagonal)?;
    let counts: Vec<(usize, usize)> = grid
        .levels(grid.start())
        .map(|level| (level.index, level.nodes.len()))
        .collect();
    trace_command!(ctx.start, "levels_done");

    match ctx.cli.format {
        OutputFormat::Json => {
            let output: Vec<_> = counts
                .iter()
                .map(|&(level, count)| json!({ "level": level, "count": count }))
                .collect();
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            for (level, count) in &counts {
                println!("level {}: {}", level, count);
            }
            if !ctx.cli.quiet {
                let total: usize = counts.iter().map(|&(_, count)| count).sum();
                println!("reachable: {}", total);
            }
        }
    }

    Ok(())
}
