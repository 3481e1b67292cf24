//! `pathkit path` command - search a grid from start to goal

use std::time::Instant;

use serde::Serialize;

use crate::cli::{Algorithm, OutputFormat, PathArgs};
use crate::commands::dispatch::trace_command;
use crate::commands::dispatch::CommandContext;
use pathkit_core::bail_usage;
use pathkit_core::error::Result;
use pathkit_core::grid::{Grid, Pos};
use pathkit_core::search::{Cost, Graph, SearchResult, SearchStatus};

/// JSON shape of a path search
#[derive(Debug, Serialize)]
struct PathReport {
    algorithm: &'static str,
    status: SearchStatus,
    found: bool,
    cost: Option<Cost>,
    steps: usize,
    /// `[row, col]` pairs from start to end
    path: Vec<[usize; 2]>,
}

/// Execute the path command
#[tracing::instrument(skip_all, fields(grid = %args.grid.display(), algorithm = args.algorithm.as_str()))]
pub fn execute(ctx: &CommandContext, args: &PathArgs) -> Result<()> {
    let (grid, config) = ctx.load_grid(&args.grid, args.diagonal)?;
    let Some(goal) = grid.goal() else {
        bail_usage!(format!(
            "grid {} has no goal cell '{}'",
            args.grid.display(),
            config.goal
        ));
    };
    let step_limit = args.step_limit.or(config.step_limit);
    if step_limit.is_some() && args.algorithm != Algorithm::Astar {
        tracing::warn!("--step-limit only applies to astar; ignoring");
    }

    let search_start = Instant::now();
    let start = grid.start();
    let result = match args.algorithm {
        Algorithm::Bfs => grid.bfs(start, |&p| p == goal),
        Algorithm::Dfs => grid.dfs(start, |&p| p == goal),
        Algorithm::Dijkstra => grid.dijkstra([start], |&p| p == goal)?,
        Algorithm::Astar => grid.a_star([start], &goal, step_limit)?,
    };
    pathkit_core::trace_time!(search_start, "path_search", visited = result.distances().len());
    trace_command!(ctx.start, "path_search_done");

    let path = result.path();
    let cost = path_cost(&grid, &path);

    match ctx.cli.format {
        OutputFormat::Json => {
            let report = PathReport {
                algorithm: args.algorithm.as_str(),
                status: result.status(),
                found: result.is_found(),
                cost,
                steps: result.steps(),
                path: path.iter().map(|p| [p.row, p.col]).collect(),
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Human => print_human(ctx, &result, &path, cost),
    }

    Ok(())
}

/// Sum of entry costs along `path`, `None` when there is no path
fn path_cost(grid: &Grid, path: &[Pos]) -> Option<Cost> {
    if path.is_empty() {
        return None;
    }
    Some(path.iter().skip(1).filter_map(|&p| grid.cost_at(p)).sum())
}

fn print_human(ctx: &CommandContext, result: &SearchResult<Pos>, path: &[Pos], cost: Option<Cost>) {
    println!("status: {}", result.status().as_str());
    if path.is_empty() {
        return;
    }

    if let Some(cost) = cost {
        println!("cost: {}", cost);
    }
    println!("steps: {}", result.steps());
    if !ctx.cli.quiet {
        let cells: Vec<String> = path.iter().map(|p| p.to_string()).collect();
        println!("path: {}", cells.join(" -> "));
    }
}
