//! `pathkit mix` command - positional mixing of a number list

use std::fs;

use crate::cli::{MixArgs, OutputFormat};
use crate::commands::dispatch::trace_command;
use crate::commands::dispatch::CommandContext;
use pathkit_core::error::{PathkitError, Result};
use pathkit_core::ring::mixing::{mix, parse_numbers};

/// Execute the mix command
#[tracing::instrument(skip_all, fields(input = %args.input.display(), key = args.key, rounds = args.rounds))]
pub fn execute(ctx: &CommandContext, args: &MixArgs) -> Result<()> {
    let text = fs::read_to_string(&args.input).map_err(|e| {
        PathkitError::Other(format!("failed to read {}: {}", args.input.display(), e))
    })?;
    let values = parse_numbers(&text)?;
    let mixed = anchored_at_zero(mix(&values, args.key, args.rounds)?);
    trace_command!(ctx.start, "mix_done");

    match ctx.cli.format {
        OutputFormat::Json => println!("{}", serde_json::to_string(&mixed)?),
        OutputFormat::Human => {
            for value in &mixed {
                println!("{}", value);
            }
        }
    }

    Ok(())
}

/// Rotate so the sequence starts at `0` when present
fn anchored_at_zero(mut values: Vec<i64>) -> Vec<i64> {
    if let Some(zero) = values.iter().position(|&v| v == 0) {
        values.rotate_left(zero);
    }
    values
}
