//! Command dispatch logic for pathkit

use std::time::Instant;

use crate::cli::Cli;
use pathkit_core::error::Result;

mod command;
mod macros;

pub use command::CommandContext;
use command::{Command, NoCommand};
pub(crate) use macros::trace_command;

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let ctx = CommandContext::new(cli, start);

    match &cli.command {
        None => NoCommand.execute(&ctx),
        Some(cmd) => cmd.execute(&ctx),
    }
}
