//! CLI commands for pathkit

pub mod dispatch;
pub mod levels;
pub mod mix;
pub mod path;
