//! Macros for command timing

/// Log elapsed time since CLI start for a command phase
///
/// Usage:
/// ```ignore
/// trace_command!(ctx.start, "grid_loaded");
/// ```
macro_rules! trace_command {
    ($start:expr, $label:expr) => {
        ::tracing::debug!(elapsed = ?$start.elapsed(), $label);
    };
}

pub(crate) use trace_command;
