//! CLI subcommand implementations.

pub mod adjust;
pub mod round;
pub mod util;
