//! Command-line interface module.

mod args;
pub mod check;
pub mod permalink;
pub mod resolve;

pub use args::{Cli, Commands, PermalinkArgs, ResolveArgs};
