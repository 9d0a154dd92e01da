//! CLI command handlers.

mod providers;
mod resolve;
mod serve;

pub use providers::run_providers;
pub use resolve::run_resolve;
pub use serve::{run_serve, ServeOverrides};
