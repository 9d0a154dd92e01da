pub mod config;
pub mod logging;

pub mod fetch;
pub mod generator;
pub mod legacy;
pub mod package;
pub mod provider;
pub mod server;
pub mod template;
pub mod user_agent;

pub use package::{Package, Resolver};
