//! shader-embed - bakes shader sources into a C++ header
//!
//! The work lives in the workspace crates:
//! - `embed-core` - collection and header emission
//! - `embed-config` - optional `shader-embed.toml` settings
//!
//! This crate holds the command line layer so integration tests can drive it.

pub mod cli;

pub use cli::{Invocation, Summary, run};
