//! Command line surface
//!
//! `shader-embed <shaderDir> <outputFile>`. Any other argument count is a
//! usage error: the usage text is printed and nothing is read or written.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use embed_config::Config;

/// Printed for any argument count other than two
pub const USAGE: &str = "Usage: shader-embed <shaderDir> <outputFile>\n\
                         Settings are read from <shaderDir>/shader-embed.toml when present.";

/// Default `env_logger` filter, overridable through `RUST_LOG`
pub const DEFAULT_LOG_FILTER: &str = "warn,shader_embed=info,embed_core=info,embed_config=info";

/// What the process was asked to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    /// Collect `shader_dir` and write the header to `output`
    Embed { shader_dir: PathBuf, output: PathBuf },
    /// Wrong argument count
    Usage,
}

impl Invocation {
    /// Interpret the arguments following the program name
    pub fn from_args<I>(args: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<OsString>,
    {
        let mut args: Vec<OsString> = args.into_iter().map(Into::into).collect();
        if args.len() != 2 {
            return Invocation::Usage;
        }

        let output = PathBuf::from(args.pop().unwrap_or_default());
        let shader_dir = PathBuf::from(args.pop().unwrap_or_default());
        Invocation::Embed { shader_dir, output }
    }
}

/// Counts reported after a successful run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub text: usize,
    pub binary: usize,
}

/// Load the shader directory's configuration, collect, and emit
pub fn run(shader_dir: &Path, output: &Path) -> Result<Summary> {
    let config = Config::load_for_dir(shader_dir)
        .with_context(|| format!("failed to load configuration for {:?}", shader_dir))?;

    let set = embed_core::collect(shader_dir, &config.collect)
        .with_context(|| format!("failed to collect shaders from {:?}", shader_dir))?;

    embed_core::emit(&set, output, &config.emit)
        .with_context(|| format!("failed to emit {:?}", output))?;

    Ok(Summary {
        text: set.text_count(),
        binary: set.binary_count(),
    })
}
