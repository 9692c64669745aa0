//! shader-embed
//!
//! Scans a shader directory and writes a header embedding every shader as a
//! constant, so the host program needs no shader files at runtime.

use anyhow::Result;
use shader_embed::cli::{DEFAULT_LOG_FILTER, Invocation, USAGE, run};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(DEFAULT_LOG_FILTER))
        .init();

    match Invocation::from_args(std::env::args_os().skip(1)) {
        Invocation::Usage => {
            println!("{USAGE}");
        }
        Invocation::Embed { shader_dir, output } => {
            let summary = run(&shader_dir, &output)?;
            log::info!(
                "Embedded {} text and {} binary shader(s) into {:?}",
                summary.text,
                summary.binary,
                output
            );
        }
    }

    Ok(())
}
