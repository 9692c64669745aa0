//! shader-embed core - shader collection and header emission
//!
//! This crate provides:
//! - The shader data model (`ShaderSet`, `ShaderRecord`, `ShaderSource`)
//! - Directory collection filtered by extension
//! - C++ header rendering with raw-string and byte-array embedding

pub mod collector;
pub mod emitter;
pub mod error;
pub mod shader;

pub use collector::{Collector, collect};
pub use emitter::{Emitter, emit, quote_name, raw_delimiter};
pub use error::EmbedError;
pub use shader::{ShaderKind, ShaderRecord, ShaderSet, ShaderSource};
