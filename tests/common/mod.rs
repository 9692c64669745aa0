//! Common test utilities and harness
//!
//! Provides:
//! - An isolated shader tree in a temp directory
//! - A reader for generated headers, used for round-trip assertions

#![allow(dead_code)]

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Temp directory holding a `shaders/` tree and an output location
pub struct ShaderTree {
    pub temp_dir: TempDir,
    pub shader_dir: PathBuf,
}

impl ShaderTree {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let shader_dir = temp_dir.path().join("shaders");
        std::fs::create_dir_all(&shader_dir).expect("Failed to create shader directory");
        Self {
            temp_dir,
            shader_dir,
        }
    }

    /// Write a file below the shader directory, creating parents
    pub fn write(&self, rel: &str, contents: impl AsRef<[u8]>) -> PathBuf {
        let path = self.shader_dir.join(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&path, contents).expect("Failed to write shader");
        path
    }

    /// Output header path next to (not inside) the shader directory
    pub fn output(&self) -> PathBuf {
        self.temp_dir.path().join("EmbeddedShaders.hpp")
    }

    pub fn read_output(&self) -> String {
        std::fs::read_to_string(self.output()).expect("Failed to read generated header")
    }

    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }
}

impl Default for ShaderTree {
    fn default() -> Self {
        Self::new()
    }
}

/// Text entries of a generated header's string map, in emitted order.
///
/// Understands the tab-indented `{"name", R"d(content)d"},` entries the
/// emitter produces; names are expected to need no escaping.
pub fn parse_text_entries(header: &str) -> Vec<(String, String)> {
    let mut entries = Vec::new();
    let mut rest = header;

    while let Some(start) = rest.find("\t{\"") {
        rest = &rest[start + 3..];
        let name_end = rest.find('"').expect("unterminated name");
        let name = rest[..name_end].to_string();
        rest = &rest[name_end + 1..];

        let Some(after) = rest.strip_prefix(", R\"") else {
            // Byte array entry
            continue;
        };
        let open = after.find('(').expect("missing raw string open paren");
        let delimiter = &after[..open];
        let body = &after[open + 1..];
        let close = format!("){delimiter}\"}},\n");
        let end = body.find(&close).expect("unterminated raw string");

        entries.push((name, body[..end].to_string()));
        rest = &body[end + close.len()..];
    }

    entries
}

/// Same as [`parse_text_entries`] collected into a map
pub fn parse_text_map(header: &str) -> HashMap<String, String> {
    parse_text_entries(header).into_iter().collect()
}
