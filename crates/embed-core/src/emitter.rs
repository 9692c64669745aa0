//! C++ header emission
//!
//! Layout of the generated header:
//!
//! ```text
//! #pragma once
//! #include <unordered_map>
//! #include <string>
//! namespace ShaderEmbedder {
//! std::unordered_map<std::string, std::string> shaders = {
//! 	{"a.vert", R"(void main(){})"},
//! };
//! }
//! ```
//!
//! Text shaders become raw string literals. When a shader contains `)"` a
//! delimiter is picked whose closing sequence does not occur in it. Bytecode
//! goes into a second map of `std::vector<unsigned char>`, which (together
//! with `<vector>`) is only emitted when bytecode was collected.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use embed_config::EmitConfig;

use crate::error::EmbedError;
use crate::shader::ShaderSet;

/// Prefix of generated raw string delimiters
const DELIMITER_BASE: &str = "embed";
/// Bytes per line in emitted byte arrays
const BYTES_PER_LINE: usize = 16;

/// Renders a [`ShaderSet`] as a C++ header
pub struct Emitter<'a> {
    config: &'a EmitConfig,
}

impl<'a> Emitter<'a> {
    pub fn new(config: &'a EmitConfig) -> Self {
        Self { config }
    }

    /// Render the complete header text
    pub fn render(&self, set: &ShaderSet) -> String {
        let has_binaries = set.binary_count() > 0;
        let mut out = String::new();

        out.push_str("#pragma once\n");
        out.push_str("#include <unordered_map>\n");
        out.push_str("#include <string>\n");
        if has_binaries {
            out.push_str("#include <vector>\n");
        }

        // Writing into a String cannot fail
        let _ = writeln!(out, "namespace {} {{", self.config.namespace);
        let _ = writeln!(
            out,
            "std::unordered_map<std::string, std::string> {} = {{",
            self.config.text_map
        );
        for (name, text) in set.text_records() {
            let delimiter = raw_delimiter(text);
            let _ = writeln!(
                out,
                "\t{{{}, R\"{delimiter}({text}){delimiter}\"}},",
                quote_name(name)
            );
        }
        out.push_str("};\n");

        if has_binaries {
            let _ = writeln!(
                out,
                "std::unordered_map<std::string, std::vector<unsigned char>> {} = {{",
                self.config.binary_map
            );
            for (name, bytes) in set.binary_records() {
                write_byte_entry(&mut out, name, bytes);
            }
            out.push_str("};\n");
        }

        out.push_str("}\n");
        out
    }

    /// Render and write the header to `path`, replacing any existing file
    pub fn write(&self, set: &ShaderSet, path: &Path) -> Result<(), EmbedError> {
        let header = self.render(set);
        fs::write(path, &header).map_err(|source| EmbedError::Write {
            path: path.to_path_buf(),
            source,
        })?;

        log::info!(
            "Wrote {} shader(s) ({} bytes) to {:?}",
            set.len(),
            header.len(),
            path
        );
        Ok(())
    }
}

fn write_byte_entry(out: &mut String, name: &str, bytes: &[u8]) {
    if bytes.is_empty() {
        let _ = writeln!(out, "\t{{{}, {{}}}},", quote_name(name));
        return;
    }

    let _ = writeln!(out, "\t{{{}, {{", quote_name(name));
    for chunk in bytes.chunks(BYTES_PER_LINE) {
        let line: Vec<String> = chunk.iter().map(|byte| format!("0x{byte:02x},")).collect();
        let _ = writeln!(out, "\t\t{}", line.join(" "));
    }
    out.push_str("\t}},\n");
}

/// Pick a raw string delimiter that cannot terminate the literal early.
///
/// Empty unless `content` contains `)"`. Otherwise the first of `embed`,
/// `embed0`, `embed1`, ... whose closing sequence is absent from `content`.
/// Suffixes up to 11 digits keep within the 16-character delimiter limit.
pub fn raw_delimiter(content: &str) -> String {
    if !content.contains(")\"") {
        return String::new();
    }

    std::iter::once(DELIMITER_BASE.to_string())
        .chain((0u64..).map(|n| format!("{DELIMITER_BASE}{n}")))
        .find(|candidate| !content.contains(&format!("){candidate}\"")))
        .unwrap_or_default()
}

/// Quote a shader name as an ordinary C++ string literal
pub fn quote_name(name: &str) -> String {
    let mut quoted = String::with_capacity(name.len() + 2);
    quoted.push('"');
    for c in name.chars() {
        match c {
            '"' => quoted.push_str("\\\""),
            '\\' => quoted.push_str("\\\\"),
            '\n' => quoted.push_str("\\n"),
            '\r' => quoted.push_str("\\r"),
            '\t' => quoted.push_str("\\t"),
            // Octal escapes stop after three digits, unlike \x
            c if c.is_ascii_control() => {
                let _ = write!(quoted, "\\{:03o}", c as u32);
            }
            c => quoted.push(c),
        }
    }
    quoted.push('"');
    quoted
}

/// Render with the given settings and write to `path`
pub fn emit(set: &ShaderSet, path: &Path, config: &EmitConfig) -> Result<(), EmbedError> {
    Emitter::new(config).write(set, path)
}
