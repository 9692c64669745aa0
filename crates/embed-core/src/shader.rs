//! Collected shader data
//!
//! A [`ShaderSet`] is built once by the collector and then only read by the
//! emitter. It keeps insertion order: replacing an entry keeps the slot the
//! name was first inserted at.

use std::collections::HashMap;
use std::path::PathBuf;

/// Pipeline stage implied by a file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShaderKind {
    Vertex,
    Fragment,
    Compute,
    Geometry,
    TessellationControl,
    TessellationEvaluation,
    /// Precompiled SPIR-V bytecode
    SpirV,
    /// Extension added through configuration, stage inferred downstream
    Unknown,
}

impl ShaderKind {
    /// Map an extension (leading dot included) to a stage
    pub fn from_extension(extension: &str) -> Self {
        match extension {
            ".vert" => ShaderKind::Vertex,
            ".frag" => ShaderKind::Fragment,
            ".comp" => ShaderKind::Compute,
            ".geom" => ShaderKind::Geometry,
            ".tesc" => ShaderKind::TessellationControl,
            ".tese" => ShaderKind::TessellationEvaluation,
            ".spv" => ShaderKind::SpirV,
            _ => ShaderKind::Unknown,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ShaderKind::Vertex => "vertex",
            ShaderKind::Fragment => "fragment",
            ShaderKind::Compute => "compute",
            ShaderKind::Geometry => "geometry",
            ShaderKind::TessellationControl => "tessellation control",
            ShaderKind::TessellationEvaluation => "tessellation evaluation",
            ShaderKind::SpirV => "spir-v",
            ShaderKind::Unknown => "unknown",
        }
    }
}

/// File contents, as text or raw bytes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShaderSource {
    Text(String),
    Binary(Vec<u8>),
}

impl ShaderSource {
    pub fn is_binary(&self) -> bool {
        matches!(self, ShaderSource::Binary(_))
    }

    /// Size in bytes
    pub fn len(&self) -> usize {
        match self {
            ShaderSource::Text(text) => text.len(),
            ShaderSource::Binary(bytes) => bytes.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            ShaderSource::Text(text) => Some(text),
            ShaderSource::Binary(_) => None,
        }
    }
}

/// One embedded file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShaderRecord {
    /// Base name including extension, used as the map key
    pub name: String,
    /// Where the contents were read from
    pub path: PathBuf,
    pub kind: ShaderKind,
    pub source: ShaderSource,
}

/// Name-keyed, insertion-ordered collection of shader records
#[derive(Debug, Clone, Default)]
pub struct ShaderSet {
    records: Vec<ShaderRecord>,
    index: HashMap<String, usize>,
}

impl ShaderSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record, returning the one it replaced if the name was taken
    pub fn insert(&mut self, record: ShaderRecord) -> Option<ShaderRecord> {
        match self.index.get(&record.name) {
            Some(&slot) => Some(std::mem::replace(&mut self.records[slot], record)),
            None => {
                self.index.insert(record.name.clone(), self.records.len());
                self.records.push(record);
                None
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&ShaderRecord> {
        self.index.get(name).map(|&slot| &self.records[slot])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All records in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &ShaderRecord> {
        self.records.iter()
    }

    /// Text records in insertion order
    pub fn text_records(&self) -> impl Iterator<Item = (&str, &str)> {
        self.records
            .iter()
            .filter_map(|r| r.source.as_text().map(|text| (r.name.as_str(), text)))
    }

    /// Binary records in insertion order
    pub fn binary_records(&self) -> impl Iterator<Item = (&str, &[u8])> {
        self.records.iter().filter_map(|r| match &r.source {
            ShaderSource::Binary(bytes) => Some((r.name.as_str(), bytes.as_slice())),
            ShaderSource::Text(_) => None,
        })
    }

    pub fn binary_count(&self) -> usize {
        self.records.iter().filter(|r| r.source.is_binary()).count()
    }

    pub fn text_count(&self) -> usize {
        self.len() - self.binary_count()
    }
}
