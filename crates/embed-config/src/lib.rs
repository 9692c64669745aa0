//! shader-embed configuration
//!
//! Optional `shader-embed.toml` placed at the root of the scanned shader
//! directory. Every field has a default, so a missing file (or an empty one)
//! reproduces the stock behavior: the GLSL stage extensions embedded as text,
//! `.spv` embedded as bytes, last-wins on duplicate names, and everything
//! emitted into `namespace ShaderEmbedder`.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Configuration file name looked up in the shader directory
pub const CONFIG_FILE_NAME: &str = "shader-embed.toml";

/// What to do when two files in the tree share a base name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum DuplicatePolicy {
    /// Later-visited file replaces the earlier entry
    #[default]
    LastWins,
    /// Abort collection
    Error,
}

/// Collection settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectConfig {
    /// Extensions (with leading dot) embedded as text
    #[serde(default = "default_text_extensions")]
    pub text_extensions: Vec<String>,

    /// Extensions (with leading dot) embedded as byte arrays
    #[serde(default = "default_binary_extensions")]
    pub binary_extensions: Vec<String>,

    /// Duplicate base name handling
    #[serde(default)]
    pub on_duplicate: DuplicatePolicy,
}

fn default_text_extensions() -> Vec<String> {
    [".vert", ".frag", ".comp", ".geom", ".tesc", ".tese"]
        .iter()
        .map(|ext| ext.to_string())
        .collect()
}

fn default_binary_extensions() -> Vec<String> {
    vec![".spv".to_string()]
}

impl Default for CollectConfig {
    fn default() -> Self {
        Self {
            text_extensions: default_text_extensions(),
            binary_extensions: default_binary_extensions(),
            on_duplicate: DuplicatePolicy::default(),
        }
    }
}

/// How a recognized file is embedded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Embedding {
    Text,
    Binary,
}

impl CollectConfig {
    /// Classify an extension (leading dot included, case-sensitive).
    /// Returns `None` for files that should not be embedded.
    pub fn embedding_for(&self, extension: &str) -> Option<Embedding> {
        if self.binary_extensions.iter().any(|e| e == extension) {
            Some(Embedding::Binary)
        } else if self.text_extensions.iter().any(|e| e == extension) {
            Some(Embedding::Text)
        } else {
            None
        }
    }
}

/// Output header settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmitConfig {
    /// Enclosing C++ namespace (`a::b` nesting allowed)
    #[serde(default = "default_namespace")]
    pub namespace: String,

    /// Name of the text shader map
    #[serde(default = "default_text_map")]
    pub text_map: String,

    /// Name of the bytecode map, only emitted when bytecode was collected
    #[serde(default = "default_binary_map")]
    pub binary_map: String,
}

fn default_namespace() -> String {
    "ShaderEmbedder".to_string()
}

fn default_text_map() -> String {
    "shaders".to_string()
}

fn default_binary_map() -> String {
    "shader_binaries".to_string()
}

impl Default for EmitConfig {
    fn default() -> Self {
        Self {
            namespace: default_namespace(),
            text_map: default_text_map(),
            binary_map: default_binary_map(),
        }
    }
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Collection settings
    #[serde(default)]
    pub collect: CollectConfig,

    /// Emission settings
    #[serde(default)]
    pub emit: EmitConfig,
}

impl Config {
    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)
            .map_err(|e| ConfigError::ReadError(path.to_path_buf(), e))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| ConfigError::ParseError(path.to_path_buf(), e))?;

        config.validate()?;
        Ok(config)
    }

    /// Path of the configuration file for a shader directory
    pub fn file_path_for(shader_dir: &Path) -> PathBuf {
        shader_dir.join(CONFIG_FILE_NAME)
    }

    /// Load `<shader_dir>/shader-embed.toml`, or defaults if there is none
    pub fn load_for_dir(shader_dir: &Path) -> Result<Self, ConfigError> {
        let path = Self::file_path_for(shader_dir);

        if !path.is_file() {
            log::info!("No {} in {:?}, using defaults", CONFIG_FILE_NAME, shader_dir);
            return Ok(Self::default());
        }

        log::warn!("Using settings from {:?}", path);
        Self::load_from(&path)
    }

    /// Check extension lists and emitted identifiers
    pub fn validate(&self) -> Result<(), ConfigError> {
        let collect = &self.collect;
        for ext in collect.text_extensions.iter().chain(&collect.binary_extensions) {
            if ext.len() < 2 || !ext.starts_with('.') {
                return Err(ConfigError::Invalid(format!(
                    "extension {:?} must be a dot followed by at least one character",
                    ext
                )));
            }
        }

        if let Some(ext) = collect
            .binary_extensions
            .iter()
            .find(|ext| collect.text_extensions.contains(ext))
        {
            return Err(ConfigError::Invalid(format!(
                "extension {:?} is listed as both text and binary",
                ext
            )));
        }

        if !self.emit.namespace.split("::").all(is_cpp_identifier) {
            return Err(ConfigError::Invalid(format!(
                "namespace {:?} is not a valid C++ namespace name",
                self.emit.namespace
            )));
        }

        for name in [&self.emit.text_map, &self.emit.binary_map] {
            if !is_cpp_identifier(name) {
                return Err(ConfigError::Invalid(format!(
                    "{:?} is not a valid C++ identifier",
                    name
                )));
            }
        }

        if self.emit.text_map == self.emit.binary_map {
            return Err(ConfigError::Invalid(format!(
                "text and binary maps are both named {:?}",
                self.emit.text_map
            )));
        }

        Ok(())
    }
}

fn is_cpp_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Configuration errors
#[derive(Debug)]
pub enum ConfigError {
    /// Failed to read config file
    ReadError(PathBuf, std::io::Error),
    /// Failed to parse config file
    ParseError(PathBuf, toml::de::Error),
    /// Config parsed but holds unusable values
    Invalid(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::ReadError(path, e) => write!(f, "Failed to read {:?}: {}", path, e),
            ConfigError::ParseError(path, e) => write!(f, "Failed to parse {:?}: {}", path, e),
            ConfigError::Invalid(msg) => write!(f, "Invalid configuration: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::ReadError(_, e) => Some(e),
            ConfigError::ParseError(_, e) => Some(e),
            ConfigError::Invalid(_) => None,
        }
    }
}
