//! Shader directory collection
//!
//! Walks the whole tree, then reads recognized files in byte order of their
//! full path, so the "later" of two files sharing a base name is always the
//! lexicographically greater path (`a/x.frag` after `a.b/x.frag`).
//! Symlinks to files are embedded under the link's name; symlinked
//! directories are not descended into. Any read failure, a dangling link
//! included, aborts the whole collection.

use std::fs;
use std::path::{Path, PathBuf};

use embed_config::{CollectConfig, DuplicatePolicy, Embedding};
use walkdir::{DirEntry, WalkDir};

use crate::error::EmbedError;
use crate::shader::{ShaderKind, ShaderRecord, ShaderSet, ShaderSource};

/// Collects shader files below a root directory
pub struct Collector<'a> {
    config: &'a CollectConfig,
}

/// A recognized file found during the walk, not yet read
struct Candidate {
    path: PathBuf,
    name: String,
    kind: ShaderKind,
    embedding: Embedding,
}

impl<'a> Collector<'a> {
    pub fn new(config: &'a CollectConfig) -> Self {
        Self { config }
    }

    /// Walk `root` and build the shader set
    pub fn collect(&self, root: &Path) -> Result<ShaderSet, EmbedError> {
        if !root.is_dir() {
            return Err(EmbedError::NotADirectory(root.to_path_buf()));
        }

        log::info!("Scanning {:?} for shaders", root);

        let mut candidates = Vec::new();
        for entry in WalkDir::new(root).sort_by_file_name() {
            let entry = entry?;
            if !is_file_entry(&entry) {
                continue;
            }
            if let Some(candidate) = self.candidate(entry)? {
                candidates.push(candidate);
            }
        }

        // OsStr ordering is bytewise, unlike Path's per-component ordering
        candidates.sort_by(|a, b| a.path.as_os_str().cmp(b.path.as_os_str()));

        let mut set = ShaderSet::new();
        for candidate in candidates {
            let source = read_source(&candidate.path, candidate.embedding)?;
            let record = ShaderRecord {
                name: candidate.name,
                path: candidate.path,
                kind: candidate.kind,
                source,
            };
            self.insert(&mut set, record)?;
        }

        log::info!(
            "Collected {} shader(s): {} text, {} binary",
            set.len(),
            set.text_count(),
            set.binary_count()
        );
        Ok(set)
    }

    fn candidate(&self, entry: DirEntry) -> Result<Option<Candidate>, EmbedError> {
        let path = entry.into_path();
        let Some(extension) = path.extension().and_then(|ext| ext.to_str()) else {
            return Ok(None);
        };
        let extension = format!(".{extension}");
        let Some(embedding) = self.config.embedding_for(&extension) else {
            log::trace!("Skipping {:?}", path);
            return Ok(None);
        };

        let name = path
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| EmbedError::NonUtf8Name(path.clone()))?
            .to_string();

        Ok(Some(Candidate {
            name,
            kind: ShaderKind::from_extension(&extension),
            embedding,
            path,
        }))
    }

    fn insert(&self, set: &mut ShaderSet, record: ShaderRecord) -> Result<(), EmbedError> {
        if let Some(existing) = set.get(&record.name) {
            match self.config.on_duplicate {
                DuplicatePolicy::Error => {
                    return Err(EmbedError::DuplicateName {
                        name: record.name,
                        first: existing.path.clone(),
                        second: record.path,
                    });
                }
                DuplicatePolicy::LastWins => {
                    log::warn!(
                        "{:?} overrides {:?} for shader name '{}'",
                        record.path,
                        existing.path,
                        record.name
                    );
                }
            }
        }

        log::debug!(
            "Embedding {} shader '{}' ({} bytes) from {:?}",
            record.kind.label(),
            record.name,
            record.source.len(),
            record.path
        );
        set.insert(record);
        Ok(())
    }
}

/// Regular files and links that do not resolve to a directory.
/// A dangling link is kept so that reading it fails the run.
fn is_file_entry(entry: &DirEntry) -> bool {
    let file_type = entry.file_type();
    file_type.is_file() || (file_type.is_symlink() && !entry.path().is_dir())
}

fn read_source(path: &Path, embedding: Embedding) -> Result<ShaderSource, EmbedError> {
    let source = match embedding {
        Embedding::Text => fs::read_to_string(path).map(ShaderSource::Text),
        Embedding::Binary => fs::read(path).map(ShaderSource::Binary),
    };
    source.map_err(|source| EmbedError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Collect with the given settings
pub fn collect(root: &Path, config: &CollectConfig) -> Result<ShaderSet, EmbedError> {
    Collector::new(config).collect(root)
}
