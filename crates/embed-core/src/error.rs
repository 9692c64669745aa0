use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EmbedError {
    #[error("shader root {0:?} is not a directory")]
    NotADirectory(PathBuf),

    #[error("failed to walk shader directory: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("file name of {0:?} is not valid UTF-8")]
    NonUtf8Name(PathBuf),

    #[error("failed to read {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("duplicate shader name {name:?}: {first:?} and {second:?}")]
    DuplicateName {
        name: String,
        first: PathBuf,
        second: PathBuf,
    },

    #[error("failed to write {path:?}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
