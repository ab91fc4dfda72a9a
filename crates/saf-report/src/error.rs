//! Error types for package emission.

use std::path::PathBuf;
use thiserror::Error;

use saf_model::SafError;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error(transparent)]
    Model(#[from] SafError),

    /// Output directories are never reused.
    #[error("output directory already exists: {}", path.display())]
    DirectoryExists { path: PathBuf },

    /// An archive from an earlier run is never overwritten.
    #[error("archive already exists: {}", path.display())]
    ArchiveExists { path: PathBuf },

    /// A bitstream named in the input is not present in the input directory.
    #[error("bitstream source not found: {}", path.display())]
    MissingSource { path: PathBuf },

    /// Bitstream filenames must name a file directly inside the input directory.
    #[error("bitstream filename '{filename}' is not a plain file name")]
    InvalidFilename { filename: String },

    #[error("failed to {action} {}: {source}", path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to render {file}: {source}")]
    XmlWrite {
        file: &'static str,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse metadata XML: {0}")]
    XmlParse(#[from] quick_xml::de::DeError),

    #[error("archive error: {0}")]
    Archive(#[from] zip::result::ZipError),

    #[error("failed to walk output tree: {0}")]
    Walk(#[from] walkdir::Error),
}

impl ReportError {
    pub(crate) fn io(action: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            action,
            path: path.into(),
            source,
        }
    }
}

/// Result type alias for package emission.
pub type Result<T> = std::result::Result<T, ReportError>;
