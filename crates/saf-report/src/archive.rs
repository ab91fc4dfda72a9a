//! Consolidation of the emitted item directories into `saf_output.zip`.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info};
use walkdir::WalkDir;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

use saf_model::layout::ARCHIVE_ROOT;

use crate::error::{ReportError, Result};

/// What the consolidation pass wrote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArchiveSummary {
    pub path: PathBuf,
    /// Archive entry names in the order they were written.
    pub entries: Vec<String>,
    /// Uncompressed bytes copied into the archive.
    pub bytes: u64,
}

/// Zip every file below `items_dir` into a new archive at `archive_path`.
///
/// Entries are named `saf-import/<relative path>` and written in file-name
/// order. An existing archive is never overwritten.
pub fn consolidate(items_dir: &Path, archive_path: &Path) -> Result<ArchiveSummary> {
    let file = File::create_new(archive_path)
        .map_err(|source| ReportError::io("create", archive_path, source))?;
    let mut zip = ZipWriter::new(BufWriter::new(file));
    let options =
        SimpleFileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    let mut entries = Vec::new();
    let mut bytes = 0u64;
    for entry in WalkDir::new(items_dir).min_depth(1).sort_by_file_name() {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let name = entry_name(items_dir, entry.path());
        zip.start_file(name.as_str(), options)?;
        let mut source = File::open(entry.path())
            .map_err(|source| ReportError::io("open", entry.path(), source))?;
        bytes += io::copy(&mut source, &mut zip)
            .map_err(|source| ReportError::io("archive", entry.path(), source))?;
        debug!(entry = %name, "archived");
        entries.push(name);
    }

    let mut writer = zip.finish()?;
    writer
        .flush()
        .map_err(|source| ReportError::io("flush", archive_path, source))?;

    info!(
        path = %archive_path.display(),
        entries = entries.len(),
        bytes,
        "archive written"
    );
    Ok(ArchiveSummary {
        path: archive_path.to_path_buf(),
        entries,
        bytes,
    })
}

/// Archive name for a file below `root`, always `/`-separated.
fn entry_name(root: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);
    let mut name = String::from(ARCHIVE_ROOT);
    for component in relative.components() {
        name.push('/');
        name.push_str(&component.as_os_str().to_string_lossy());
    }
    name
}
