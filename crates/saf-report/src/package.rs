//! Emission of item directories and the run that drives them.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info, info_span};

use saf_core::ItemSink;
use saf_model::layout::{ARCHIVE_FILE_NAME, UNZIPPED_DIR_NAME, item_dir_name};
use saf_model::{ConversionOptions, Item};

use crate::archive::{ArchiveSummary, consolidate};
use crate::contents::write_contents;
use crate::error::{ReportError, Result};
use crate::metadata::write_metadata_files;

/// Files written for one item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PackageUnit {
    pub sequence: u32,
    pub dir: PathBuf,
    pub contents: PathBuf,
    pub metadata_files: Vec<PathBuf>,
    pub bitstreams: Vec<PathBuf>,
}

/// Totals for a finished conversion run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub items_dir: PathBuf,
    pub items: usize,
    pub bitstreams: usize,
    pub metadata_files: usize,
    pub units: Vec<PackageUnit>,
    pub archive: Option<ArchiveSummary>,
}

/// Write the directory for item `sequence` below `items_dir`.
///
/// Bitstream sources are read from `input_dir`. The item directory must not
/// exist yet.
pub fn emit_item(
    item: &Item,
    input_dir: &Path,
    items_dir: &Path,
    sequence: u32,
    options: &ConversionOptions,
) -> Result<PackageUnit> {
    let dir = items_dir.join(item_dir_name(sequence));
    create_fresh_dir(&dir)?;

    let contents = write_contents(&dir, item, options)?;

    let mut bitstreams = Vec::with_capacity(item.bitstreams().len());
    for filename in item.bitstreams().iter().filter_map(|b| b.filename()) {
        bitstreams.push(copy_bitstream(input_dir, &dir, filename)?);
    }

    let metadata_files = write_metadata_files(&dir, item)?;

    debug!(
        sequence,
        dir = %dir.display(),
        bitstreams = bitstreams.len(),
        metadata_files = metadata_files.len(),
        "item emitted"
    );
    Ok(PackageUnit {
        sequence,
        dir,
        contents,
        metadata_files,
        bitstreams,
    })
}

fn create_fresh_dir(dir: &Path) -> Result<()> {
    fs::create_dir(dir).map_err(|source| {
        if source.kind() == std::io::ErrorKind::AlreadyExists {
            ReportError::DirectoryExists {
                path: dir.to_path_buf(),
            }
        } else {
            ReportError::io("create directory", dir, source)
        }
    })
}

/// Whether `filename` names a file directly, with no directory parts.
pub fn is_plain_file_name(filename: &str) -> bool {
    Path::new(filename)
        .file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name == filename)
}

fn copy_bitstream(input_dir: &Path, unit_dir: &Path, filename: &str) -> Result<PathBuf> {
    if !is_plain_file_name(filename) {
        return Err(ReportError::InvalidFilename {
            filename: filename.to_string(),
        });
    }
    let source = input_dir.join(filename);
    if !source.is_file() {
        return Err(ReportError::MissingSource { path: source });
    }
    let target = unit_dir.join(filename);
    fs::copy(&source, &target).map_err(|err| ReportError::io("copy", &source, err))?;
    Ok(target)
}

/// Emits items into `<output_root>/saf_import_files_unzipped` as the grouper
/// seals them, then consolidates the tree once in [`PackageEmitter::finish`].
#[derive(Debug)]
pub struct PackageEmitter {
    input_dir: PathBuf,
    output_root: PathBuf,
    items_dir: PathBuf,
    options: ConversionOptions,
    units: Vec<PackageUnit>,
}

impl PackageEmitter {
    /// Prepare the output tree.
    ///
    /// `output_root` is created if missing. Its item directory must not exist,
    /// nor its archive when one will be written.
    pub fn create(
        input_dir: impl Into<PathBuf>,
        output_root: impl Into<PathBuf>,
        options: ConversionOptions,
    ) -> Result<Self> {
        let output_root = output_root.into();
        fs::create_dir_all(&output_root)
            .map_err(|source| ReportError::io("create directory", &output_root, source))?;
        let archive_path = output_root.join(ARCHIVE_FILE_NAME);
        if options.write_archive && archive_path.exists() {
            return Err(ReportError::ArchiveExists { path: archive_path });
        }
        let items_dir = output_root.join(UNZIPPED_DIR_NAME);
        create_fresh_dir(&items_dir)?;
        info!(items_dir = %items_dir.display(), "output tree prepared");
        Ok(Self {
            input_dir: input_dir.into(),
            output_root,
            items_dir,
            options,
            units: Vec::new(),
        })
    }

    pub fn archive_path(&self) -> PathBuf {
        self.output_root.join(ARCHIVE_FILE_NAME)
    }

    pub fn emit(&mut self, sequence: u32, item: &Item) -> Result<&PackageUnit> {
        let unit = emit_item(item, &self.input_dir, &self.items_dir, sequence, &self.options)?;
        self.units.push(unit);
        Ok(&self.units[self.units.len() - 1])
    }

    /// Consolidate the archive (when enabled) and report totals.
    pub fn finish(self) -> Result<RunSummary> {
        let _span = info_span!("consolidate").entered();
        let archive = if self.options.write_archive {
            Some(consolidate(&self.items_dir, &self.archive_path())?)
        } else {
            debug!("archive disabled");
            None
        };
        Ok(RunSummary {
            items: self.units.len(),
            bitstreams: self.units.iter().map(|unit| unit.bitstreams.len()).sum(),
            metadata_files: self.units.iter().map(|unit| unit.metadata_files.len()).sum(),
            items_dir: self.items_dir,
            units: self.units,
            archive,
        })
    }
}

impl ItemSink for PackageEmitter {
    type Error = ReportError;

    fn accept(&mut self, sequence: u32, item: Item) -> Result<()> {
        self.emit(sequence, &item)?;
        Ok(())
    }
}
