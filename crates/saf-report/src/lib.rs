//! Simple Archive Format package emission.
//!
//! Each sealed item becomes a numbered directory holding a `contents`
//! manifest, its copied bitstreams and one metadata XML file per namespace
//! in use. After the run the whole tree is folded into `saf_output.zip`.

pub mod archive;
pub mod contents;
pub mod error;
pub mod metadata;
pub mod package;

pub use archive::{ArchiveSummary, consolidate};
pub use contents::{manifest_line, render_contents, write_contents};
pub use error::{ReportError, Result};
pub use metadata::{
    DcValue, MetadataDocument, parse_metadata_xml, read_metadata_file, render_metadata_xml,
    write_metadata_files,
};
pub use package::{PackageEmitter, PackageUnit, RunSummary, emit_item, is_plain_file_name};
