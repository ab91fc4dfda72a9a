//! The `contents` manifest listing an item's bitstreams.

use std::fs;
use std::path::{Path, PathBuf};

use saf_model::layout::CONTENTS_FILE_NAME;
use saf_model::{Bitstream, BitstreamField, ConversionOptions, Item};

use crate::error::{ReportError, Result};

/// One manifest line without the trailing newline, or `None` for a bitstream
/// that has no filename.
///
/// Suffixes are tab-separated and always appear in the order
/// `bundle`, `iiif-label`, `iiif-description`, `iiif-toc`.
pub fn manifest_line(bitstream: &Bitstream, bundle: Option<&str>) -> Option<String> {
    let mut line = bitstream.filename()?.to_string();
    if let Some(bundle) = bundle {
        line.push_str("\tbundle:");
        line.push_str(bundle);
    }
    for field in BitstreamField::ALL {
        let (Some(key), Some(value)) = (field.manifest_key(), bitstream.get(field)) else {
            continue;
        };
        line.push('\t');
        line.push_str(key);
        line.push(':');
        line.push_str(value);
    }
    Some(line)
}

/// Render the manifest: one `\n`-terminated line per bitstream, in attachment order.
pub fn render_contents(item: &Item, options: &ConversionOptions) -> String {
    let mut out = String::new();
    for bitstream in item.bitstreams() {
        let bundle = bitstream
            .filename()
            .and_then(|filename| options.bundle_for(filename));
        if let Some(line) = manifest_line(bitstream, bundle) {
            out.push_str(&line);
            out.push('\n');
        }
    }
    out
}

pub fn write_contents(unit_dir: &Path, item: &Item, options: &ConversionOptions) -> Result<PathBuf> {
    let path = unit_dir.join(CONTENTS_FILE_NAME);
    fs::write(&path, render_contents(item, options))
        .map_err(|source| ReportError::io("write", &path, source))?;
    Ok(path)
}
