//! Configuration options for package conversion and validation.

use serde::{Deserialize, Serialize};

/// Extensions routed to the alternate bundle, compared case-insensitively.
pub const DEFAULT_IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "jp2", "j2k"];

/// Options controlling package emission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionOptions {
    /// Bundle that image bitstreams are steered to instead of the default
    /// (ORIGINAL) bundle.
    pub alt_bundle: Option<String>,

    /// File extensions (without the dot) treated as images.
    pub image_extensions: Vec<String>,

    /// Fold the emitted item directories into one zip archive after the run.
    pub write_archive: bool,
}

impl Default for ConversionOptions {
    fn default() -> Self {
        Self {
            alt_bundle: None,
            image_extensions: DEFAULT_IMAGE_EXTENSIONS
                .iter()
                .map(|ext| (*ext).to_string())
                .collect(),
            write_archive: true,
        }
    }
}

impl ConversionOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_alt_bundle(mut self, bundle: Option<String>) -> Self {
        self.alt_bundle = bundle.filter(|name| !name.trim().is_empty());
        self
    }

    pub fn with_archive(mut self, enable: bool) -> Self {
        self.write_archive = enable;
        self
    }

    pub fn is_image(&self, filename: &str) -> bool {
        let Some((_, extension)) = filename.rsplit_once('.') else {
            return false;
        };
        self.image_extensions
            .iter()
            .any(|ext| ext.eq_ignore_ascii_case(extension))
    }

    /// Bundle to tag a bitstream with, if any.
    pub fn bundle_for(&self, filename: &str) -> Option<&str> {
        self.alt_bundle
            .as_deref()
            .filter(|_| self.is_image(filename))
    }
}

/// Options for the validation pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidateOptions {
    /// Skip bitstream columns (`Filename`, `iiif.label`, ...) when reporting
    /// columns missing from the item catalog.
    pub exempt_bitstream_columns: bool,
}

impl Default for ValidateOptions {
    fn default() -> Self {
        Self {
            exempt_bitstream_columns: true,
        }
    }
}

impl ValidateOptions {
    /// Report every column outside the item catalog, bitstream columns included.
    pub fn strict() -> Self {
        Self {
            exempt_bitstream_columns: false,
        }
    }
}
