//! Data model for Simple Archive Format conversion.
//!
//! - [`FieldSchema`]: the recognized item and bitstream columns
//! - [`Item`] / [`Bitstream`]: mutable aggregates filled while grouping rows
//! - [`ConversionOptions`] / [`ValidateOptions`]: run configuration
//! - [`ValidationReport`]: diagnostics produced by the validation pass

pub mod bitstream;
pub mod error;
pub mod item;
pub mod layout;
pub mod options;
pub mod report;
pub mod schema;

pub use bitstream::{Bitstream, BitstreamField};
pub use error::{Result, SafError};
pub use item::Item;
pub use options::{ConversionOptions, DEFAULT_IMAGE_EXTENSIONS, ValidateOptions};
pub use report::{ValidationIssue, ValidationReport};
pub use schema::{
    DEFAULT_ITEM_FIELDS, ElementName, FILENAME_FIELD, FieldSchema, Namespace, TITLE_FIELD,
};
