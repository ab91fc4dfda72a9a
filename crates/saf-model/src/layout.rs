//! Names of the files and directories that make up a Simple Archive Format package.

/// Metadata table expected inside the parent directory.
pub const INPUT_FILE_NAME: &str = "input.csv";

/// Directory under the output root holding one subdirectory per item.
pub const UNZIPPED_DIR_NAME: &str = "saf_import_files_unzipped";

/// Consolidated archive written at the output root.
pub const ARCHIVE_FILE_NAME: &str = "saf_output.zip";

/// Top-level directory inside the consolidated archive.
pub const ARCHIVE_ROOT: &str = "saf-import";

/// Bitstream manifest written into every item directory.
pub const CONTENTS_FILE_NAME: &str = "contents";

/// Directory name for the item with the given 1-based sequence number.
///
/// Numbers are zero-padded to four digits; larger numbers keep all digits.
pub fn item_dir_name(sequence: u32) -> String {
    format!("{sequence:04}")
}
