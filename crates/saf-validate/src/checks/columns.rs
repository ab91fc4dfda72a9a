//! Column catalog checks.

use saf_model::{FieldSchema, ValidateOptions, ValidationIssue};

pub fn check<'a>(
    headers: impl IntoIterator<Item = &'a str>,
    schema: &FieldSchema,
    options: &ValidateOptions,
) -> Vec<ValidationIssue> {
    headers
        .into_iter()
        .filter(|column| {
            if options.exempt_bitstream_columns {
                !schema.is_recognized(column)
            } else {
                !schema.is_item_field(column)
            }
        })
        .map(|column| ValidationIssue::UnrecognizedColumn {
            column: column.to_string(),
        })
        .collect()
}
