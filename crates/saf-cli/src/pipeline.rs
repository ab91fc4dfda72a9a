//! Run orchestration: read, then either validate or group and emit.

use std::path::{MAIN_SEPARATOR, Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{info, info_span};

use saf_core::group_into;
use saf_ingest::read_input_table;
use saf_model::{ConversionOptions, FILENAME_FIELD, FieldSchema, TITLE_FIELD, ValidateOptions};
use saf_report::PackageEmitter;
use saf_validate::validate_table;

use crate::types::{ConvertResult, ValidateResult};

/// Remove trailing path separators, keeping a lone root intact.
pub fn strip_trailing_separators(path: &Path) -> PathBuf {
    let Some(text) = path.to_str() else {
        return path.to_path_buf();
    };
    let trimmed = text.trim_end_matches(['/', MAIN_SEPARATOR]);
    if trimmed.is_empty() {
        return path.to_path_buf();
    }
    PathBuf::from(trimmed)
}

/// Build the field schema with any extra item fields registered.
pub fn build_schema(extra_fields: &[String]) -> Result<FieldSchema> {
    extra_fields
        .iter()
        .try_fold(FieldSchema::default(), |schema, field| {
            schema
                .with_item_field(field.as_str())
                .with_context(|| format!("register extra field {field}"))
        })
}

/// Convert `<parent_dir>/input.csv` into a package below `output_dir`.
pub fn convert(
    parent_dir: &Path,
    output_dir: &Path,
    schema: &FieldSchema,
    options: ConversionOptions,
) -> Result<ConvertResult> {
    let span = info_span!("convert", parent_dir = %parent_dir.display());
    let _guard = span.enter();

    let table = read_input_table(parent_dir).context("read input table")?;
    table
        .require_columns(&[TITLE_FIELD, FILENAME_FIELD])
        .context("check input columns")?;

    let mut emitter = PackageEmitter::create(parent_dir, output_dir, options)
        .with_context(|| format!("prepare output directory {}", output_dir.display()))?;
    group_into(&table.rows, schema, &mut emitter).context("emit items")?;
    let summary = emitter.finish().context("finish package")?;

    info!(
        rows = table.len(),
        items = summary.items,
        bitstreams = summary.bitstreams,
        "conversion finished"
    );
    Ok(ConvertResult {
        input: table.path.clone(),
        output_dir: output_dir.to_path_buf(),
        rows: table.len(),
        summary,
    })
}

/// Check `<parent_dir>/input.csv` without writing anything.
pub fn check(
    parent_dir: &Path,
    schema: &FieldSchema,
    options: &ValidateOptions,
) -> Result<ValidateResult> {
    let span = info_span!("validate", parent_dir = %parent_dir.display());
    let _guard = span.enter();

    let table = read_input_table(parent_dir).context("read input table")?;
    table
        .require_columns(&[FILENAME_FIELD])
        .context("check input columns")?;
    let report = validate_table(&table, parent_dir, schema, options);
    Ok(ValidateResult {
        input: table.path,
        report,
    })
}
