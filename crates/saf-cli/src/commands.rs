use anyhow::{Context, Result};

use saf_cli::pipeline::{build_schema, check, convert, strip_trailing_separators};
use saf_cli::types::{ConvertResult, ValidateResult};
use saf_model::{ConversionOptions, ValidateOptions};

use crate::cli::Cli;

pub fn run_convert(cli: &Cli) -> Result<ConvertResult> {
    let parent_dir = strip_trailing_separators(&cli.parent_dir);
    let output_dir = cli
        .output_dir
        .as_deref()
        .map(strip_trailing_separators)
        .context("OUTPUT_DIR is required unless --validate is given")?;
    let schema = build_schema(&cli.extra_fields)?;
    let options = ConversionOptions::new()
        .with_alt_bundle(cli.bundle.clone())
        .with_archive(!cli.no_zip);
    convert(&parent_dir, &output_dir, &schema, options)
}

pub fn run_validate(cli: &Cli) -> Result<ValidateResult> {
    let parent_dir = strip_trailing_separators(&cli.parent_dir);
    let schema = build_schema(&cli.extra_fields)?;
    let options = if cli.strict_columns {
        ValidateOptions::strict()
    } else {
        ValidateOptions::default()
    };
    check(&parent_dir, &schema, &options)
}
