use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use saf_model::ValidationIssue;
use saf_report::PackageUnit;

use saf_cli::types::{ConvertResult, ValidateResult};

pub fn print_convert_summary(result: &ConvertResult) {
    println!("Input: {}", result.input.display());
    println!("Items: {}", result.summary.items_dir.display());
    match &result.summary.archive {
        Some(archive) => println!("Archive: {}", archive.path.display()),
        None => println!("Archive: skipped"),
    }

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Rows"),
        header_cell("Items"),
        header_cell("Bitstreams"),
        header_cell("Metadata files"),
        header_cell("Archive entries"),
    ]);
    apply_summary_table_style(&mut table);
    for index in 0..5 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    table.add_row(vec![
        Cell::new(result.rows),
        Cell::new(result.summary.items).add_attribute(Attribute::Bold),
        Cell::new(result.summary.bitstreams),
        Cell::new(result.summary.metadata_files),
        match &result.summary.archive {
            Some(archive) => Cell::new(archive.entries.len()),
            None => dim_cell("-"),
        },
    ]);
    println!("{table}");

    if !result.summary.units.is_empty() {
        print_unit_table(&result.summary.units);
    }
}

fn print_unit_table(units: &[PackageUnit]) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Item"),
        header_cell("Bitstreams"),
        header_cell("Metadata"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for unit in units {
        let metadata: Vec<String> = unit
            .metadata_files
            .iter()
            .filter_map(|path| path.file_name())
            .map(|name| name.to_string_lossy().into_owned())
            .collect();
        table.add_row(vec![
            Cell::new(unit.dir.file_name().map_or_else(String::new, |name| {
                name.to_string_lossy().into_owned()
            }))
            .fg(Color::Blue)
            .add_attribute(Attribute::Bold),
            count_cell(unit.bitstreams.len(), Color::Green),
            Cell::new(metadata.join(", ")),
        ]);
    }
    println!();
    println!("{table}");
}

pub fn print_validation_report(result: &ValidateResult) {
    let report = &result.report;
    println!("Input: {}", result.input.display());
    println!("Rows checked: {}", report.rows_checked);
    if report.is_clean() {
        println!("No issues found.");
        return;
    }

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Row"),
        header_cell("Code"),
        header_cell("Message"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for issue in &report.issues {
        table.add_row(vec![
            match issue.row() {
                Some(row) => Cell::new(row),
                None => dim_cell("-"),
            },
            code_cell(issue),
            Cell::new(issue.message()),
        ]);
    }
    println!("{table}");
    println!(
        "{} file issue(s), {} column issue(s)",
        report.file_issue_count(),
        report.column_issue_count()
    );
}

fn code_cell(issue: &ValidationIssue) -> Cell {
    let color = match issue {
        ValidationIssue::MissingFilename { .. } | ValidationIssue::MissingFile { .. } => Color::Red,
        ValidationIssue::UnrecognizedColumn { .. } => Color::Yellow,
    };
    Cell::new(issue.code()).fg(color)
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color)
    } else {
        dim_cell(count)
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
