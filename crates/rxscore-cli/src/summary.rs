use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use rxscore_ingest::ExtractSummary;
use rxscore_model::{Field, FieldKind};
use rxscore_schema::{SchemaRegistry, SourceStatus};
use rxscore_validate::{RejectionKind, Severity};

use crate::types::{CheckResult, DeriveResult, ValidateResult};

pub fn print_extract_summary(summary: &ExtractSummary) {
    println!("Output: {}", summary.output.display());
    let mut table = Table::new();
    table.set_header(vec![header_cell("Rows read"), header_cell("Combinations")]);
    apply_table_style(&mut table);
    table.add_row(vec![Cell::new(summary.rows), Cell::new(summary.combinations)]);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 1, CellAlignment::Right);
    println!("{table}");
}

pub fn print_derive_summary(result: &DeriveResult) {
    println!("Raw data: {} ({} rows)", result.raw.display(), result.rows);
    if let Some(path) = &result.output {
        println!("Output: {}", path.display());
    }
    let config = &result.config;
    let mut table = Table::new();
    table.set_header(vec![header_cell("Key"), header_cell("Derived")]);
    apply_table_style(&mut table);
    let rows = [
        ("gender_values", config.gender_values.len().to_string()),
        ("condition_values", config.condition_values.len().to_string()),
        ("drug_values", config.drug_values.len().to_string()),
        ("side_effect_values", config.side_effect_values.len().to_string()),
        ("dosage_values", config.dosage_values.len().to_string()),
        ("age_range", config.age_range.to_string()),
        ("duration_range", config.duration_range.to_string()),
        ("score_range", config.score_range.to_string()),
    ];
    for (key, value) in rows {
        table.add_row(vec![Cell::new(key), Cell::new(value)]);
    }
    println!("{table}");
}

pub fn print_check_summary(result: &CheckResult) {
    println!("Requests: {}", result.source.display());
    println!("Schema fingerprint: {}", result.fingerprint);
    if result.degraded {
        println!("Schema: degraded (see warnings)");
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Patient_ID"),
        header_cell("Result"),
        header_cell("Fields"),
        header_cell("Reason"),
    ]);
    apply_issue_table_style(&mut table);
    for outcome in &result.outcomes {
        match &outcome.rejection {
            None => table.add_row(vec![
                Cell::new(&outcome.patient_id),
                Cell::new("accepted").fg(Color::Green),
                dim_cell("-"),
                dim_cell("-"),
            ]),
            Some(rejection) => {
                let label = match rejection.kind() {
                    RejectionKind::FieldViolation => "field violation",
                    RejectionKind::CombinationViolation => "combination violation",
                };
                let fields: Vec<&str> = rejection.fields().into_iter().map(Field::column).collect();
                table.add_row(vec![
                    Cell::new(&outcome.patient_id),
                    Cell::new(label)
                        .fg(Color::Red)
                        .add_attribute(Attribute::Bold),
                    Cell::new(fields.join(", ")),
                    Cell::new(rejection.messages().join("\n")),
                ])
            }
        };
    }
    println!("{table}");
    println!(
        "{} accepted, {} rejected",
        result.outcomes.len() - result.rejected(),
        result.rejected()
    );
}

pub fn print_validate_summary(result: &ValidateResult) {
    let report = &result.report;
    println!("Training table: {} ({} rows)", result.raw.display(), report.rows);
    if report.is_empty() {
        println!("No issues found.");
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Severity"),
        header_cell("Column"),
        header_cell("Count"),
        header_cell("Message"),
    ]);
    apply_issue_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    for issue in &report.issues {
        table.add_row(vec![
            severity_cell(issue.severity()),
            Cell::new(issue.column().unwrap_or("-")),
            issue.count().map_or_else(|| dim_cell("-"), Cell::new),
            Cell::new(issue.message()),
        ]);
    }
    println!("{table}");
    println!(
        "{} errors, {} warnings",
        report.error_count(),
        report.warning_count()
    );
}

pub fn print_schema(registry: &SchemaRegistry) {
    let report = registry.load_report();
    println!("Configuration: {}", source_label(&report.config));
    println!("Catalog: {}", source_label(&report.catalog));
    println!("Fingerprint: {}", registry.fingerprint());

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Field"),
        header_cell("Kind"),
        header_cell("Permitted"),
    ]);
    apply_table_style(&mut table);
    for field in Field::ALL {
        let (kind, permitted) = match field.kind() {
            FieldKind::Identifier => ("identifier", "any".to_string()),
            FieldKind::Range => (
                "range",
                registry
                    .range_for(field)
                    .map_or_else(|| "-".to_string(), |b| b.to_string()),
            ),
            FieldKind::Categorical => ("categorical", registry.domain_for(field).values().join(", ")),
            FieldKind::Dosage => {
                let values: Vec<String> = registry
                    .dosage_domain()
                    .values()
                    .iter()
                    .map(ToString::to_string)
                    .collect();
                ("dosage", values.join(", "))
            }
            FieldKind::Target => ("target", registry.score_range().to_string()),
        };
        table.add_row(vec![Cell::new(field.column()), dim_cell(kind), Cell::new(permitted)]);
    }
    println!("{table}");
    println!("Valid combinations: {}", registry.catalog().len());
    if registry.catalog().is_empty() {
        println!("Combination checks are not enforced (empty catalog).");
    }
}

fn source_label(status: &SourceStatus) -> String {
    match status {
        SourceStatus::Loaded { path } => format!("loaded from {}", path.display()),
        SourceStatus::Missing { path } => format!("missing ({}), using defaults", path.display()),
        SourceStatus::Malformed { path, message } => {
            format!("malformed ({}): {message}", path.display())
        }
        SourceStatus::Provided => "provided".to_string(),
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_issue_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn severity_cell(severity: Severity) -> Cell {
    let color = match severity {
        Severity::Error => Color::Red,
        Severity::Warning => Color::Yellow,
    };
    Cell::new(severity.label())
        .fg(color)
        .add_attribute(Attribute::Bold)
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
