use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use sdrf_cli::workflow::{ColumnInfo, MapReport};
use sdrf_map::MatchRecord;
use sdrf_validate::NoticeKind;

pub fn print_columns(columns: &[ColumnInfo]) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Column"),
        header_cell("Category"),
        header_cell("Ontology key"),
        header_cell("Terms"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 3, CellAlignment::Center);
    for info in columns {
        let key = match &info.ontology_key {
            Some(key) => Cell::new(key),
            None => dim_cell("-"),
        };
        let terms = match (&info.ontology_key, info.has_terms) {
            (None, _) => dim_cell("-"),
            (Some(_), true) => Cell::new("✓").fg(Color::Green).add_attribute(Attribute::Bold),
            (Some(_), false) => Cell::new("missing").fg(Color::Yellow),
        };
        table.add_row(vec![
            Cell::new(info.name),
            Cell::new(info.category.label()),
            key,
            terms,
        ]);
    }
    println!("{table}");
}

pub fn print_map_summary(report: &MapReport) {
    println!("Output: {}", report.output.display());
    if let Some(mismatch) = &report.row_mismatch {
        eprintln!(
            "warning: local table has {} rows, template has {}; committed columns were fitted to the template",
            mismatch.local_rows, mismatch.target_rows
        );
    }

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Local"),
        header_cell("Target"),
        header_cell("Category"),
        header_cell("Outcome"),
        header_cell("Message"),
    ]);
    apply_table_style(&mut table);
    for record in &report.records {
        table.add_row(record_row(record));
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        dim_cell(format!("{} rows", report.rows)),
        dim_cell("-"),
        Cell::new(format!("{} accepted", report.accepted)).add_attribute(Attribute::Bold),
        count_cell(report.rejected, "rejected", Color::Red),
    ]);
    println!("{table}");

    if !report.unmatched_locals.is_empty() {
        println!("Unmatched local columns: {}", report.unmatched_locals.join(", "));
    }
}

fn record_row(record: &MatchRecord) -> Vec<Cell> {
    let target = match &record.target {
        Some(target) => Cell::new(target),
        None => dim_cell("(skip)"),
    };
    let category = match record.category {
        Some(category) => Cell::new(category.label()),
        None => dim_cell("-"),
    };
    vec![
        Cell::new(&record.local),
        target,
        category,
        outcome_cell(record),
        Cell::new(record.diagnostic.message()),
    ]
}

fn outcome_cell(record: &MatchRecord) -> Cell {
    let label = record.diagnostic.label();
    match record.diagnostic.notice() {
        NoticeKind::Success => Cell::new(label).fg(Color::Green),
        NoticeKind::Error => Cell::new(label).fg(Color::Red).add_attribute(Attribute::Bold),
        NoticeKind::Instruction => Cell::new(label).fg(Color::Yellow),
        NoticeKind::Neutral => dim_cell(label),
    }
}

fn count_cell(count: usize, noun: &str, color: Color) -> Cell {
    let text = format!("{count} {noun}");
    if count > 0 {
        Cell::new(text).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(text)
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
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
