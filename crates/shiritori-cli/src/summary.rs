use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use shiritori_core::{BuildReport, Rejection, SourceReport};
use shiritori_model::WordEntry;

use crate::types::{BuildResult, QueryResult};

pub fn print_build_summary(result: &BuildResult) {
    println!("Output: {}", result.output.display());
    if let Some(path) = &result.report_file {
        println!("Report: {}", path.display());
    }
    println!("{}", source_table(&result.report));
    if result.report.total_rejected() > 0 {
        println!("{}", rejection_table(&result.report));
    }
    let merges = &result.report.merges;
    println!(
        "Merged {} candidates: {} new, {} promoted, {} joined, {} duplicate, {} dominated",
        merges.total(),
        merges.inserted,
        merges.promoted,
        merges.appended,
        merges.duplicate,
        merges.dominated,
    );
    println!("Words: {}", result.report.entries);
}

pub fn print_query_result(result: &QueryResult) {
    if result.is_empty() {
        eprintln!(
            "no word for {} in {}",
            result.query,
            result.dictionary.display()
        );
        return;
    }
    println!("{}", entry_table(&result.entries));
    if result.ng_word {
        println!("note: {} is an NG word and is never picked at random", result.query);
    }
}

fn source_table(report: &BuildReport) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Source"),
        header_cell("Rows"),
        header_cell("Malformed"),
        header_cell("Admitted"),
        header_cell("Rejected"),
    ]);
    apply_table_style(&mut table);
    for index in 1..5 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    for source in &report.sources {
        table.add_row(vec![
            Cell::new(source.path.display()),
            Cell::new(source.rows),
            count_cell(source.malformed, Color::Yellow),
            Cell::new(source.admitted),
            Cell::new(source.rejected),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(report.total_rows()).add_attribute(Attribute::Bold),
        count_cell(sum_sources(report, |s| s.malformed), Color::Yellow).add_attribute(Attribute::Bold),
        Cell::new(sum_sources(report, |s| s.admitted)).add_attribute(Attribute::Bold),
        Cell::new(sum_sources(report, |s| s.rejected)).add_attribute(Attribute::Bold),
    ]);
    table
}

fn sum_sources(report: &BuildReport, count: impl Fn(&SourceReport) -> usize) -> usize {
    report.sources.iter().map(count).sum()
}

fn rejection_table(report: &BuildReport) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Rejected because"), header_cell("Rows")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for reason in Rejection::ALL {
        let count = report.rejected_for(reason);
        if count > 0 {
            table.add_row(vec![Cell::new(reason.label()), Cell::new(count)]);
        }
    }
    table
}

fn entry_table(entries: &[WordEntry]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Reading"),
        header_cell("Surfaces"),
        header_cell("POS"),
        header_cell("Subtype"),
        header_cell("Compound"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 4, CellAlignment::Center);
    for entry in entries {
        table.add_row(vec![
            Cell::new(&entry.reading).add_attribute(Attribute::Bold),
            Cell::new(entry.joined_surfaces()),
            Cell::new(&entry.pos2),
            dim_cell(&entry.pos3),
            Cell::new(&entry.compound),
        ]);
    }
    table
}

fn apply_table_style(table: &mut Table) {
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

fn count_cell(count: usize, color: Color) -> Cell {
    if count == 0 {
        dim_cell(count)
    } else {
        Cell::new(count).fg(color)
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
