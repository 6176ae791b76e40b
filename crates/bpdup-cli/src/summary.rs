use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use bpdup_model::{ConfidenceLevel, format_score};

use crate::commands::{CheckResult, ScoreResult};

pub fn print_check_summary(result: &CheckResult, limit: usize) {
    let summary = &result.check.summary;
    println!("Input: {}", result.input.display());
    if let Some(path) = &result.output {
        println!("Results: {}", path.display());
    }
    if let Some(path) = &result.summary_output {
        println!("Summary: {}", path.display());
    }

    let mut table = Table::new();
    table.set_header(vec![header_cell("Metric"), header_cell("Value")]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    table.add_row(vec![Cell::new("Total records"), Cell::new(summary.total_records)]);
    table.add_row(vec![
        Cell::new("Records with matches"),
        Cell::new(summary.records_with_matches),
    ]);
    table.add_row(vec![
        Cell::new("Candidate pairs"),
        Cell::new(summary.total_pairs).add_attribute(Attribute::Bold),
    ]);
    table.add_row(vec![
        Cell::new("Average score"),
        Cell::new(format!("{}%", format_score(summary.average_score))),
    ]);
    for level in ConfidenceLevel::ALL {
        table.add_row(vec![
            Cell::new(level.description()),
            count_cell(summary.count(level), confidence_color(level)),
        ]);
    }
    table.add_row(vec![
        Cell::new("Records skipped"),
        count_cell(summary.skipped_records, Color::Yellow),
    ]);
    table.add_row(vec![Cell::new("Comparisons"), dim_cell(summary.comparisons)]);
    println!("{table}");

    print_pair_table(result, limit);
    print_rejected_table(result);
}

fn print_pair_table(result: &CheckResult, limit: usize) {
    let pairs = &result.check.outcome.pairs;
    if pairs.is_empty() || limit == 0 {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("BP A"),
        header_cell("Name A"),
        header_cell("BP B"),
        header_cell("Name B"),
        header_cell("Score"),
        header_cell("Confidence"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 4, CellAlignment::Right);
    align_column(&mut table, 5, CellAlignment::Center);
    for pair in pairs.iter().take(limit) {
        let (Some(a), Some(b)) = (
            result.check.records.get(pair.index_a),
            result.check.records.get(pair.index_b),
        ) else {
            continue;
        };
        table.add_row(vec![
            Cell::new(&a.bp_number),
            Cell::new(a.combined_name().trim()),
            Cell::new(&b.bp_number),
            Cell::new(b.combined_name().trim()),
            Cell::new(pair.display_score()),
            confidence_cell(pair.confidence),
        ]);
    }
    println!();
    if pairs.len() > limit {
        println!("Top {limit} of {} candidate pairs:", pairs.len());
    } else {
        println!("Candidate pairs:");
    }
    println!("{table}");
}

fn print_rejected_table(result: &CheckResult) {
    if result.check.rejected.is_empty() && result.check.outcome.skipped.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Line"),
        header_cell("BP Number"),
        header_cell("Reason"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for row in &result.check.rejected {
        table.add_row(vec![
            Cell::new(row.line),
            match &row.bp_number {
                Some(bp_number) => Cell::new(bp_number),
                None => dim_cell("-"),
            },
            Cell::new(row.reason.to_string()).fg(Color::Yellow),
        ]);
    }
    for skipped in &result.check.outcome.skipped {
        table.add_row(vec![
            dim_cell("-"),
            Cell::new(&skipped.bp_number),
            Cell::new(skipped.reason.to_string()).fg(Color::Yellow),
        ]);
    }
    println!();
    println!("Skipped rows:");
    println!("{table}");
}

pub fn print_score(result: &ScoreResult) {
    println!("A: {:?}", result.first);
    println!("B: {:?}", result.second);
    let breakdown = &result.breakdown;
    let mut table = Table::new();
    table.set_header(vec![header_cell("Metric"), header_cell("Score")]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    table.add_row(vec![Cell::new("Token sort"), Cell::new(format_score(breakdown.token_sort))]);
    table.add_row(vec![Cell::new("Token set"), Cell::new(format_score(breakdown.token_set))]);
    table.add_row(vec![Cell::new("Simple"), Cell::new(format_score(breakdown.simple))]);
    table.add_row(vec![
        Cell::new("Combined").add_attribute(Attribute::Bold),
        Cell::new(format_score(breakdown.combined)).add_attribute(Attribute::Bold),
    ]);
    table.add_row(vec![Cell::new("Confidence"), confidence_cell(result.confidence)]);
    println!("{table}");
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn confidence_cell(level: ConfidenceLevel) -> Cell {
    let cell = Cell::new(level.label()).fg(confidence_color(level));
    if level == ConfidenceLevel::High {
        cell.add_attribute(Attribute::Bold)
    } else {
        cell
    }
}

fn confidence_color(level: ConfidenceLevel) -> Color {
    match level {
        ConfidenceLevel::High => Color::Red,
        ConfidenceLevel::Medium => Color::Yellow,
        ConfidenceLevel::Low => Color::Green,
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
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
