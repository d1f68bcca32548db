//! Console summary of the ranking using `comfy-table`.

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use storelens_model::RankingRow;

use crate::pipeline::AnalysisOutcome;

/// Print the run summary: record counts, the ranking table and the chart
/// files written.
pub fn print_summary(outcome: &AnalysisOutcome) {
    println!(
        "Analyzed {} records across {} stores",
        outcome.records,
        outcome.ranking.len()
    );
    print_ranking(&outcome.ranking);
    if !outcome.charts.is_empty() {
        println!();
        println!("Charts:");
        for path in &outcome.charts {
            println!("- {}", path.display());
        }
    }
}

/// Print the ranking table, highest score first.
pub fn print_ranking(ranking: &[RankingRow]) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Store"),
        header_cell("Revenue"),
        header_cell("Avg Sale"),
        header_cell("Avg Rating"),
        header_cell("5-Star %"),
        header_cell("Shipping Eff."),
        header_cell("Growth %"),
        header_cell("Score"),
    ]);
    apply_table_style(&mut table);
    for index in [0, 2, 3, 4, 5, 6, 7, 8] {
        align_column(&mut table, index, CellAlignment::Right);
    }
    for (position, row) in ranking.iter().enumerate() {
        table.add_row(vec![
            rank_cell(position),
            store_cell(&row.store, position),
            Cell::new(format!("{:.2}", row.metrics.total_revenue)),
            Cell::new(format!("{:.2}", row.metrics.avg_sale)),
            Cell::new(format!("{:.2}", row.metrics.avg_rating)),
            Cell::new(format!("{:.1}", row.metrics.percent_five_star)),
            Cell::new(format!("{:.2}", row.metrics.shipping_efficiency)),
            Cell::new(format!("{:+.1}", row.growth_rate)),
            score_cell(row.final_score),
        ]);
    }
    println!("{table}");
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(140);
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

fn rank_cell(position: usize) -> Cell {
    let cell = Cell::new(position + 1);
    if position == 0 {
        cell.fg(Color::Green).add_attribute(Attribute::Bold)
    } else {
        cell
    }
}

fn store_cell(store: &str, position: usize) -> Cell {
    let cell = Cell::new(store).fg(Color::Blue);
    if position == 0 {
        cell.add_attribute(Attribute::Bold)
    } else {
        cell
    }
}

fn score_cell(score: f64) -> Cell {
    if score.is_nan() {
        Cell::new("NaN").fg(Color::DarkGrey)
    } else {
        Cell::new(format!("{score:.4}")).add_attribute(Attribute::Bold)
    }
}
