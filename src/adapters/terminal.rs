//! Terminal rendering of rankings and sensitivity runs.

use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, Color, ContentArrangement, Row, Table};

use crate::domain::saw::{RankedResult, SensitivityRecord, StabilityReport};

fn new_table(header: Vec<&str>) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(header);
    table
}

/// Renders a ranking as `Rank | Alternative | Score`.
pub fn render_ranking_table(ranking: &RankedResult) -> String {
    let mut table = new_table(vec!["Rank", "Alternative", "Score"]);
    for (i, entry) in ranking.iter().enumerate() {
        table.add_row(Row::from(vec![
            Cell::new(i + 1),
            Cell::new(&entry.name),
            Cell::new(format!("{:.4}", entry.score)),
        ]));
    }
    table.to_string()
}

/// Renders a sensitivity run, highlighting steps where the winner changed.
pub fn render_sensitivity_table(
    records: &[SensitivityRecord],
    original_winner: Option<&str>,
) -> String {
    let mut table = new_table(vec!["Change", "New Weight", "Winner", "Score"]);
    for record in records {
        let winner = if Some(record.winner.as_str()) == original_winner {
            Cell::new(&record.winner)
        } else {
            Cell::new(&record.winner).fg(Color::Yellow)
        };
        table.add_row(Row::from(vec![
            Cell::new(format!("{:+.2}", record.change)),
            Cell::new(format!("{:.2}", record.new_weight)),
            winner,
            Cell::new(format!("{:.4}", record.score)),
        ]));
    }
    table.to_string()
}

/// One-line stability summary.
pub fn render_stability_summary(criterion: &str, report: &StabilityReport) -> String {
    let winners = report.distinct_winners().join(", ");
    format!(
        "Stability for {}: {:.1}% ({}), original winner {}, winners seen: {}",
        criterion,
        report.stability_percent,
        report.level,
        report.original_winner.as_deref().unwrap_or("-"),
        if winners.is_empty() { "-" } else { winners.as_str() },
    )
}
