//! Plain-text report rendering.

use std::fmt::Write;

use crate::config::SimConfig;
use crate::rarity::Rarity;
use crate::strategy::SimulationResult;
use crate::tally::Tally;

/// Groups digits in threes: `1234567` becomes `"1,234,567"`.
pub fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

pub fn format_rate(rate: Option<f64>) -> String {
    match rate {
        Some(rate) => format!("~{:.1}%", rate),
        None => "N/A".to_string(),
    }
}

pub fn render_notice(config: &SimConfig) -> String {
    let table = &config.table;
    let costs: Vec<String> = config.costs.iter().map(format_count).collect();
    let rates: Vec<String> = Rarity::ALL
        .iter()
        .map(|r| format!("{} {:.1}%", r.label(), table.probability(*r) * 100.0))
        .collect();

    let mut out = String::new();
    let _ = writeln!(out, "== Card Flip Simulator ==");
    let _ = writeln!(out);
    let _ = writeln!(out, "Rules:");
    let _ = writeln!(out, "- Card rates: {}", rates.join(", "));
    let _ = writeln!(
        out,
        "- Results are random and change from run to run"
    );
    let _ = writeln!(
        out,
        "- Starting items: {}",
        format_count(config.initial_budget)
    );
    let _ = writeln!(
        out,
        "- Each draw costs {} items in turn, reset to {} by a shuffle",
        costs.join(", "),
        format_count(config.costs.first())
    );
    let _ = writeln!(
        out,
        "- When items run short of a strategy's next card, the set is shuffled; \
         the run ends after the last affordable card"
    );
    let _ = writeln!(
        out,
        "- Shuffling is free and deals 4 new cards, at least one SR or above"
    );
    let _ = writeln!(out, "- The guarantee is modelled as:");
    let _ = writeln!(out, "    - 3 cards are dealt at the normal rates");
    let _ = writeln!(
        out,
        "    - if one of them is SR or above, the 4th is dealt normally"
    );
    let _ = writeln!(
        out,
        "    - otherwise the 4th is redealt until it is SR or above"
    );
    let _ = writeln!(out, "    - the 4 cards are then put in random order");
    let _ = writeln!(
        out,
        "- Because the order is random, which card is drawn first does not matter"
    );
    out
}

pub fn render_tally(tally: &Tally) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "| Rarity | {:>15} | {:>7} |", "Count", "Rate");
    let _ = writeln!(out, "|--------|-----------------|---------|");
    for row in tally.rows() {
        let _ = writeln!(
            out,
            "| {:<6} | {:>15} | {:>7} |",
            row.label,
            format_count(row.count),
            format_rate(row.rate)
        );
    }
    out
}

pub fn render_summary(results: &[SimulationResult]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "| Strategy | {:>13} | {:>13} | {:>7} | {:>7} |",
        "Draws", "Shuffles", "UR", "SR+"
    );
    let _ = writeln!(out, "|----------|---------------|---------------|---------|---------|");
    for result in results {
        let _ = writeln!(
            out,
            "| {:<8} | {:>13} | {:>13} | {:>7} | {:>7} |",
            result.strategy.short_name(),
            format_count(result.tally.total()),
            format_count(result.cycles),
            format_rate(Some(result.tally.rate(Rarity::Ur))),
            format_rate(Some(result.tally.sr_or_above_rate()))
        );
    }
    out
}
