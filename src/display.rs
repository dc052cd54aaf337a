use colored::Colorize;
use comfy_table::{Cell, CellAlignment, ContentArrangement, Table};

use crate::cards::{Card, Suit};
use crate::equity::EquityResult;
use crate::strategy::{Action, ActionRecommendation};

const RANGE_GRID_RANKS: [char; 13] = ['A', 'K', 'Q', 'J', 'T', '9', '8', '7', '6', '5', '4', '3', '2'];

pub fn range_grid(hands_in_range: &[&str], title: &str) -> String {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);

    let mut header = vec![Cell::new("")];
    for &r in &RANGE_GRID_RANKS {
        header.push(Cell::new(r).set_alignment(CellAlignment::Center));
    }
    table.set_header(header);

    for (i, &r1) in RANGE_GRID_RANKS.iter().enumerate() {
        let mut row = vec![Cell::new(r1.to_string().bold().to_string())];
        for (j, &r2) in RANGE_GRID_RANKS.iter().enumerate() {
            let hand = if i == j {
                format!("{}{}", r1, r2)
            } else if i < j {
                format!("{}{}s", r1, r2)
            } else {
                format!("{}{}o", r2, r1)
            };

            let cell = if hands_in_range.iter().any(|&h| h == hand) {
                Cell::new(hand.green().bold().to_string())
            } else {
                Cell::new(hand.dimmed().to_string())
            };
            row.push(cell.set_alignment(CellAlignment::Center));
        }
        table.add_row(row);
    }

    format!("  {}\n{}", title.bold(), table)
}

pub fn equity_bar(equity: f64, width: usize) -> String {
    let filled = ((equity.clamp(0.0, 1.0) * width as f64) as usize).min(width);
    let bar: String = "\u{2588}".repeat(filled) + &"\u{2591}".repeat(width - filled);
    let pct = format!("{:.1}%", equity * 100.0);

    if equity >= 0.6 {
        format!("{} {}", bar.green(), pct)
    } else if equity >= 0.4 {
        format!("{} {}", bar.yellow(), pct)
    } else {
        format!("{} {}", bar.red(), pct)
    }
}

pub fn board_display(cards: &[Card]) -> String {
    cards
        .iter()
        .map(|card| {
            let text = card.pretty();
            match card.suit {
                Suit::Spades => text.white().to_string(),
                Suit::Hearts => text.red().to_string(),
                Suit::Diamonds => text.blue().to_string(),
                Suit::Clubs => text.green().to_string(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn equity_table(result: &EquityResult) -> String {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![Cell::new(""), Cell::new("")]);

    let rows = [
        ("Win", result.player_equity),
        ("Tie", result.tie_equity),
        ("Lose", result.opponent_equity),
    ];
    for (label, value) in rows {
        table.add_row(vec![
            Cell::new(label.bold().to_string()),
            Cell::new(format!("{:.1}%", value * 100.0)).set_alignment(CellAlignment::Right),
        ]);
    }
    table.add_row(vec![
        Cell::new("Equity".bold().to_string()),
        Cell::new(format!("{:.1}%", result.equity() * 100.0).bold().to_string())
            .set_alignment(CellAlignment::Right),
    ]);
    table.add_row(vec![
        Cell::new("Sims".bold().to_string()),
        Cell::new(result.simulations).set_alignment(CellAlignment::Right),
    ]);
    table.to_string()
}

pub fn odds_table(pot: f64, bet: f64, pot_odds: f64, mdf: f64) -> String {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("Metric").set_alignment(CellAlignment::Left),
        Cell::new("Value").set_alignment(CellAlignment::Right),
    ]);

    let rows = [
        ("Pot", format!("${:.0}", pot)),
        ("Bet", format!("${:.0}", bet)),
        ("Pot Odds", format!("{:.1}%", pot_odds * 100.0)),
        ("MDF", format!("{:.1}%", mdf * 100.0)),
    ];
    for (label, value) in rows {
        table.add_row(vec![
            Cell::new(label.bold().to_string()),
            Cell::new(value).set_alignment(CellAlignment::Right),
        ]);
    }

    table.to_string()
}

pub fn recommendation_table(recs: &[ActionRecommendation]) -> String {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        Cell::new("Action"),
        Cell::new("Frequency").set_alignment(CellAlignment::Right),
        Cell::new("EV").set_alignment(CellAlignment::Right),
    ]);

    for rec in recs {
        let ev = if rec.ev >= 0.0 {
            format!("{:.2}", rec.ev).green().to_string()
        } else {
            format!("{:.2}", rec.ev).red().to_string()
        };
        table.add_row(vec![
            Cell::new(styled_action(rec.action)),
            Cell::new(format!("{}%", rec.frequency)).set_alignment(CellAlignment::Right),
            Cell::new(ev).set_alignment(CellAlignment::Right),
        ]);
    }

    table.to_string()
}

pub fn styled_action(action: Action) -> String {
    let label = action.to_string();
    match action {
        Action::Bet | Action::Raise | Action::AllIn => label.red().bold().to_string(),
        Action::Call => label.green().bold().to_string(),
        Action::Check => label.yellow().bold().to_string(),
        Action::Fold => label.dimmed().bold().to_string(),
    }
}

pub fn print_section(title: &str, content: &str) {
    println!("\n{}", title.cyan().bold());
    println!("  {}", content);
}

pub fn print_error(msg: &str) {
    eprintln!("{} {}", "Error:".red().bold(), msg);
}
