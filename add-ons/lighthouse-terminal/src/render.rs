//! Pure rendering of the current `AppState` snapshot: dashboard panels,
//! mission board, and transcript. No business logic and no mutation — the
//! controller owns all of that.

use chrono::{DateTime, Local};
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use console::style;
use lighthouse_core::{
    sort_missions, AppState, Message, Mission, MissionSortKey, MissionStatus, Role,
    TacticalMetrics,
};

const PRODUCTIVE_HOURS_TARGET: f64 = 8.0;

/// Renders a ten-segment bar `[████░░░░░░]` for a 0-100 value. Values above
/// 100 fill the bar; this is the only place the 0-100 convention is enforced.
fn meter_bar_ascii(value: u32) -> String {
    let filled = ((value.min(100) as f64 / 100.0) * 10.0).round() as usize;
    let empty = 10_usize.saturating_sub(filled);
    format!("[{}{}]", "█".repeat(filled), "░".repeat(empty))
}

fn panel_header(title: &str) {
    println!("  ─── {} {}", title, "─".repeat(46_usize.saturating_sub(title.chars().count())));
    println!();
}

/// Builds the banner box. Border width follows the content, so configured app
/// names of any length keep the right edge aligned.
fn banner_lines(app_name: &str, stamp: &str) -> Vec<String> {
    let title = format!("{} — Personal Order Reconstruction System", app_name.to_uppercase());
    let inner = title.chars().count().max(stamp.chars().count()) + 6;
    vec![
        format!("╔{}╗", "═".repeat(inner)),
        format!("║   {:<width$}║", title, width = inner - 3),
        format!("║   {:<width$}║", stamp, width = inner - 3),
        format!("╚{}╝", "═".repeat(inner)),
    ]
}

pub fn render_banner(app_name: &str) {
    let stamp = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
    println!();
    for line in banner_lines(app_name, &stamp) {
        println!("{line}");
    }
    println!();
}

pub fn render_dashboard(metrics: &TacticalMetrics) {
    panel_header("ENERGY RESERVE");
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("Metric").add_attribute(Attribute::Bold),
            Cell::new("Level")
                .set_alignment(CellAlignment::Center)
                .add_attribute(Attribute::Bold),
            Cell::new("Value")
                .set_alignment(CellAlignment::Right)
                .add_attribute(Attribute::Bold),
        ]);
    for (name, value) in [
        ("Sleep", metrics.energy.sleep),
        ("Diet", metrics.energy.diet),
        ("Exercise", metrics.energy.exercise),
    ] {
        let color = if value >= 70 {
            Color::Green
        } else if value >= 40 {
            Color::Yellow
        } else {
            Color::Red
        };
        table.add_row(vec![
            Cell::new(name),
            Cell::new(meter_bar_ascii(value))
                .set_alignment(CellAlignment::Center)
                .fg(color),
            Cell::new(value).set_alignment(CellAlignment::Right),
        ]);
    }
    println!("{table}");
    println!("  AVG SYSTEM INTEGRITY: {}%", metrics.system_integrity());
    println!();

    panel_header("TERRITORY EXPANSION");
    let ratio = (metrics.territory.productive_hours / PRODUCTIVE_HOURS_TARGET * 100.0).min(100.0);
    println!(
        "  {}h effective working hours today  {}",
        metrics.territory.productive_hours,
        meter_bar_ascii(ratio as u32)
    );
    println!("  Projects under reconstruction: {}", metrics.territory.project_count);
    println!();

    panel_header("FORTRESS STABILITY");
    println!(
        "  Harmful pulses intercepted: {}",
        style(metrics.fortress.interceptions).bold()
    );
    println!(
        "  Last breach deflected: {}",
        metrics.fortress.last_intercept_time
    );
    println!();
}

pub fn render_missions(missions: &[Mission], key: MissionSortKey) {
    panel_header("FAITH MISSION SYSTEM");
    println!("  Sorted by {} (/sort status|type|progress to change)", key.as_str());
    println!();

    let sorted = sort_missions(missions, key);
    if sorted.is_empty() {
        println!("  No active missions. Initiate output via terminal.");
        println!();
        return;
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("Mission Objective").add_attribute(Attribute::Bold),
            Cell::new("Priority")
                .set_alignment(CellAlignment::Center)
                .add_attribute(Attribute::Bold),
            Cell::new("Status")
                .set_alignment(CellAlignment::Center)
                .add_attribute(Attribute::Bold),
            Cell::new("Reconstruction Progress")
                .set_alignment(CellAlignment::Center)
                .add_attribute(Attribute::Bold),
        ]);

    for m in &sorted {
        let (status_color, status_text) = match m.status {
            MissionStatus::Active => (Color::Green, "● ACTIVE"),
            MissionStatus::Completed => (Color::Cyan, "✓ COMPLETED"),
            MissionStatus::Abandoned => (Color::DarkGrey, "✗ ABANDONED"),
        };
        table.add_row(vec![
            Cell::new(&m.title),
            Cell::new(m.kind.as_str()).set_alignment(CellAlignment::Center),
            Cell::new(status_text)
                .set_alignment(CellAlignment::Center)
                .fg(status_color),
            Cell::new(format!("{} {}%", meter_bar_ascii(m.progress), m.progress))
                .set_alignment(CellAlignment::Center),
        ]);
    }
    println!("{table}");
    println!();
}

fn local_time(stamp: &str) -> String {
    DateTime::parse_from_rfc3339(stamp)
        .map(|t| t.with_timezone(&Local).format("%H:%M:%S").to_string())
        .unwrap_or_else(|_| stamp.to_string())
}

/// Prints one transcript entry. Markdown bodies are printed as-is; rendering
/// markdown is out of scope for the terminal.
pub fn render_message(msg: &Message) {
    let label = match msg.role {
        Role::User => style("OPERATOR").cyan().bold(),
        Role::Model => style("ABYSS LIGHTHOUSE").magenta().bold(),
    };
    println!("  {} · {}", label, style(local_time(&msg.timestamp)).dim());
    for line in msg.content.lines() {
        println!("    {}", line);
    }
    println!();
}

pub fn render_transcript(state: &AppState) {
    panel_header("COMMAND TERMINAL");
    for msg in &state.history {
        render_message(msg);
    }
}

pub fn render_full(app_name: &str, state: &AppState, sort_key: MissionSortKey) {
    render_banner(app_name);
    render_dashboard(&state.metrics);
    render_missions(&state.missions, sort_key);
    render_transcript(state);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn banner_edges_stay_aligned_for_any_app_name() {
        for name in ["Abyss Lighthouse", "HQ", "A Much Longer Command Center Name"] {
            let lines = banner_lines(name, "2026-08-25 12:00:00");
            let widths: Vec<usize> = lines.iter().map(|l| l.chars().count()).collect();
            assert!(
                widths.iter().all(|w| *w == widths[0]),
                "banner lines for {:?} have uneven widths: {:?}",
                name,
                widths
            );
        }
    }

    #[test]
    fn meter_bar_caps_at_ten_segments() {
        assert_eq!(meter_bar_ascii(0), format!("[{}]", "░".repeat(10)));
        assert_eq!(meter_bar_ascii(100), format!("[{}]", "█".repeat(10)));
        // Unclamped metric values fill the bar instead of widening it.
        assert_eq!(meter_bar_ascii(2_000_000_000), format!("[{}]", "█".repeat(10)));
    }
}
