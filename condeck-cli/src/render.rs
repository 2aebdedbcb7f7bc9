//! Terminal rendering for condeck types.
//!
//! Colored card and month-grid output using owo_colors. Each contest gets a
//! stable color from its id; announcements always render yellow.

use chrono::{Datelike, NaiveDate};
use condeck_core::calendar::{EventKind, MonthLayout, Placement, Week};
use condeck_core::contest::{Contest, Dday, PALETTE_SIZE, color_index_for};
use owo_colors::{AnsiColors, OwoColorize};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Terminal palette indexed by the contest id hash.
const PALETTE: [AnsiColors; PALETTE_SIZE] = [
    AnsiColors::Red,
    AnsiColors::BrightRed,
    AnsiColors::Yellow,
    AnsiColors::BrightYellow,
    AnsiColors::Green,
    AnsiColors::BrightGreen,
    AnsiColors::Cyan,
    AnsiColors::BrightCyan,
    AnsiColors::Blue,
    AnsiColors::BrightBlue,
    AnsiColors::Magenta,
    AnsiColors::BrightMagenta,
    AnsiColors::Red,
    AnsiColors::Yellow,
    AnsiColors::Green,
    AnsiColors::Cyan,
    AnsiColors::Blue,
];

pub fn contest_color(contest_id: &str) -> AnsiColors {
    PALETTE[color_index_for(contest_id)]
}

/// The colored D-day badge for a contest deadline.
pub fn dday_badge(contest: &Contest, today: NaiveDate) -> String {
    let dday = contest.dday(today);
    let label = format!("[{}]", dday.label());

    match dday {
        Dday::Closed => label.dimmed().to_string(),
        Dday::Today => label.red().bold().to_string(),
        Dday::Soon(_) => label.yellow().to_string(),
        Dday::Upcoming(_) => label,
    }
}

/// Extension trait for card-style rendering.
pub trait Render {
    fn render(&self, today: NaiveDate) -> String;
}

impl Render for Contest {
    fn render(&self, today: NaiveDate) -> String {
        let mut lines = Vec::new();

        lines.push(format!(
            "{} {} {}",
            "●".color(contest_color(&self.id)),
            self.name.bold(),
            dday_badge(self, today)
        ));
        lines.push(format!("   {} ~ {}", self.start_date, self.deadline));

        if let Some(announcement) = self.announcement_date {
            lines.push(format!("   {} {}", "announced:".dimmed(), announcement));
        }
        if !self.prize.is_empty() {
            lines.push(format!("   {} {}", "prize:".dimmed(), self.prize));
        }
        if !self.submission_type.is_empty() {
            lines.push(format!("   {} {}", "submission:".dimmed(), self.submission_type));
        }
        if !self.link.is_empty() {
            lines.push(format!("   {} {}", "link:".dimmed(), self.link));
        }
        if let Some(notes) = &self.notes {
            lines.push(format!("   {}", "notes:".dimmed()));
            for line in notes.lines() {
                lines.push(format!("      {line}"));
            }
        }
        if !self.participants.is_empty() {
            lines.push(format!(
                "   {} {}/{} submitted",
                "participants:".dimmed(),
                self.submitted_count(),
                self.participants.len()
            ));
            for p in &self.participants {
                let mark = if p.submitted {
                    "[x]".green().to_string()
                } else {
                    "[ ]".to_string()
                };
                let name = if p.submitted {
                    p.name.strikethrough().to_string()
                } else {
                    p.name.clone()
                };
                lines.push(format!("      {mark} {name}"));
            }
        }
        lines.push(format!("   {}", format!("id: {}", self.id).dimmed()));

        lines.join("\n")
    }
}

// =============================================================================
// Month grid
// =============================================================================

/// Width of one day column in the month grid.
const CELL_WIDTH: usize = 12;

const DAY_LABELS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Render a finished layout as a lane-stacked month grid.
pub fn render_month(layout: &MonthLayout, reference: NaiveDate) -> String {
    let total_width = CELL_WIDTH * DAY_LABELS.len();
    let mut lines = Vec::new();

    let title = reference.format("%B %Y").to_string();
    lines.push(format!("{:^total_width$}", title).bold().to_string());

    let header: String = DAY_LABELS
        .iter()
        .map(|label| format!("{label:<CELL_WIDTH$}"))
        .collect();
    lines.push(header.dimmed().to_string());
    lines.push("─".repeat(total_width).dimmed().to_string());

    for week in &layout.weeks {
        lines.push(day_number_line(week));
        if let Some(max_lane) = week.max_lane() {
            for lane in 0..=max_lane {
                lines.push(lane_line(week, lane));
            }
        }
        lines.push(String::new());
    }

    lines.join("\n")
}

fn day_number_line(week: &Week) -> String {
    week.days
        .iter()
        .map(|cell| {
            let number = format!("{:<CELL_WIDTH$}", cell.day.date.day());
            if cell.day.is_today {
                number.bold().reversed().to_string()
            } else if !cell.day.in_month {
                number.dimmed().to_string()
            } else {
                number
            }
        })
        .collect()
}

fn lane_line(week: &Week, lane: usize) -> String {
    week.days
        .iter()
        .map(|cell| {
            match cell.placements.iter().find(|p| p.lane == lane) {
                Some(placement) => bar_cell(placement),
                None => " ".repeat(CELL_WIDTH),
            }
        })
        .collect()
}

/// One day-cell's worth of an event bar. Ranged bars show their label on the
/// start day and a `┤` edge on the end day; announcements render as a single
/// yellow marker.
fn bar_cell(placement: &Placement) -> String {
    let cell = bar_cell_text(placement);
    match placement.event.kind {
        EventKind::Point => cell.yellow().to_string(),
        EventKind::Ranged => cell
            .color(contest_color(&placement.event.contest_id))
            .to_string(),
    }
}

/// The uncolored cell text, always exactly [`CELL_WIDTH`] columns wide.
/// Labels are measured in terminal columns, so double-width names stay
/// aligned with the day grid.
fn bar_cell_text(placement: &Placement) -> String {
    match placement.event.kind {
        EventKind::Point => {
            let label = truncate(&placement.event.name, CELL_WIDTH - 2);
            let mut cell = format!("!{label}");
            while cell.width() < CELL_WIDTH {
                cell.push(' ');
            }
            cell
        }
        EventKind::Ranged => {
            let mut bar = if placement.starts_here {
                truncate(&placement.event.name, CELL_WIDTH - 2)
            } else {
                String::new()
            };
            while bar.width() < CELL_WIDTH {
                bar.push('─');
            }
            if placement.ends_here && bar.ends_with('─') {
                bar.pop();
                bar.push('┤');
            }
            bar
        }
    }
}

/// Shorten `s` to at most `max` terminal columns, ending in `…` when cut.
fn truncate(s: &str, max: usize) -> String {
    if s.width() <= max {
        return s.to_string();
    }

    let budget = max.saturating_sub(1);
    let mut out = String::new();
    let mut used = 0;
    for ch in s.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use condeck_core::calendar::MonthLayout;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn badge_text_matches_deadline_distance() {
        let today = date(2024, 6, 10);
        let mut c = Contest::new("x", date(2024, 6, 1), date(2024, 6, 13));

        assert!(dday_badge(&c, today).contains("D-3"));
        c.deadline = today;
        assert!(dday_badge(&c, today).contains("D-Day"));
        c.deadline = date(2024, 6, 9);
        assert!(dday_badge(&c, today).contains("closed"));
    }

    #[test]
    fn card_lists_core_fields() {
        let mut c = Contest::new("Spring jam", date(2024, 6, 1), date(2024, 6, 10));
        c.prize = "$500".to_string();
        c.participants.push(condeck_core::Participant::new("ada"));

        let card = c.render(date(2024, 6, 5));
        assert!(card.contains("Spring jam"));
        assert!(card.contains("2024-06-01 ~ 2024-06-10"));
        assert!(card.contains("$500"));
        assert!(card.contains("0/1 submitted"));
        assert!(card.contains(&c.id));
    }

    #[test]
    fn month_grid_shows_title_and_event_label() {
        let contests = vec![Contest::new("Jam", date(2024, 6, 10), date(2024, 6, 12))];
        let layout = MonthLayout::build(date(2024, 6, 1), &contests, date(2024, 6, 1));

        let out = render_month(&layout, date(2024, 6, 1));
        assert!(out.contains("June 2024"));
        assert!(out.contains("Jam"));
        assert!(out.contains("Sun"));
    }

    #[test]
    fn truncate_appends_ellipsis() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a very long contest name", 10), "a very lo…");
    }

    #[test]
    fn truncate_counts_terminal_columns_for_wide_chars() {
        // Each hangul syllable takes two columns.
        assert_eq!(truncate("대상공모전", 4), "대…");
        assert_eq!(truncate("대상", 4), "대상");
    }

    #[test]
    fn bar_cells_stay_column_aligned_with_wide_names() {
        let contests = vec![
            Contest::new("친환경 디자인 공모전", date(2024, 6, 10), date(2024, 6, 12)),
            Contest::new("Jam", date(2024, 6, 10), date(2024, 6, 10)),
        ];
        let layout = MonthLayout::build(date(2024, 6, 1), &contests, date(2024, 6, 1));

        let cell = layout.day(date(2024, 6, 10)).unwrap();
        for placement in &cell.placements {
            assert_eq!(bar_cell_text(placement).width(), CELL_WIDTH);
        }
    }

    #[test]
    fn point_cell_pads_wide_labels_to_cell_width() {
        let mut c = Contest::new("공모전", date(2024, 6, 1), date(2024, 6, 5));
        c.announcement_date = Some(date(2024, 6, 20));
        let layout = MonthLayout::build(date(2024, 6, 1), &[c], date(2024, 6, 1));

        let cell = layout.day(date(2024, 6, 20)).unwrap();
        let marker = cell
            .placements
            .iter()
            .find(|p| p.event.kind == EventKind::Point)
            .unwrap();
        let text = bar_cell_text(marker);
        assert!(text.starts_with("!공모전"));
        assert_eq!(text.width(), CELL_WIDTH);
    }
}
