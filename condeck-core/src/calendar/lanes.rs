//! Greedy lane assignment for the month grid.
//!
//! Events are placed one week row at a time, in ascending start-date order.
//! Within a row, each event probes lanes from the top down and takes the
//! first one no overlapping event already holds. The chosen lane is recorded
//! in a map keyed by event id and reused verbatim on every later row the
//! event spans, so a multi-week bar stays on the same line across row
//! breaks. Lanes are never freed within one layout pass.

use std::collections::{HashMap, HashSet};

use chrono::NaiveDate;

use super::event::{CalendarEvent, materialize, visible_events};
use super::grid::{CalendarDay, DAYS_PER_WEEK, grid_days};
use crate::contest::Contest;

/// One event occupying one day cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    pub event: CalendarEvent,
    /// Vertical stacking slot, 0 = topmost. Unbounded.
    pub lane: usize,
    /// True only on the day equal to the event's start (label goes here).
    pub starts_here: bool,
    /// True only on the day equal to the event's end.
    pub ends_here: bool,
}

/// A day plus everything placed on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayCell {
    pub day: CalendarDay,
    pub placements: Vec<Placement>,
}

/// One Sunday-to-Saturday row of the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Week {
    pub days: Vec<DayCell>,
}

impl Week {
    /// Highest lane index used in this row, if anything is placed.
    pub fn max_lane(&self) -> Option<usize> {
        self.days
            .iter()
            .flat_map(|cell| cell.placements.iter())
            .map(|p| p.lane)
            .max()
    }
}

/// The finished layout: exactly six weeks of seven day cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthLayout {
    pub weeks: Vec<Week>,
}

impl MonthLayout {
    /// Run the full layout pipeline for the month containing `reference`.
    ///
    /// Pure function of its inputs: the same contests, reference and today
    /// always produce the identical layout.
    pub fn build(reference: NaiveDate, contests: &[Contest], today: NaiveDate) -> MonthLayout {
        let days = grid_days(reference, today);
        let grid_start = days[0].date;
        let grid_end = days[days.len() - 1].date;

        let events = visible_events(materialize(contests), grid_start, grid_end);

        // Event id -> lane, threaded through every row so lanes assigned on
        // one row carry over to the next. Scoped to this single pass.
        let mut lanes: HashMap<String, usize> = HashMap::new();

        let weeks = days
            .chunks(DAYS_PER_WEEK)
            .map(|row| place_week(row, &events, &mut lanes))
            .collect();

        MonthLayout { weeks }
    }

    /// The cell for a given date, if it is inside the visible grid.
    pub fn day(&self, date: NaiveDate) -> Option<&DayCell> {
        self.weeks
            .iter()
            .flat_map(|week| week.days.iter())
            .find(|cell| cell.day.date == date)
    }
}

/// Place every visible event that overlaps one week row.
fn place_week(
    row: &[CalendarDay],
    events: &[CalendarEvent],
    lanes: &mut HashMap<String, usize>,
) -> Week {
    let mut cells: Vec<DayCell> = row
        .iter()
        .map(|&day| DayCell {
            day,
            placements: Vec::new(),
        })
        .collect();

    // Ids of events occupying each day column of this row.
    let mut occupied: Vec<HashSet<String>> = vec![HashSet::new(); row.len()];

    for event in events {
        let span: Vec<usize> = row
            .iter()
            .enumerate()
            .filter(|(_, day)| day.date >= event.start && day.date <= event.end)
            .map(|(col, _)| col)
            .collect();

        if span.is_empty() {
            continue;
        }

        let lane = match lanes.get(&event.id) {
            // Assigned on an earlier row. Lanes are never freed and events
            // are processed in the same order every row, so reusing it
            // cannot collide; record it directly.
            Some(&lane) => lane,
            None => {
                let lane = first_free_lane(&span, &occupied, lanes);
                lanes.insert(event.id.clone(), lane);
                lane
            }
        };

        for &col in &span {
            let date = cells[col].day.date;
            cells[col].placements.push(Placement {
                event: event.clone(),
                lane,
                starts_here: date == event.start,
                ends_here: date == event.end,
            });
            occupied[col].insert(event.id.clone());
        }
    }

    Week { days: cells }
}

/// First-fit probe: the lowest lane not held by any other event sharing a
/// day column with `span`. Quadratic in events-per-day, which is fine at the
/// tens-of-events scale a month view sees.
fn first_free_lane(
    span: &[usize],
    occupied: &[HashSet<String>],
    lanes: &HashMap<String, usize>,
) -> usize {
    let mut lane = 0;
    loop {
        let taken = span.iter().any(|&col| {
            occupied[col]
                .iter()
                .any(|id| lanes.get(id).copied() == Some(lane))
        });
        if !taken {
            return lane;
        }
        lane += 1;
    }
}
