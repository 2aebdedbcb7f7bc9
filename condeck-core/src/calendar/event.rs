//! Calendar events derived from contests.
//!
//! Events are ephemeral value objects: rebuilt from the contest list on
//! every layout pass and discarded once the grid is produced. Only their
//! ids are deterministic, which is what keeps lane assignment stable.

use chrono::NaiveDate;

use crate::contest::Contest;

/// Id suffix for the announcement marker derived from a contest.
pub const ANNOUNCEMENT_SUFFIX: &str = "-announcement";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    /// The submission window, start date through deadline.
    Ranged,
    /// A single-day winner-announcement marker.
    Point,
}

/// One bar (or marker) to place on the month grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarEvent {
    pub id: String,
    pub contest_id: String,
    pub name: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub kind: EventKind,
}

/// Derive calendar events from the contest list.
///
/// Every contest yields a ranged event with the contest's own id; contests
/// with an announcement date also yield a point event with the
/// `-announcement` id suffix. Contest ids are trusted to be unique.
pub fn materialize(contests: &[Contest]) -> Vec<CalendarEvent> {
    let mut events = Vec::new();

    for contest in contests {
        events.push(CalendarEvent {
            id: contest.id.clone(),
            contest_id: contest.id.clone(),
            name: contest.name.clone(),
            start: contest.start_date,
            end: contest.deadline,
            kind: EventKind::Ranged,
        });

        if let Some(announcement) = contest.announcement_date {
            events.push(CalendarEvent {
                id: format!("{}{}", contest.id, ANNOUNCEMENT_SUFFIX),
                contest_id: contest.id.clone(),
                name: contest.name.clone(),
                start: announcement,
                end: announcement,
                kind: EventKind::Point,
            });
        }
    }

    events
}

/// Keep events whose range intersects `[grid_start, grid_end]` (inclusive),
/// sorted ascending by start date.
///
/// The sort is stable so ties keep their materialization order; lane
/// assignment priority depends on this ordering being deterministic. An
/// inverted range (end before start) intersects nothing and drops out here.
pub fn visible_events(
    events: Vec<CalendarEvent>,
    grid_start: NaiveDate,
    grid_end: NaiveDate,
) -> Vec<CalendarEvent> {
    let mut visible: Vec<CalendarEvent> = events
        .into_iter()
        .filter(|e| e.start <= grid_end && e.end >= grid_start)
        .collect();

    visible.sort_by_key(|e| e.start);
    visible
}
