//! Month-calendar layout engine.
//!
//! Turns the contest list into a render-ready month grid: a fixed 6x7 block
//! of days where every contest window and announcement has been assigned a
//! vertical lane so overlapping bars never collide, the way calendar UIs
//! stack all-day events.
//!
//! The whole pipeline is pure: contests in, `MonthLayout` out, no I/O and no
//! state shared between invocations.

mod event;
mod grid;
mod lanes;

pub use event::{ANNOUNCEMENT_SUFFIX, CalendarEvent, EventKind, materialize, visible_events};
pub use grid::{CalendarDay, DAYS_PER_WEEK, GRID_DAYS, WEEKS_PER_GRID, grid_days, grid_start};
pub use lanes::{DayCell, MonthLayout, Placement, Week};
