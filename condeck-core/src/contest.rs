//! Contest records and deadline arithmetic.
//!
//! A `Contest` is one tracked entry: a submission window (start date to
//! deadline), an optional winner-announcement date, and metadata like prize,
//! link and participants. Dates are plain calendar days with no time-of-day
//! or timezone component.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{CondeckError, CondeckResult};

/// Number of colors in the contest color palette.
pub const PALETTE_SIZE: usize = 17;

/// Someone working on a contest entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    pub id: String,
    pub name: String,
    pub submitted: bool,
}

impl Participant {
    pub fn new(name: &str) -> Self {
        Participant {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            submitted: false,
        }
    }
}

/// A tracked contest entry.
///
/// Serialized field names are camelCase so the on-disk JSON matches the
/// shape other contest-dashboard exports use.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contest {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub link: String,
    pub start_date: NaiveDate,
    pub deadline: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub announcement_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub prize: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub submission_type: String,
    #[serde(default)]
    pub participants: Vec<Participant>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// How close a contest deadline is, relative to some "today".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dday {
    /// Deadline has passed.
    Closed,
    /// Deadline is today.
    Today,
    /// Deadline within the next week.
    Soon(i64),
    /// More than a week away.
    Upcoming(i64),
}

impl Dday {
    pub fn label(&self) -> String {
        match self {
            Dday::Closed => "closed".to_string(),
            Dday::Today => "D-Day".to_string(),
            Dday::Soon(days) | Dday::Upcoming(days) => format!("D-{}", days),
        }
    }
}

impl Contest {
    /// Create a contest with a fresh id and empty metadata.
    pub fn new(name: &str, start_date: NaiveDate, deadline: NaiveDate) -> Self {
        Contest {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            link: String::new(),
            start_date,
            deadline,
            announcement_date: None,
            prize: String::new(),
            submission_type: String::new(),
            participants: Vec::new(),
            notes: None,
        }
    }

    /// Check the field rules enforced at every write path:
    /// non-empty name, start <= deadline, announcement strictly after deadline.
    pub fn validate(&self) -> CondeckResult<()> {
        if self.name.trim().is_empty() {
            return Err(CondeckError::InvalidContest(
                "name must not be empty".to_string(),
            ));
        }
        if self.start_date > self.deadline {
            return Err(CondeckError::InvalidContest(format!(
                "deadline {} is before start date {}",
                self.deadline, self.start_date
            )));
        }
        if let Some(announcement) = self.announcement_date {
            if announcement <= self.deadline {
                return Err(CondeckError::InvalidContest(format!(
                    "announcement date {} must be after the deadline {}",
                    announcement, self.deadline
                )));
            }
        }
        Ok(())
    }

    /// Signed whole days until the deadline (negative once it has passed).
    pub fn days_until_deadline(&self, today: NaiveDate) -> i64 {
        (self.deadline - today).num_days()
    }

    pub fn dday(&self, today: NaiveDate) -> Dday {
        match self.days_until_deadline(today) {
            d if d < 0 => Dday::Closed,
            0 => Dday::Today,
            d if d <= 7 => Dday::Soon(d),
            d => Dday::Upcoming(d),
        }
    }

    /// A contest is finished once its deadline is in the past.
    pub fn is_finished(&self, today: NaiveDate) -> bool {
        self.deadline < today
    }

    /// Deterministic palette index derived from the contest id.
    pub fn color_index(&self) -> usize {
        color_index_for(&self.id)
    }

    pub fn submitted_count(&self) -> usize {
        self.participants.iter().filter(|p| p.submitted).count()
    }
}

/// Deterministic palette index for a contest id.
///
/// The classic 32-bit string hash over UTF-16 code units, so the same id
/// always maps to the same color, in any session.
pub fn color_index_for(id: &str) -> usize {
    if id.is_empty() {
        return 0;
    }
    let mut hash: i32 = 0;
    for unit in id.encode_utf16() {
        hash = hash
            .wrapping_shl(5)
            .wrapping_sub(hash)
            .wrapping_add(unit as i32);
    }
    hash.unsigned_abs() as usize % PALETTE_SIZE
}

/// Split contests into (ongoing, finished) relative to `today`.
///
/// Ongoing contests are ordered by nearest deadline first; finished ones by
/// most recently closed first.
pub fn partition_by_deadline(contests: &[Contest], today: NaiveDate) -> (Vec<Contest>, Vec<Contest>) {
    let mut ongoing: Vec<Contest> = contests
        .iter()
        .filter(|c| !c.is_finished(today))
        .cloned()
        .collect();
    let mut finished: Vec<Contest> = contests
        .iter()
        .filter(|c| c.is_finished(today))
        .cloned()
        .collect();

    ongoing.sort_by_key(|c| c.deadline);
    finished.sort_by_key(|c| std::cmp::Reverse(c.deadline));

    (ongoing, finished)
}
