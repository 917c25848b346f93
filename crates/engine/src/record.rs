// ABOUTME: StatsRecord and TopPost data models plus the PartialStats merge accumulator.
// ABOUTME: Serializes in the camelCase JSON shape the popup stores and exports.

//! Extraction output data model.
//!
//! A [`StatsRecord`] is constructed fresh at the start of each extraction run,
//! populated by zero or more strategies via [`PartialStats`] values, and then
//! owned by the caller. Reconciliation is a fold: each contributing strategy's
//! partial output is applied onto one accumulator with field-level overwrite
//! semantics, and the accumulator is finalized with defaults for anything no
//! strategy identified.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One entry in the ranked post list, ordered by page position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct TopPost {
    pub title: String,
    pub views: u64,
}

/// The unit of extraction output: visitor counts and post rankings for one run.
///
/// Every numeric field defaults to 0 when no strategy identified it.
/// `weekly_series` is either empty or exactly 7 chronological daily counts.
/// `top_posts` holds at most 10 entries in document order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsRecord {
    pub today: u64,
    pub yesterday: u64,
    pub week: u64,
    pub month: u64,
    pub total: u64,
    #[serde(default)]
    pub weekly_series: Vec<u64>,
    #[serde(default)]
    pub top_posts: Vec<TopPost>,
    pub extracted_at: DateTime<Utc>,
}

impl StatsRecord {
    /// An all-default record stamped with the given extraction time.
    pub fn empty(extracted_at: DateTime<Utc>) -> Self {
        Self {
            today: 0,
            yesterday: 0,
            week: 0,
            month: 0,
            total: 0,
            weekly_series: Vec::new(),
            top_posts: Vec::new(),
            extracted_at,
        }
    }

    /// Returns true if no field was positively identified (all defaults).
    pub fn is_all_default(&self) -> bool {
        self.today == 0
            && self.yesterday == 0
            && self.week == 0
            && self.month == 0
            && self.total == 0
            && self.weekly_series.is_empty()
            && self.top_posts.is_empty()
    }
}

/// A `StatsRecord`-shaped value where only some fields are populated.
///
/// Absent fields are not zero-with-meaning; they mean "this strategy found
/// nothing for the field". A strategy that found nothing at all reports no
/// partial record rather than an empty-but-present one.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PartialStats {
    pub today: Option<u64>,
    pub yesterday: Option<u64>,
    pub week: Option<u64>,
    pub month: Option<u64>,
    pub total: Option<u64>,
    pub weekly_series: Option<Vec<u64>>,
    pub top_posts: Option<Vec<TopPost>>,
}

impl PartialStats {
    /// Returns true when no field is populated.
    pub fn is_empty(&self) -> bool {
        self.today.is_none()
            && self.yesterday.is_none()
            && self.week.is_none()
            && self.month.is_none()
            && self.total.is_none()
            && self.weekly_series.is_none()
            && self.top_posts.is_none()
    }

    /// Field-level overwrite merge: any populated field in `other` replaces
    /// this accumulator's value; absent fields never erase earlier ones.
    pub fn apply(&mut self, other: PartialStats) {
        if other.today.is_some() {
            self.today = other.today;
        }
        if other.yesterday.is_some() {
            self.yesterday = other.yesterday;
        }
        if other.week.is_some() {
            self.week = other.week;
        }
        if other.month.is_some() {
            self.month = other.month;
        }
        if other.total.is_some() {
            self.total = other.total;
        }
        if other.weekly_series.is_some() {
            self.weekly_series = other.weekly_series;
        }
        if other.top_posts.is_some() {
            self.top_posts = other.top_posts;
        }
    }

    /// Finalizes the accumulator into a full record, defaulting absent
    /// numeric fields to 0 and absent lists to empty.
    pub fn into_record(self, extracted_at: DateTime<Utc>) -> StatsRecord {
        StatsRecord {
            today: self.today.unwrap_or(0),
            yesterday: self.yesterday.unwrap_or(0),
            week: self.week.unwrap_or(0),
            month: self.month.unwrap_or(0),
            total: self.total.unwrap_or(0),
            weekly_series: self.weekly_series.unwrap_or_default(),
            top_posts: self.top_posts.unwrap_or_default(),
            extracted_at,
        }
    }
}
