//! Row schema for the output CSV
//!
//! The column order is fixed and must never change: consumers resume by
//! rescanning this file, and the header is written exactly once over the
//! lifetime of the store.

use serde::{Deserialize, Serialize};

/// CSV column order. Must match the field order of [`Record`].
pub const COLUMNS: [&str; 10] = [
    "player_name",
    "interview_title",
    "date",
    "event",
    "venue",
    "team",
    "session_type",
    "interview_id",
    "url",
    "transcript",
];

/// One persisted interview row.
///
/// `interview_id` is the unique key; every other field may legitimately be
/// empty when the source page does not yield it. The date is the site's
/// display string, not a normalized value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub player_name: String,
    pub interview_title: String,
    pub date: String,
    pub event: String,
    pub venue: String,
    pub team: String,
    pub session_type: String,
    pub interview_id: String,
    pub url: String,
    pub transcript: String,
}
