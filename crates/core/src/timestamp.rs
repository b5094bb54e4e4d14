//! Relative timestamp formatting for history entries.
//!
//! Entries are bucketed against rolling 24-hour windows measured back from
//! `now`, not against calendar days. Both cutoffs are strict: an entry
//! created exactly one day before `now` is no longer "today".

use std::fmt;

use chrono::{Duration, FixedOffset, Local, Offset, TimeZone, Utc};

use crate::types::Timestamp;

/// Literal shown for entries in the [`TimestampBucket::Yesterday`] bucket.
pub const YESTERDAY_LABEL: &str = "Yesterday";

/// Clock-time pattern for today's entries, e.g. `3:45 PM`.
pub const TIME_OF_DAY_FORMAT: &str = "%-I:%M %p";

/// Month-and-day pattern for older entries, e.g. `March 4`.
pub const MONTH_DAY_FORMAT: &str = "%B %-d";

/// Age bucket deciding how a timestamp is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimestampBucket {
    Today,
    Yesterday,
    Older,
}

impl TimestampBucket {
    /// Classify `created` relative to `now`.
    ///
    /// Timestamps in the future count as today.
    pub fn classify(created: Timestamp, now: Timestamp) -> Self {
        if created > now - Duration::days(1) {
            TimestampBucket::Today
        } else if created > now - Duration::days(2) {
            TimestampBucket::Yesterday
        } else {
            TimestampBucket::Older
        }
    }
}

/// Render `created` for display, using `zone` for wall-clock fields.
///
/// Bucketing compares absolute instants, so the zone only changes the
/// rendered hour/day, never the bucket.
pub fn format_timestamp<Tz>(created: Timestamp, now: Timestamp, zone: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    let local = created.with_timezone(zone);
    match TimestampBucket::classify(created, now) {
        TimestampBucket::Today => local.format(TIME_OF_DAY_FORMAT).to_string(),
        TimestampBucket::Yesterday => YESTERDAY_LABEL.to_string(),
        TimestampBucket::Older => local.format(MONTH_DAY_FORMAT).to_string(),
    }
}

/// Zone wall-clock fields are rendered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayZone {
    /// The viewer's local zone, following its daylight saving rules.
    Local,
    /// A fixed offset east of UTC.
    Fixed(FixedOffset),
}

impl DisplayZone {
    pub fn utc() -> Self {
        DisplayZone::Fixed(Utc.fix())
    }

    pub fn format(&self, created: Timestamp, now: Timestamp) -> String {
        match self {
            DisplayZone::Local => format_timestamp(created, now, &Local),
            DisplayZone::Fixed(offset) => format_timestamp(created, now, offset),
        }
    }
}

/// Parse a display offset expressed in minutes east of UTC.
///
/// Returns `None` when the offset is outside chrono's supported range
/// (strictly less than one day either way).
pub fn offset_from_minutes(minutes: i32) -> Option<FixedOffset> {
    minutes
        .checked_mul(60)
        .and_then(FixedOffset::east_opt)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
