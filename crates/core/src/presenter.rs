//! Record-to-display transformation for the history detail panel.
//!
//! [`present`] is total: every record produces a title, a timestamp and a
//! message. Empty or missing payload fields fall back to localized
//! placeholders and unknown detail kinds fall back to the "unsupported"
//! placeholders.

use std::fmt;

use chrono::{FixedOffset, TimeZone, Utc};
use serde::Serialize;

use crate::clock::Clock;
use crate::i18n::{MessageKey, Translator};
use crate::record::{EventDetail, NotificationRecord};
use crate::timestamp::{format_timestamp, DisplayZone};
use crate::types::Timestamp;

/// The strings shown for one history entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayFields {
    pub title: String,
    pub timestamp: String,
    pub message: String,
}

/// Present `record` relative to `now`, rendering wall-clock times in UTC.
pub fn present<T>(record: &NotificationRecord, now: Timestamp, t: &T) -> DisplayFields
where
    T: Translator + ?Sized,
{
    present_in(record, now, &Utc, t)
}

/// Present `record` relative to `now`, rendering wall-clock times in `zone`.
pub fn present_in<Tz, T>(
    record: &NotificationRecord,
    now: Timestamp,
    zone: &Tz,
    t: &T,
) -> DisplayFields
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
    T: Translator + ?Sized,
{
    with_timestamp(record, format_timestamp(record.created_date, now, zone), t)
}

/// Present `record` relative to `now` in a configured [`DisplayZone`].
pub fn present_in_zone<T>(
    record: &NotificationRecord,
    now: Timestamp,
    zone: DisplayZone,
    t: &T,
) -> DisplayFields
where
    T: Translator + ?Sized,
{
    with_timestamp(record, zone.format(record.created_date, now), t)
}

fn with_timestamp<T>(record: &NotificationRecord, timestamp: String, t: &T) -> DisplayFields
where
    T: Translator + ?Sized,
{
    let (title, message) = match &record.detail {
        Some(EventDetail::BroadcastMessage(detail)) => (
            or_placeholder(detail.subject.as_deref(), MessageKey::EmptyHistoryTitle, t),
            or_placeholder(detail.message.as_deref(), MessageKey::EmptyHistoryMessage, t),
        ),
        Some(EventDetail::Generic(detail)) => (
            or_placeholder(detail.source_name.as_deref(), MessageKey::EmptyHistoryTitle, t),
            or_placeholder(
                detail.notification_type_name.as_deref(),
                MessageKey::EmptyHistoryMessage,
                t,
            ),
        ),
        Some(EventDetail::Unsupported { typename }) => {
            tracing::debug!(
                record_id = %record.id,
                typename = typename.as_deref().unwrap_or("<none>"),
                "Unsupported history detail kind"
            );
            unsupported(t)
        }
        None => {
            tracing::debug!(record_id = %record.id, "History record has no detail");
            unsupported(t)
        }
    };

    DisplayFields {
        title,
        timestamp,
        message,
    }
}

fn or_placeholder<T>(value: Option<&str>, placeholder: MessageKey, t: &T) -> String
where
    T: Translator + ?Sized,
{
    match value {
        Some(text) if !text.is_empty() => text.to_string(),
        _ => t.translate(placeholder),
    }
}

fn unsupported<T>(t: &T) -> (String, String)
where
    T: Translator + ?Sized,
{
    (
        t.translate(MessageKey::UnsupportedHistoryTitle),
        t.translate(MessageKey::UnsupportedHistoryMessage),
    )
}

// ---------------------------------------------------------------------------
// HistoryPresenter
// ---------------------------------------------------------------------------

/// Bundles the collaborators [`present`] needs so callers only pass records.
#[derive(Debug, Clone)]
pub struct HistoryPresenter<C, T> {
    clock: C,
    translator: T,
    zone: DisplayZone,
}

impl<C, T> HistoryPresenter<C, T>
where
    C: Clock,
    T: Translator,
{
    /// Create a presenter rendering wall-clock times in UTC.
    pub fn new(clock: C, translator: T) -> Self {
        Self {
            clock,
            translator,
            zone: DisplayZone::utc(),
        }
    }

    /// Render wall-clock times in `zone` instead of UTC.
    pub fn with_zone(mut self, zone: DisplayZone) -> Self {
        self.zone = zone;
        self
    }

    /// Render wall-clock times at a fixed `offset` instead of UTC.
    pub fn with_offset(self, offset: FixedOffset) -> Self {
        self.with_zone(DisplayZone::Fixed(offset))
    }

    pub fn present(&self, record: &NotificationRecord) -> DisplayFields {
        present_in_zone(record, self.clock.now(), self.zone, &self.translator)
    }

    /// Present against an explicit `now`, ignoring the clock.
    pub fn present_at(&self, record: &NotificationRecord, now: Timestamp) -> DisplayFields {
        present_in_zone(record, now, self.zone, &self.translator)
    }

    pub fn now(&self) -> Timestamp {
        self.clock.now()
    }

    pub fn zone(&self) -> DisplayZone {
        self.zone
    }

    pub fn translator(&self) -> &T {
        &self.translator
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
