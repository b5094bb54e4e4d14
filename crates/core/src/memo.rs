//! Memoized presentation keyed on the record.
//!
//! The detail panel recomputes its fields only when it is handed a different
//! record. `now` and the translator are captured when the entry is computed,
//! so a panel left open keeps the timestamp it was first rendered with.

use crate::i18n::Translator;
use crate::presenter::{present_in_zone, DisplayFields};
use crate::record::NotificationRecord;
use crate::timestamp::DisplayZone;
use crate::types::Timestamp;

/// Single-entry cache of the last presented record.
#[derive(Debug, Default)]
pub struct PresentationCache {
    entry: Option<(NotificationRecord, DisplayFields)>,
    recomputes: u64,
}

impl PresentationCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the fields for `record`, recomputing only if it differs from
    /// the cached record.
    pub fn get_or_present<T>(
        &mut self,
        record: &NotificationRecord,
        now: Timestamp,
        zone: DisplayZone,
        t: &T,
    ) -> &DisplayFields
    where
        T: Translator + ?Sized,
    {
        let stale = !matches!(&self.entry, Some((cached, _)) if cached == record);
        if stale {
            self.entry = None;
            self.recomputes += 1;
        }

        let (_, fields) = self.entry.get_or_insert_with(|| {
            tracing::trace!(record_id = %record.id, "Recomputing history display fields");
            (record.clone(), present_in_zone(record, now, zone, t))
        });
        fields
    }

    /// Fields of the cached record, if any.
    pub fn cached(&self) -> Option<&DisplayFields> {
        self.entry.as_ref().map(|(_, fields)| fields)
    }

    /// Drop the cached entry so the next call recomputes.
    pub fn invalidate(&mut self) {
        self.entry = None;
    }

    /// How many times the fields have been computed.
    pub fn recomputes(&self) -> u64 {
        self.recomputes
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
