//! Notification history record as delivered by the notification service.
//!
//! The `detail` payload is a GraphQL-style union discriminated by the
//! `__typename` field. Known kinds decode into dedicated structs; anything
//! else (unknown tag, missing tag, malformed payload) decodes into
//! [`EventDetail::Unsupported`] so a new server-side kind never breaks the
//! history panel.

use serde::Deserialize;

use crate::error::CoreError;
use crate::types::Timestamp;

/// Wire tag of broadcast message details.
pub const BROADCAST_MESSAGE_TYPENAME: &str = "BroadcastMessageEventDetails";

/// Wire tag of generic event details.
pub const GENERIC_EVENT_TYPENAME: &str = "GenericEventDetails";

// ---------------------------------------------------------------------------
// Record
// ---------------------------------------------------------------------------

/// A single notification event shown in the history list.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationRecord {
    /// Row identity assigned by the notification service.
    pub id: String,
    /// When the event occurred.
    pub created_date: Timestamp,
    /// Kind-specific payload. `None` is presented as unsupported.
    #[serde(default)]
    pub detail: Option<EventDetail>,
}

impl NotificationRecord {
    /// Decode one record from a JSON object.
    pub fn from_json(input: &str) -> Result<Self, CoreError> {
        Ok(serde_json::from_str(input)?)
    }

    /// Decode a record from an already parsed JSON value.
    pub fn from_value(value: serde_json::Value) -> Result<Self, CoreError> {
        Ok(serde_json::from_value(value)?)
    }
}

// ---------------------------------------------------------------------------
// Detail payloads
// ---------------------------------------------------------------------------

/// Payload of an operator broadcast.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BroadcastMessageEventDetails {
    pub subject: Option<String>,
    pub message: Option<String>,
}

/// Payload of a generic source event (price alerts, transfers, ...).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenericEventDetails {
    pub source_name: Option<String>,
    pub notification_type_name: Option<String>,
}

/// Kind-specific record payload.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "RawEventDetail")]
pub enum EventDetail {
    BroadcastMessage(BroadcastMessageEventDetails),
    Generic(GenericEventDetails),
    /// Any kind this crate does not know how to present. Keeps the wire tag,
    /// when there was one, for diagnostics.
    Unsupported { typename: Option<String> },
}

impl EventDetail {
    /// The `__typename` this payload was decoded from, if any.
    pub fn typename(&self) -> Option<&str> {
        match self {
            EventDetail::BroadcastMessage(_) => Some(BROADCAST_MESSAGE_TYPENAME),
            EventDetail::Generic(_) => Some(GENERIC_EVENT_TYPENAME),
            EventDetail::Unsupported { typename } => typename.as_deref(),
        }
    }
}

#[derive(Deserialize)]
#[serde(tag = "__typename")]
enum KnownEventDetail {
    BroadcastMessageEventDetails(BroadcastMessageEventDetails),
    GenericEventDetails(GenericEventDetails),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawEventDetail {
    Known(KnownEventDetail),
    Tagged {
        #[serde(rename = "__typename")]
        typename: Option<String>,
    },
    Opaque(serde::de::IgnoredAny),
}

impl From<RawEventDetail> for EventDetail {
    fn from(raw: RawEventDetail) -> Self {
        match raw {
            RawEventDetail::Known(KnownEventDetail::BroadcastMessageEventDetails(d)) => {
                EventDetail::BroadcastMessage(d)
            }
            RawEventDetail::Known(KnownEventDetail::GenericEventDetails(d)) => {
                EventDetail::Generic(d)
            }
            RawEventDetail::Tagged { typename } => EventDetail::Unsupported { typename },
            RawEventDetail::Opaque(_) => EventDetail::Unsupported { typename: None },
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use chrono::TimeZone;

    #[test]
    fn decodes_broadcast_record() {
        let record = NotificationRecord::from_json(
            r#"{
                "id": "n-1",
                "createdDate": "2024-03-04T15:45:00Z",
                "detail": {
                    "__typename": "BroadcastMessageEventDetails",
                    "subject": "Upgrade complete",
                    "message": "Validator upgraded to v20"
                }
            }"#,
        )
        .unwrap();

        assert_eq!(record.id, "n-1");
        assert_eq!(
            record.created_date,
            chrono::Utc.with_ymd_and_hms(2024, 3, 4, 15, 45, 0).unwrap()
        );
        assert_matches!(
            record.detail,
            Some(EventDetail::BroadcastMessage(BroadcastMessageEventDetails {
                subject: Some(ref s),
                message: Some(ref m),
            })) if s == "Upgrade complete" && m == "Validator upgraded to v20"
        );
    }

    #[test]
    fn decodes_generic_record_with_missing_fields() {
        let record = NotificationRecord::from_json(
            r#"{
                "id": "n-2",
                "createdDate": "2024-03-04T15:45:00Z",
                "detail": { "__typename": "GenericEventDetails", "sourceName": "Osmosis" }
            }"#,
        )
        .unwrap();

        assert_matches!(
            record.detail,
            Some(EventDetail::Generic(GenericEventDetails {
                source_name: Some(ref s),
                notification_type_name: None,
            })) if s == "Osmosis"
        );
    }

    #[test]
    fn unknown_typename_is_unsupported() {
        let record = NotificationRecord::from_json(
            r#"{
                "id": "n-3",
                "createdDate": "2024-03-04T15:45:00Z",
                "detail": { "__typename": "AccountBalanceChangedEventDetails", "amount": 3 }
            }"#,
        )
        .unwrap();

        let detail = record.detail.unwrap();
        assert_eq!(detail.typename(), Some("AccountBalanceChangedEventDetails"));
        assert_matches!(detail, EventDetail::Unsupported { .. });
    }

    #[test]
    fn untagged_or_non_object_detail_is_unsupported() {
        let untagged = NotificationRecord::from_json(
            r#"{"id": "a", "createdDate": "2024-03-04T15:45:00Z", "detail": {"subject": "x"}}"#,
        )
        .unwrap();
        assert_eq!(
            untagged.detail,
            Some(EventDetail::Unsupported { typename: None })
        );

        let scalar = NotificationRecord::from_json(
            r#"{"id": "b", "createdDate": "2024-03-04T15:45:00Z", "detail": 42}"#,
        )
        .unwrap();
        assert_eq!(scalar.detail, Some(EventDetail::Unsupported { typename: None }));
    }

    #[test]
    fn null_or_missing_detail_decodes_to_none() {
        let null = NotificationRecord::from_json(
            r#"{"id": "a", "createdDate": "2024-03-04T15:45:00Z", "detail": null}"#,
        )
        .unwrap();
        assert!(null.detail.is_none());

        let missing =
            NotificationRecord::from_json(r#"{"id": "b", "createdDate": "2024-03-04T15:45:00Z"}"#)
                .unwrap();
        assert!(missing.detail.is_none());
    }

    #[test]
    fn missing_created_date_is_a_parse_error() {
        let err = NotificationRecord::from_json(r#"{"id": "a"}"#).unwrap_err();
        assert_matches!(err, CoreError::Parse(msg) if msg.contains("createdDate"));
    }
}
