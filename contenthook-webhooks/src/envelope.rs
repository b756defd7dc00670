//! Notification wire format

use crate::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The kind of write a notification reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntryEvent {
    #[serde(rename = "entry.create")]
    Create,

    #[serde(rename = "entry.update")]
    Update,

    #[serde(rename = "entry.delete")]
    Delete,
}

impl EntryEvent {
    /// All event kinds, in lifecycle order
    pub const ALL: [EntryEvent; 3] = [Self::Create, Self::Update, Self::Delete];

    /// Wire name of the event
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Create => "entry.create",
            Self::Update => "entry.update",
            Self::Delete => "entry.delete",
        }
    }
}

impl fmt::Display for EntryEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Body of a webhook POST.
///
/// Built fresh for every dispatch and dropped after the attempt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationEnvelope {
    /// Which write happened
    pub event: EntryEvent,

    /// Short (unqualified) name of the content type
    pub model: String,

    /// Record snapshot after the write, as supplied by the host
    pub entry: serde_json::Value,

    /// When the envelope was built
    #[serde(rename = "createdAt", with = "iso8601_millis")]
    pub created_at: DateTime<Utc>,
}

impl NotificationEnvelope {
    /// Build an envelope stamped with the current time
    pub fn new<T>(event: EntryEvent, model: impl Into<String>, entry: &T) -> Result<Self>
    where
        T: Serialize + ?Sized,
    {
        Ok(Self {
            event,
            model: model.into(),
            entry: serde_json::to_value(entry)?,
            created_at: Utc::now(),
        })
    }

    /// Set a custom timestamp
    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Convert to JSON bytes
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec(self)?)
    }
}

// `2026-10-19T08:15:30.123Z`, the shape JavaScript's toISOString produces.
mod iso8601_millis {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        DateTime::<Utc>::deserialize(deserializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn test_event_wire_names() {
        assert_eq!(EntryEvent::Create.as_str(), "entry.create");
        assert_eq!(EntryEvent::Update.to_string(), "entry.update");
        assert_eq!(
            serde_json::to_value(EntryEvent::Delete).unwrap(),
            json!("entry.delete")
        );
    }

    #[test]
    fn test_envelope_has_all_fields() {
        let envelope =
            NotificationEnvelope::new(EntryEvent::Create, "product", &json!({"id": 1})).unwrap();
        let value = serde_json::to_value(&envelope).unwrap();
        let object = value.as_object().unwrap();

        assert_eq!(object.len(), 4);
        assert_eq!(object["event"], "entry.create");
        assert_eq!(object["model"], "product");
        assert_eq!(object["entry"], json!({"id": 1}));
        assert!(object["createdAt"].is_string());
    }

    #[test]
    fn test_created_at_format() {
        let at = Utc.with_ymd_and_hms(2026, 10, 19, 8, 15, 30).unwrap();
        let envelope = NotificationEnvelope::new(EntryEvent::Update, "tag", &json!(null))
            .unwrap()
            .with_created_at(at);
        let value = serde_json::to_value(&envelope).unwrap();

        assert_eq!(value["createdAt"], "2026-10-19T08:15:30.000Z");
        assert_eq!(value["entry"], serde_json::Value::Null);
    }

    #[test]
    fn test_absent_entry_serializes_as_null() {
        let entry: Option<serde_json::Value> = None;
        let envelope = NotificationEnvelope::new(EntryEvent::Delete, "order", &entry).unwrap();

        assert!(envelope.entry.is_null());
    }

    #[test]
    fn test_unserializable_entry() {
        struct Broken;

        impl Serialize for Broken {
            fn serialize<S: serde::Serializer>(&self, _: S) -> std::result::Result<S::Ok, S::Error> {
                Err(serde::ser::Error::custom("broken entry"))
            }
        }

        let err = NotificationEnvelope::new(EntryEvent::Create, "product", &Broken).unwrap_err();
        assert!(err.to_string().contains("broken entry"));
    }
}
