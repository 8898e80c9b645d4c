//! # Messenger Webhook Schemas
//!
//! Data structures for the JSON payloads the Messenger platform POSTs to
//! the webhook. Events are classified at parse time into [`EventKind`] so
//! dispatch is a pattern match rather than a field probe.

use serde::{Deserialize, Deserializer, Serialize};

/// Root webhook payload from the Messenger platform
#[derive(Debug, Deserialize, Serialize)]
pub struct WebhookPayload {
    /// The object type, "page" for page subscriptions
    pub object: String,
    /// Array of entry objects, one per page event batch
    pub entry: Vec<Entry>,
}

/// Entry object containing the batched messaging events
#[derive(Debug, Deserialize, Serialize)]
pub struct Entry {
    /// Page ID the events belong to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Unix timestamp of the batch
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<i64>,
    /// Messaging events; the platform sends exactly one per entry
    #[serde(default)]
    pub messaging: Vec<MessagingEvent>,
}

/// A single messaging event
#[derive(Debug, Deserialize, Serialize)]
pub struct MessagingEvent {
    /// The user the event originates from
    pub sender: Sender,
    #[serde(flatten)]
    pub kind: EventKind,
}

/// Event sender
#[derive(Debug, Deserialize, Serialize)]
pub struct Sender {
    /// Page-scoped sender ID (PSID)
    pub id: String,
}

/// Event classification, decided while deserializing.
///
/// The presence of a `delivery` key alone marks a receipt; anything else
/// is an actionable message whose raw fields are kept as-is for the
/// message handler.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum EventKind {
    /// Delivery receipt confirming prior outbound messages
    Delivery { delivery: DeliveryReceipt },
    /// Any other inbound event (message, postback, ...), raw fields preserved
    Message(serde_json::Map<String, serde_json::Value>),
}

impl<'de> Deserialize<'de> for EventKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let mut fields = serde_json::Map::deserialize(deserializer)?;

        // A receipt with a malformed body must still be skipped, never
        // forwarded as a message.
        match fields.remove("delivery") {
            Some(value) => Ok(EventKind::Delivery {
                delivery: serde_json::from_value(value).unwrap_or_default(),
            }),
            None => Ok(EventKind::Message(fields)),
        }
    }
}

/// Delivery receipt body
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct DeliveryReceipt {
    /// IDs of the delivered messages
    #[serde(default)]
    pub mids: Vec<String>,
    /// All messages before this timestamp were delivered
    #[serde(default)]
    pub watermark: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_event_classification() {
        let payload: WebhookPayload = serde_json::from_str(
            r#"{"object":"page","entry":[{"messaging":[{"sender":{"id":"123"},"message":{"text":"hi"}}]}]}"#,
        )
        .unwrap();

        assert_eq!(payload.object, "page");
        assert_eq!(payload.entry.len(), 1);

        let event = &payload.entry[0].messaging[0];
        assert_eq!(event.sender.id, "123");
        match &event.kind {
            EventKind::Message(fields) => {
                assert_eq!(fields["message"]["text"], "hi");
            }
            EventKind::Delivery { .. } => panic!("text message classified as delivery receipt"),
        }
    }

    #[test]
    fn test_delivery_event_classification() {
        let event: MessagingEvent = serde_json::from_str(
            r#"{"sender":{"id":"123"},"delivery":{"mids":["mid.1"],"watermark":1458668856253}}"#,
        )
        .unwrap();

        match event.kind {
            EventKind::Delivery { delivery } => {
                assert_eq!(delivery.mids, vec!["mid.1"]);
                assert_eq!(delivery.watermark, Some(1458668856253));
            }
            EventKind::Message(_) => panic!("delivery receipt classified as message"),
        }
    }

    #[test]
    fn test_malformed_delivery_body_still_marks_receipt() {
        let event: MessagingEvent =
            serde_json::from_str(r#"{"sender":{"id":"123"},"delivery":true}"#).unwrap();

        match event.kind {
            EventKind::Delivery { delivery } => {
                assert!(delivery.mids.is_empty());
                assert_eq!(delivery.watermark, None);
            }
            EventKind::Message(_) => panic!("delivery receipt classified as message"),
        }
    }

    #[test]
    fn test_entry_without_messaging_defaults_to_empty() {
        let entry: Entry = serde_json::from_str(r#"{"id":"900","time":1458692752478}"#).unwrap();
        assert!(entry.messaging.is_empty());
    }
}
