//! # Messenger Webhook Dispatcher
//!
//! Walks an inbound webhook payload and forwards each actionable event to
//! the message handler. Delivery receipts are dropped here; a failure on
//! one entry is logged and never blocks the remaining entries.

use super::schemas::{EventKind, MessagingEvent, WebhookPayload};
use crate::services::ImplMessageHandler;
use log::error;

/// Extracts the actionable event of every entry, preserving entry order.
///
/// `entry.messaging` only ever carries one event, so the first element is
/// taken; entries with an empty array are skipped.
pub fn extract_events(payload: &WebhookPayload) -> Vec<&MessagingEvent> {
    payload
        .entry
        .iter()
        .filter_map(|entry| entry.messaging.first())
        .collect::<Vec<_>>()
}

/// Forwards every non-receipt event to the message handler.
///
/// Returns the number of events forwarded. Handler failures are logged
/// per entry; the caller acknowledges the batch regardless.
pub async fn process_webhook(payload: &WebhookPayload, handler: &ImplMessageHandler) -> usize {
    let mut forwarded = 0;

    for event in extract_events(payload) {
        match &event.kind {
            EventKind::Delivery { .. } => continue,
            EventKind::Message(_) => {
                if let Err(e) = handler.handle_message(&event.sender.id, event).await {
                    error!(
                        "failed to handle message from {sender}: {error:#}",
                        sender = event.sender.id,
                        error = e
                    );
                }
                forwarded += 1;
            }
        }
    }

    forwarded
}
