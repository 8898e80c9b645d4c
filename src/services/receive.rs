//! Default inbound-message handler.
//!
//! This is the seam where a real bot plugs in its conversational logic.
//! The shipped implementation only acknowledges events in the log so the
//! adapter is runnable end to end without any bot behind it.

use crate::{services::MessageHandler, webhook::schemas};
use async_trait::async_trait;
use log::info;

#[derive(Clone, Default)]
pub struct ReceiveHandler;

#[async_trait]
impl MessageHandler for ReceiveHandler {
    async fn handle_message(
        &self,
        sender_psid: &str,
        event: &schemas::MessagingEvent,
    ) -> anyhow::Result<()> {
        match &event.kind {
            schemas::EventKind::Message(fields) => {
                if let Some(text) = fields
                    .get("message")
                    .and_then(|message| message.get("text"))
                    .and_then(|text| text.as_str())
                {
                    info!("message from {sender_psid}: {text}");
                } else {
                    info!("non-text event from {sender_psid}");
                }
            }
            // Delivery receipts are filtered out before dispatch.
            schemas::EventKind::Delivery { .. } => {}
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[ntex::test]
    async fn test_receive_handler_accepts_text_message() {
        let event: schemas::MessagingEvent = serde_json::from_str(
            r#"{"sender":{"id":"123"},"message":{"text":"hi"}}"#,
        )
        .unwrap();

        let handler = ReceiveHandler;
        assert!(handler.handle_message("123", &event).await.is_ok());
    }
}
