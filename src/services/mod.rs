//! Collaborator seams the webhook adapter dispatches into.
//!
//! The adapter itself is glue; everything conversational lives behind
//! [`MessageHandler`], and webhook registration against the Graph API
//! lives behind [`ProfileManager`]. Both are trait objects so tests can
//! substitute mocks.

pub mod profile;
pub mod receive;

use crate::webhook::schemas;
use async_trait::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MessageHandler {
    /// Consumes one inbound messaging event from the given sender PSID.
    async fn handle_message(
        &self,
        sender_psid: &str,
        event: &schemas::MessagingEvent,
    ) -> anyhow::Result<()>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProfileManager {
    /// Registers the configured callback URL with the platform's
    /// management API.
    async fn set_webhook(&self) -> anyhow::Result<()>;
}

pub type ImplMessageHandler = Box<dyn MessageHandler>;
pub type ImplProfileManager = Box<dyn ProfileManager>;
