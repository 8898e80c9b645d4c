//! Webhook adapter for the Messenger platform
//!
//! This module bridges the platform's HTTP callbacks to the bot-logic
//! collaborators behind the [`crate::services`] seams.
//!
//! ## Modules
//!
//! - [`handler`] - Dispatch of inbound events to the message handler
//! - [`routes`] - HTTP endpoint handlers (handshake, receiver, profile setup)
//! - [`schemas`] - Data structures for webhook payloads

pub mod handler;
pub mod routes;
pub mod schemas;

use crate::{config, services};

pub struct AppState {
    pub config: config::AppConfig,
    pub message_handler: services::ImplMessageHandler,
    pub profile_manager: services::ImplProfileManager,
}
