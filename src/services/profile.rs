//! Graph API profile manager.
//!
//! Registers this deployment's callback URL as the page-subscription
//! webhook of the configured Facebook application.

use crate::{config, services::ProfileManager};
use anyhow::{Context, Result};
use async_trait::async_trait;

/// Webhook fields this app subscribes to.
const SUBSCRIBED_FIELDS: &str = "messages,messaging_postbacks,message_deliveries";

#[derive(Clone)]
pub struct GraphProfileManager {
    /// HTTP client for making API requests
    client: reqwest::Client,
    /// Graph API endpoint for the app's page subscriptions
    endpoint: String,
    /// Callback URL to register
    webhook_url: String,
    /// Verify token the platform will echo during the handshake
    verify_token: String,
}

impl GraphProfileManager {
    pub fn new(app_config: &config::AppConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: app_config.subscriptions_endpoint(),
            webhook_url: app_config.webhook_url(),
            verify_token: app_config.verify_token.clone(),
        }
    }
}

#[async_trait]
impl ProfileManager for GraphProfileManager {
    async fn set_webhook(&self) -> Result<()> {
        let response = self
            .client
            .post(&self.endpoint)
            .query(&[
                ("object", "page"),
                ("callback_url", self.webhook_url.as_str()),
                ("verify_token", self.verify_token.as_str()),
                ("fields", SUBSCRIBED_FIELDS),
            ])
            .send()
            .await
            .context("Failed to send subscription request to Graph API")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unable to read response body".to_string());

            anyhow::bail!("Graph API returned error status {}: {}", status, body);
        }

        Ok(())
    }
}
