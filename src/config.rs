//! Application configuration.
//!
//! All runtime configuration comes from the process environment and is loaded
//! exactly once at startup. The resulting [`AppConfig`] is passed explicitly
//! into every component that needs it; there is no global lookup.

use envconfig::Envconfig;

/// Environment-sourced application configuration.
///
/// # Security Notes
/// - `VERIFY_TOKEN` is a shared secret; never log its value
#[derive(Envconfig, Clone)]
pub struct AppConfig {
    /// 🔒 SENSITIVE: Verify token shared with the Messenger platform
    /// during the webhook subscription handshake
    #[envconfig(from = "VERIFY_TOKEN")]
    pub verify_token: String,

    /// Public base URL where this app is reachable (NON-SENSITIVE)
    /// Example: "https://my-bot.example.com"
    #[envconfig(from = "APP_URL")]
    pub app_url: String,

    /// Facebook application identifier (SEMI-SENSITIVE)
    #[envconfig(from = "APP_ID")]
    pub app_id: String,

    /// Port for web server binding (NON-SENSITIVE)
    #[envconfig(from = "PORT", default = "3000")]
    pub port: u16,
}

impl AppConfig {
    /// Checks whether the configured base URL uses secure transport.
    ///
    /// The Messenger platform only delivers callbacks to HTTPS endpoints,
    /// so a plain-HTTP `APP_URL` is a deployment mistake.
    pub fn is_https(&self) -> bool {
        self.app_url.starts_with("https://")
    }

    /// The callback URL registered with the platform.
    pub fn webhook_url(&self) -> String {
        format!("{}/webhook", self.app_url.trim_end_matches('/'))
    }

    /// Graph API endpoint for managing this app's page subscriptions.
    pub fn subscriptions_endpoint(&self) -> String {
        format!(
            "https://graph.facebook.com/v22.0/{id}/subscriptions",
            id = self.app_id
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config(app_url: &str) -> AppConfig {
        AppConfig {
            verify_token: "token".to_string(),
            app_url: app_url.to_string(),
            app_id: "424242".to_string(),
            port: 3000,
        }
    }

    #[test]
    fn test_webhook_url_normalizes_trailing_slash() {
        let config = test_config("https://bot.example.com/");
        assert_eq!(config.webhook_url(), "https://bot.example.com/webhook");

        let config = test_config("https://bot.example.com");
        assert_eq!(config.webhook_url(), "https://bot.example.com/webhook");
    }

    #[test]
    fn test_is_https() {
        assert!(test_config("https://bot.example.com").is_https());
        assert!(!test_config("http://localhost:3000").is_https());
    }

    #[test]
    fn test_subscriptions_endpoint_contains_app_id() {
        let config = test_config("https://bot.example.com");
        assert_eq!(
            config.subscriptions_endpoint(),
            "https://graph.facebook.com/v22.0/424242/subscriptions"
        );
    }
}
