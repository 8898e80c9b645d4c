//! Messenger webhook endpoint handlers
//!
//! Implements the three public endpoints of the adapter: the subscription
//! handshake (GET), the event receiver (POST) and the profile-setup
//! endpoint that registers the callback URL with the Graph API.

use super::{AppState, handler, schemas};
use crate::{config, errors, services};
use log::{error, info, warn};
use ntex::web;
use serde::Deserialize;

/// Query parameters for webhook verification
///
/// All fields are optional: the platform always sends the three of them,
/// but a stray GET must not hang or panic the endpoint.
#[derive(Debug, Deserialize)]
pub struct VerifyQuery {
    /// The mode parameter, should be "subscribe"
    #[serde(rename = "hub.mode")]
    pub mode: Option<String>,
    /// The verification token from the Messenger platform
    #[serde(rename = "hub.verify_token")]
    pub verify_token: Option<String>,
    /// The challenge string to echo back
    #[serde(rename = "hub.challenge")]
    pub challenge: Option<String>,
}

/// Query parameters for profile setup
#[derive(Debug, Deserialize)]
pub struct ProfileQuery {
    /// What to configure, "webhook" or "all" triggers webhook registration
    pub mode: Option<String>,
    /// Must match the configured verify token
    pub verify_token: Option<String>,
}

/// Decides the handshake outcome for a verification request.
///
/// Returns the challenge to echo on success. Missing parameters map to
/// `UrlNotFound` rather than the upstream behavior of leaving the request
/// unanswered.
fn check_verification(
    app_config: &config::AppConfig,
    query: &VerifyQuery,
) -> Result<String, errors::UserError> {
    let (mode, token) = match (&query.mode, &query.verify_token) {
        (Some(mode), Some(token)) => (mode, token),
        _ => return Err(errors::UserError::UrlNotFound),
    };

    if mode != "subscribe" || *token != app_config.verify_token {
        return Err(errors::UserError::Forbidden);
    }

    Ok(query.challenge.clone().unwrap_or_default())
}

/// Webhook verification endpoint (GET)
///
/// The Messenger platform sends a GET request to verify the webhook URL.
/// This endpoint validates the verify token and returns the challenge.
///
/// # Returns
/// - 200 with challenge string if verification succeeds
/// - 403 if the mode/token pair is wrong
/// - 404 if mode or token is missing
#[web::get("/webhook")]
pub async fn verify(
    query: web::types::Query<VerifyQuery>,
    app_state: web::types::State<AppState>,
) -> Result<impl web::Responder, web::Error> {
    let challenge = check_verification(&app_state.config, &query)?;

    info!("WEBHOOK_VERIFIED");

    Ok(web::HttpResponse::Ok()
        .content_type("text/plain")
        .body(challenge))
}

/// Webhook receiver endpoint (POST)
///
/// Receives batched messaging events from the Messenger platform and
/// dispatches them to the message handler.
///
/// # Processing
///
/// Dispatch runs synchronously; the platform allows a generous
/// acknowledgment window and resends the batch only on a non-200 answer.
///
/// # Returns
/// - 200 "EVENT_RECEIVED" for page-subscription payloads
/// - 404 for any other subscription object
#[web::post("/webhook")]
pub async fn receive(
    payload: web::types::Json<schemas::WebhookPayload>,
    app_state: web::types::State<AppState>,
) -> Result<impl web::Responder, web::Error> {
    if payload.object != "page" {
        return Err(errors::UserError::UrlNotFound.into());
    }

    let forwarded = handler::process_webhook(&payload, &app_state.message_handler).await;
    info!(
        "dispatched {forwarded} of {total} webhook entries",
        total = payload.entry.len()
    );

    Ok(web::HttpResponse::Ok()
        .content_type("text/plain")
        .body("EVENT_RECEIVED"))
}

/// Runs the profile-setup decision chain and builds the response body.
async fn run_profile_setup(
    app_config: &config::AppConfig,
    profile_manager: &services::ImplProfileManager,
    query: &ProfileQuery,
) -> Result<String, errors::UserError> {
    let mut body = String::new();

    // Advisory only: the Graph API rejects plain-http callback URLs on
    // its side, so processing continues either way.
    if !app_config.is_https() {
        warn!("APP_URL does not use https; the platform will reject this callback URL");
        body.push_str("ERROR - Need a proper APP_URL in the .env file\n");
    }

    let (mode, token) = match (&query.mode, &query.verify_token) {
        (Some(mode), Some(token)) => (mode, token),
        _ => return Err(errors::UserError::UrlNotFound),
    };

    if *token != app_config.verify_token {
        return Err(errors::UserError::Forbidden);
    }

    if mode == "webhook" || mode == "all" {
        if let Err(e) = profile_manager.set_webhook().await {
            error!("failed to register webhook: {e:#}");
        }
        body.push_str(&format!(
            "<p>Set app {app_id} call to {webhook_url}</p>",
            app_id = app_config.app_id,
            webhook_url = app_config.webhook_url()
        ));
    }

    Ok(body)
}

/// Profile setup endpoint (GET)
///
/// Operator-facing endpoint that registers the webhook callback with the
/// platform's management API once the verify token checks out.
///
/// # Returns
/// - 200 reporting the registered app id and callback URL
/// - 403 if the verify token mismatches
/// - 404 if mode or token is missing
#[web::get("/profile")]
pub async fn profile(
    query: web::types::Query<ProfileQuery>,
    app_state: web::types::State<AppState>,
) -> Result<impl web::Responder, web::Error> {
    let body =
        run_profile_setup(&app_state.config, &app_state.profile_manager, &query).await?;

    Ok(web::HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(body))
}
