//! The access gate client.
//!
//! One opaque boolean from a remote webhook, checked once at app start.
//! There is no re-verification during the session.

use tracing::debug;

use crate::error::{AppError, Result};

/// The gate's verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessDecision {
    Allowed,
    Denied,
}

impl AccessDecision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, AccessDecision::Allowed)
    }
}

/// Client for the access-check webhook.
pub struct AccessClient {
    http: reqwest::Client,
    endpoint: String,
}

impl AccessClient {
    /// Create a client for the given endpoint.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), endpoint)
    }

    /// Create a client reusing an existing HTTP client.
    pub fn with_client(http: reqwest::Client, endpoint: impl Into<String>) -> Self {
        Self {
            http,
            endpoint: endpoint.into(),
        }
    }

    /// Check access for a viewer.
    ///
    /// `GET {endpoint}?userId={id}`; allowed iff the response body's `set`
    /// field is exactly the string `"yes"`. A missing viewer id is an
    /// immediate deny with NO network call.
    pub async fn check(&self, user_id: Option<&str>) -> Result<AccessDecision> {
        let Some(user_id) = user_id else {
            debug!("no viewer id, denying without network call");
            return Ok(AccessDecision::Denied);
        };

        let response = self
            .http
            .get(&self.endpoint)
            .query(&[("userId", user_id)])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(AppError::GateStatus(response.status().as_u16()));
        }

        let body: serde_json::Value = response.json().await?;
        let allowed = body.get("set").and_then(|v| v.as_str()) == Some("yes");
        debug!(user_id, allowed, "access check resolved");

        Ok(if allowed {
            AccessDecision::Allowed
        } else {
            AccessDecision::Denied
        })
    }
}
