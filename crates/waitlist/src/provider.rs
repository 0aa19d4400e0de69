use serde::{Deserialize, Serialize};

use crate::error::{ProviderError, UpstreamError};

/// Where and how to reach the mailing-list provider.
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    /// API root, e.g. `https://us1.api.mailchimp.com`.
    pub base_url: String,
    pub list_id: String,
    pub api_key: String,
}

#[derive(Debug, Serialize)]
struct AddMemberRequest<'a> {
    email_address: &'a str,
    /// Always `pending`: members confirm via double opt-in.
    status: &'a str,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    detail: Option<String>,
    #[serde(default)]
    title: Option<String>,
}

/// Thin client for the provider's "add list member" call.
#[derive(Debug, Clone)]
pub struct ProviderClient {
    http: reqwest::Client,
    config: ProviderConfig,
}

impl ProviderClient {
    pub fn new(config: ProviderConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    /// Adds `email` to the configured list with `pending` status.
    ///
    /// A non-success response is surfaced as `ProviderError::Rejected`
    /// carrying whatever structure the provider's error body had; requests
    /// that never reach a response become `ProviderError::Transport`.
    pub async fn add_pending_member(&self, email: &str) -> Result<(), ProviderError> {
        let url = format!(
            "{}/3.0/lists/{}/members",
            self.config.base_url.trim_end_matches('/'),
            self.config.list_id
        );

        let response = self
            .http
            .post(url)
            .basic_auth("anystring", Some(&self.config.api_key))
            .json(&AddMemberRequest {
                email_address: email,
                status: "pending",
            })
            .send()
            .await
            .map_err(ProviderError::Transport)?;

        if response.status().is_success() {
            return Ok(());
        }

        let status = response.status().as_u16();
        let body: ErrorBody = response.json().await.unwrap_or(ErrorBody {
            detail: None,
            title: None,
        });
        Err(ProviderError::Rejected(UpstreamError {
            status: Some(status),
            detail: body.detail,
            title: body.title,
        }))
    }
}
