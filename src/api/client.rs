//! Reddit API HTTP client.

use async_trait::async_trait;
use reqwest::{header, Client, Response};
use url::Url;

use crate::api::auth::{fetch_access_token, TOKEN_URL};
use crate::api::types::{Listing, Post};
use crate::error::{Error, Result};

/// OAuth API base URL.
const API_BASE: &str = "https://oauth.reddit.com";

/// Kind tag of submissions inside a listing.
const POST_KIND: &str = "t3";

/// Anything that can resolve a post by its ID.
#[async_trait]
pub trait PostSource {
    async fn get_post(&self, post_id: &str) -> Result<Post>;
}

/// Read-only Reddit API client authenticated with application credentials.
pub struct RedditApi {
    client: Client,
    api_base: Url,
    token: String,
}

impl RedditApi {
    /// Create a new API client and perform the credential handshake.
    pub async fn new(client_id: &str, client_secret: &str, user_agent: &str) -> Result<Self> {
        Self::with_endpoints(client_id, client_secret, user_agent, TOKEN_URL, API_BASE).await
    }

    /// Same as [`RedditApi::new`] against custom token and API endpoints.
    pub async fn with_endpoints(
        client_id: &str,
        client_secret: &str,
        user_agent: &str,
        token_url: &str,
        api_base: &str,
    ) -> Result<Self> {
        let api_base = Url::parse(api_base)?;

        let client = Client::builder()
            .user_agent(user_agent)
            .build()
            .map_err(|e| Error::Api(format!("Failed to create HTTP client: {}", e)))?;

        let token = fetch_access_token(&client, token_url, client_id, client_secret).await?;
        tracing::debug!("Obtained application access token");

        Ok(Self {
            client,
            api_base,
            token,
        })
    }

    /// Make an authenticated GET request.
    async fn get(&self, path: &str) -> Result<Response> {
        let url = self.api_base.join(path)?;

        tracing::debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .header(header::AUTHORIZATION, format!("bearer {}", self.token))
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("Response status: {}", status);

        if status == 401 || status == 403 {
            let body = response.text().await.unwrap_or_default();
            tracing::error!("Auth error response: {}", body);
            return Err(Error::Authentication(format!(
                "HTTP {}: {}",
                status,
                if body.is_empty() {
                    "Authentication failed"
                } else {
                    &body
                }
            )));
        }

        if !status.is_success() {
            return Err(Error::Api(format!("HTTP {} for {}", status, path)));
        }

        Ok(response)
    }
}

#[async_trait]
impl PostSource for RedditApi {
    async fn get_post(&self, post_id: &str) -> Result<Post> {
        let path = format!("/by_id/t3_{}", post_id);

        let response = self.get(&path).await?;
        let text = response.text().await?;
        tracing::debug!("Post response: {}", text);

        let listing: Listing<Post> = serde_json::from_str(&text)
            .map_err(|e| Error::Api(format!("Failed to parse post: {} - Response: {}", e, text)))?;

        listing
            .data
            .children
            .into_iter()
            .find(|thing| thing.kind == POST_KIND)
            .map(|thing| thing.data)
            .ok_or_else(|| Error::PostNotFound(post_id.to_string()))
    }
}
