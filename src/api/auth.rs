//! OAuth client-credential handshake.

use reqwest::Client;

use crate::api::types::AccessTokenResponse;
use crate::error::{Error, Result};

/// Default OAuth token endpoint.
pub const TOKEN_URL: &str = "https://www.reddit.com/api/v1/access_token";

/// Exchange application credentials for an application-only bearer token.
pub async fn fetch_access_token(
    client: &Client,
    token_url: &str,
    client_id: &str,
    client_secret: &str,
) -> Result<String> {
    tracing::debug!("POST {}", token_url);

    let response = client
        .post(token_url)
        .basic_auth(client_id, Some(client_secret))
        .form(&[("grant_type", "client_credentials")])
        .send()
        .await?;

    let status = response.status();
    tracing::debug!("Token response status: {}", status);

    if status == 401 || status == 403 {
        return Err(Error::Authentication(format!(
            "HTTP {}: check client ID and secret",
            status
        )));
    }

    let text = response.text().await?;
    if !status.is_success() {
        return Err(Error::Authentication(format!("HTTP {}: {}", status, text)));
    }

    let token: AccessTokenResponse = serde_json::from_str(&text).map_err(|e| {
        Error::Authentication(format!(
            "Failed to parse token response: {} - Response: {}",
            e, text
        ))
    })?;

    validate_token_type(&token.token_type)?;

    if let Some(expires_in) = token.expires_in {
        tracing::debug!("Access token valid for {} seconds", expires_in);
    }

    Ok(token.access_token)
}

/// Only bearer tokens can be used against the OAuth API host.
fn validate_token_type(token_type: &str) -> Result<()> {
    if token_type.eq_ignore_ascii_case("bearer") {
        Ok(())
    } else {
        Err(Error::Authentication(format!(
            "Unexpected token type: {}",
            token_type
        )))
    }
}
