//! Ecodadys API HTTP client.

use reqwest::{header, Client, Response};
use url::Url;

use crate::api::types::{LoginRequest, LoginResponse, Resource, Session};
use crate::error::{Error, Result};

/// Ecodadys API client.
///
/// Holds one shared HTTP client and the injected API origin, so tests can
/// point it at a local mock server.
pub struct EcodadysApi {
    client: Client,
    origin: Url,
}

impl EcodadysApi {
    /// Create a new API client for the given origin.
    pub fn new(origin: Url) -> Result<Self> {
        let client = Client::builder()
            .build()
            .map_err(|e| Error::Api(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client, origin })
    }

    /// Exchange credentials for an authenticated session.
    ///
    /// No retry is performed; any failure here aborts the whole run.
    pub async fn login(&self, username: &str, password: &str) -> Result<Session> {
        let url = self.origin.join("/api/api/user/login")?;
        let body = LoginRequest::new(username, password);

        tracing::debug!("POST {}", url);

        let response = self.client.post(url).json(&body).send().await?;

        let status = response.status();
        if status == 401 || status == 403 {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Authentication(format!(
                "HTTP {}: {}",
                status,
                if body.is_empty() {
                    "login rejected"
                } else {
                    &body
                }
            )));
        }

        let text = response.text().await?;
        tracing::debug!("Login response: {}", text);

        let login: LoginResponse = serde_json::from_str(&text).map_err(|e| {
            Error::Api(format!(
                "Failed to parse login response: {} - Response: {}",
                e, text
            ))
        })?;

        Session::from_login_response(login)
    }

    /// List the downloadable resource URLs of one category.
    ///
    /// Category is used verbatim in the request path; the response order is
    /// preserved. A non-array body (the service reports errors as objects)
    /// fails the whole listing with no partial results.
    pub async fn list_resources(&self, session: &Session, category: &str) -> Result<Vec<String>> {
        let path = format!(
            "/api/api/multimedia_content/{}/{}",
            category, session.account_id
        );
        let url = self.origin.join(&path)?;

        tracing::debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .header(
                header::AUTHORIZATION,
                format!("Bearer {}", session.token),
            )
            .send()
            .await?;

        let status = response.status();
        if status == 401 || status == 403 {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Authentication(format!(
                "HTTP {} listing '{}': {}",
                status, category, body
            )));
        }

        let text = response.text().await?;
        tracing::debug!("Listing response ({}): {} bytes", category, text.len());

        let resources: Vec<Resource> = serde_json::from_str(&text).map_err(|e| {
            Error::Api(format!(
                "Failed to parse '{}' listing: {} - Response: {}",
                category,
                e,
                &text[..text.len().min(500)]
            ))
        })?;

        Ok(resources.into_iter().map(|r| r.url).collect())
    }

    /// Fetch a resource URL for download.
    ///
    /// Resource URLs are fetched without the bearer token; the listing
    /// endpoint returns pre-authorized URLs.
    pub async fn download_file(&self, url: &str) -> Result<Response> {
        let response = self.client.get(url).send().await?;

        if !response.status().is_success() {
            return Err(Error::Download(format!(
                "Failed to download file: HTTP {}",
                response.status()
            )));
        }

        Ok(response)
    }
}
