//! HTTP client for the matcher backend.
//!
//! One method per endpoint, each a single request/response round trip with
//! JSON bodies. No retries, no client-side timeout, no caching: a failure is
//! surfaced to the caller immediately as an [`ApiError`].

use reqwest::{Client, Response};

use crate::config;
use crate::error::{ApiError, ErrorBody};
use crate::models::{
    ApiStatus, CreatedProfile, DeletedProfile, MatchResponse, Profile, ProfileList,
};

/// Number of matches requested when the caller does not say otherwise.
pub const DEFAULT_TOP_K: u32 = 3;

/// Client for the matcher backend.
///
/// Cheap to clone; the underlying [`reqwest::Client`] is shared.
#[derive(Clone, Debug)]
pub struct ApiClient {
    base_url: String,
    http: Client,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: Client::new(),
        }
    }

    /// Client pointed at the backend chosen by the host-name rule in
    /// [`config::backend_base_url`].
    pub fn from_host() -> Self {
        Self::new(config::backend_base_url())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Liveness probe against the backend root. Any 2xx counts as reachable,
    /// even when the status body cannot be decoded.
    pub async fn health(&self) -> Result<ApiStatus, ApiError> {
        let resp = self.http.get(format!("{}/", self.base_url)).send().await?;
        let resp = check_status(resp, "Backend is not reachable").await?;
        Ok(resp.json().await.unwrap_or_default())
    }

    /// Store a new profile. The backend rejects duplicate ids.
    pub async fn create_profile(&self, profile: &Profile) -> Result<CreatedProfile, ApiError> {
        tracing::debug!("creating profile {}", profile.id);
        let resp = self
            .http
            .post(format!("{}/profiles", self.base_url))
            .json(profile)
            .send()
            .await?;
        let resp = check_status(resp, "Failed to create profile").await?;
        Ok(resp.json().await?)
    }

    /// Fetch the top `top_k` matches for a student, ranked by the backend.
    pub async fn matches(&self, student_id: &str, top_k: u32) -> Result<MatchResponse, ApiError> {
        let url = format!(
            "{}/match/{}?top_k={}",
            self.base_url,
            urlencoding::encode(student_id),
            top_k
        );
        tracing::debug!("fetching matches from {url}");
        let resp = self.http.get(url).send().await?;
        let resp = check_status(resp, "Failed to get matches").await?;
        Ok(resp.json().await?)
    }

    /// List every stored profile.
    pub async fn list_profiles(&self) -> Result<ProfileList, ApiError> {
        let resp = self
            .http
            .get(format!("{}/profiles", self.base_url))
            .send()
            .await?;
        let resp = check_status(resp, "Failed to load profiles").await?;
        Ok(resp.json().await?)
    }

    /// Remove a stored profile.
    pub async fn delete_profile(&self, student_id: &str) -> Result<DeletedProfile, ApiError> {
        let url = format!(
            "{}/profiles/{}",
            self.base_url,
            urlencoding::encode(student_id)
        );
        let resp = self.http.delete(url).send().await?;
        let resp = check_status(resp, "Failed to delete profile").await?;
        Ok(resp.json().await?)
    }
}

/// Turn a non-2xx response into [`ApiError::Backend`], preferring the
/// server's `detail` message over the per-operation fallback.
async fn check_status(resp: Response, fallback: &str) -> Result<Response, ApiError> {
    if resp.status().is_success() {
        return Ok(resp);
    }
    let status = resp.status().as_u16();
    let detail = match resp.json::<ErrorBody>().await {
        Ok(body) if !body.detail.is_empty() => body.detail,
        _ => fallback.to_string(),
    };
    Err(ApiError::Backend { status, detail })
}
