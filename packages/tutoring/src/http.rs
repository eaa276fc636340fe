//! # HTTP backend: `reqwest` over the browser's fetch
//!
//! [`HttpBackend`] implements [`SessionClient`] and [`TutoringBackend`] against
//! the real endpoints. On `wasm32` reqwest delegates to `fetch`, so requests carry
//! the page's cookies:
//!
//! | Endpoint | Method | Credentials | Success |
//! |----------|--------|-------------|---------|
//! | profile | GET | `include` | exactly 200 (an unreadable body yields the default profile); anything else means unauthenticated |
//! | push status | GET | same-origin | 2xx + `{ has_push }` |
//! | push subscribe | POST JSON | same-origin | any 2xx |
//! | search tutors | GET `?subject=…` | same-origin | 2xx + `{ results }` |
//! | get subjects | GET | same-origin | 2xx + `{ user_subjects }` |
//! | edit tutor profile | GET `?subject=…` | same-origin | 2xx + any JSON body |
//!
//! reqwest needs absolute URLs, so every endpoint path is joined onto the page
//! origin. No timeouts and no retries are configured.

use reqwest::header::CONTENT_TYPE;
use reqwest::{RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use url::Url;

use crate::backend::{SessionClient, SessionState, TutoringBackend};
use crate::config::EndpointsConfig;
use crate::error::ClientError;
use crate::models::{Profile, PushStatus, SearchResponse, TutorEntry, UserSubjects};
use crate::query::subject_query;

#[derive(Clone, Debug)]
pub struct HttpBackend {
    client: reqwest::Client,
    origin: Url,
    endpoints: EndpointsConfig,
}

impl HttpBackend {
    /// Create a backend rooted at `origin` (e.g. `https://example.org`).
    pub fn new(origin: &str, endpoints: EndpointsConfig) -> Result<Self, ClientError> {
        Ok(Self {
            client: reqwest::Client::new(),
            origin: Url::parse(origin)?,
            endpoints,
        })
    }

    /// Absolute URL for an endpoint path, with an optional query string.
    pub fn endpoint_url(&self, path: &str, query: Option<&str>) -> Result<Url, ClientError> {
        let mut url = self.origin.join(path)?;
        if let Some(query) = query.filter(|q| !q.is_empty()) {
            url.set_query(Some(query));
        }
        Ok(url)
    }

    fn get(&self, url: Url) -> RequestBuilder {
        let request = self.client.get(url);
        #[cfg(target_arch = "wasm32")]
        let request = request.fetch_credentials_same_origin();
        request
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, ClientError> {
        tracing::debug!("GET {}", url);
        let response = self.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status(status.as_u16()));
        }
        Ok(response.json::<T>().await?)
    }
}

impl SessionClient for HttpBackend {
    async fn fetch_profile(&self) -> Result<SessionState, ClientError> {
        let url = self.endpoint_url(&self.endpoints.profile, None)?;
        let request = self.client.get(url);
        #[cfg(target_arch = "wasm32")]
        let request = request.fetch_credentials_include();

        let response = request.send().await?;
        if response.status() != StatusCode::OK {
            tracing::debug!("profile request returned {}", response.status());
            return Ok(SessionState::Unauthenticated);
        }

        // A 200 is a session even if the body is unreadable.
        let profile = match response.text().await {
            Ok(body) => serde_json::from_str::<Profile>(&body).unwrap_or_else(|e| {
                tracing::warn!("unreadable profile body, using defaults: {}", e);
                Profile::default()
            }),
            Err(e) => {
                tracing::warn!("failed to read profile body, using defaults: {}", e);
                Profile::default()
            }
        };
        Ok(SessionState::Authenticated(profile))
    }
}

impl TutoringBackend for HttpBackend {
    async fn push_status(&self) -> Result<bool, ClientError> {
        let url = self.endpoint_url(&self.endpoints.push_status, None)?;
        let status: PushStatus = self.get_json(url).await?;
        Ok(status.has_push)
    }

    async fn subscribe_push(&self, subscription_json: String) -> Result<(), ClientError> {
        let url = self.endpoint_url(&self.endpoints.push_subscribe, None)?;
        let request = self
            .client
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .body(subscription_json);
        #[cfg(target_arch = "wasm32")]
        let request = request.fetch_credentials_same_origin();

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status(status.as_u16()));
        }
        Ok(())
    }

    async fn search_tutors(&self, subjects: &[String]) -> Result<Vec<TutorEntry>, ClientError> {
        let query = subject_query(subjects);
        let url = self.endpoint_url(&self.endpoints.search_tutors, Some(&query))?;
        let response: SearchResponse = self.get_json(url).await?;
        Ok(response.results)
    }

    async fn user_subjects(&self) -> Result<Vec<String>, ClientError> {
        let url = self.endpoint_url(&self.endpoints.get_subjects, None)?;
        let subjects: UserSubjects = self.get_json(url).await?;
        Ok(subjects.user_subjects)
    }

    async fn edit_tutor_profile(&self, subjects: &[String]) -> Result<(), ClientError> {
        let query = subject_query(subjects);
        let url = self.endpoint_url(&self.endpoints.edit_tutor_profile, Some(&query))?;
        let _: serde_json::Value = self.get_json(url).await?;
        Ok(())
    }
}
