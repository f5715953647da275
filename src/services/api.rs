//! Study Group API Client
//!
//! HTTP client for the backend study group service.
//!
//! ## Pattern
//!
//! ```text
//! CreateStudyGroupRequest
//!       │  POST application/json
//!       ▼
//! backend /study_groups
//!       │
//!       ▼
//! ApiReply { status, body }   (transport or body decode failure -> Err)
//! ```

use futures::FutureExt;
use futures::future::BoxFuture;
use tracing::debug;

use crate::domain::{ApiConfig, CreateStudyGroupRequest};
use crate::error::Result;

/// Response from the backend: status code and parsed JSON body
#[derive(Debug, Clone, PartialEq)]
pub struct ApiReply {
    pub status: u16,
    pub body: serde_json::Value,
}

impl ApiReply {
    pub fn new(status: u16, body: serde_json::Value) -> Self {
        Self { status, body }
    }

    /// Status in the 2xx range
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Backend study group service
pub trait StudyGroupApi: Send + Sync {
    /// Send one create request.
    ///
    /// `Err` means the exchange did not complete: the request could not be
    /// sent, or the response body was not JSON.
    fn create_study_group<'a>(
        &'a self,
        request: &'a CreateStudyGroupRequest,
    ) -> BoxFuture<'a, Result<ApiReply>>;
}

/// reqwest-backed implementation of [`StudyGroupApi`]
#[derive(Debug, Clone)]
pub struct HttpStudyGroupApi {
    client: reqwest::Client,
    url: String,
}

impl HttpStudyGroupApi {
    /// Build a client for the configured endpoint
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            url: config.create_url(),
        })
    }

    /// Endpoint the client posts to
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl StudyGroupApi for HttpStudyGroupApi {
    fn create_study_group<'a>(
        &'a self,
        request: &'a CreateStudyGroupRequest,
    ) -> BoxFuture<'a, Result<ApiReply>> {
        async move {
            debug!(url = %self.url, name = %request.name, "POST create study group");

            // `.json()` sets `Content-Type: application/json`
            let response = self.client.post(&self.url).json(request).send().await?;
            let status = response.status().as_u16();
            let body = response.json::<serde_json::Value>().await?;

            debug!(status, "Create study group response received");
            Ok(ApiReply::new(status, body))
        }
        .boxed()
    }
}
