//! HTTP core shared by every endpoint function.
//!
//! All calls go through [`ApiClient::send`], which attaches the bearer
//! token when one is stored, decodes the shared envelope, and maps
//! failures onto [`ApiError`].

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::envelope::Envelope;
use crate::error::ApiError;
use crate::token;

/// Typed client for the Pagecraft REST API.
#[derive(Clone, Debug)]
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.send(self.http.get(self.url(path))).await
    }

    pub(crate) async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        self.send(self.http.post(self.url(path)).json(body)).await
    }

    pub(crate) async fn post_unit<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<(), ApiError> {
        self.send_unit(self.http.post(self.url(path)).json(body))
            .await
    }

    pub(crate) async fn put<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        self.send(self.http.put(self.url(path)).json(body)).await
    }

    pub(crate) async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.send_unit(self.http.delete(self.url(path))).await
    }

    async fn send<T: DeserializeOwned>(
        &self,
        builder: reqwest::RequestBuilder,
    ) -> Result<T, ApiError> {
        let envelope = self.send_envelope::<T>(builder).await?;
        envelope.data.ok_or(ApiError::MissingData)
    }

    async fn send_unit(&self, builder: reqwest::RequestBuilder) -> Result<(), ApiError> {
        self.send_envelope::<serde_json::Value>(builder).await?;
        Ok(())
    }

    async fn send_envelope<T: DeserializeOwned>(
        &self,
        builder: reqwest::RequestBuilder,
    ) -> Result<Envelope<T>, ApiError> {
        let builder = match token::access_token() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        };

        let response = builder.send().await?;
        let status = response.status();
        let body = response.text().await?;

        let envelope: Envelope<T> = serde_json::from_str(&body).map_err(|error| {
            if status.is_success() {
                tracing::error!(%status, %error, "response body did not match the envelope shape");
                ApiError::Decode(error.to_string())
            } else {
                // Non-envelope error body (proxy, gateway): generic fallback.
                tracing::error!(%status, "non-envelope error response");
                ApiError::Api {
                    message: None,
                    validation_errors: Vec::new(),
                }
            }
        })?;

        if envelope.is_success() {
            Ok(envelope)
        } else {
            Err(ApiError::Api {
                message: envelope.message,
                validation_errors: envelope.validation_errors,
            })
        }
    }
}
