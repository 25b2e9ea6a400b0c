//! Shared reqwest client for the back-office REST API.

use reqwest::{Method, RequestBuilder, Response, StatusCode, Url};
use secrecy::{ExposeSecret, SecretString};
use serde::{de::DeserializeOwned, Serialize};

use crate::config::BackendConfig;
use crate::domain::foundation::DomainError;

/// How the API answered a write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    Done,
    NotFound,
    Conflict,
}

/// Thin wrapper adding base URL, bearer auth and error mapping.
///
/// Resources are addressed by path segments appended to the base URL.
/// Each segment is percent-encoded, so an id holding `/` stays one segment.
///
/// Every transport failure, timeout or unexpected status becomes
/// `ErrorCode::UpstreamUnavailable`. Only single-record reads and writes
/// surface 404 to the caller.
#[derive(Clone)]
pub struct BackendClient {
    http: reqwest::Client,
    base_url: Url,
    api_token: Option<SecretString>,
}

impl BackendClient {
    pub fn new(config: &BackendConfig) -> Result<Self, DomainError> {
        let base_url = Url::parse(config.normalized_base_url()).map_err(|e| {
            DomainError::upstream(format!("Invalid back-office base URL: {}", e))
        })?;
        if base_url.cannot_be_a_base() {
            return Err(DomainError::upstream(format!(
                "Back-office base URL {} cannot carry a path",
                base_url
            )));
        }

        let http = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .build()
            .map_err(|e| DomainError::upstream(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            base_url,
            api_token: config.api_token.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    /// Appends `segments` to the base path.
    ///
    /// # Errors
    ///
    /// `ValidationFailed` for an empty, `.` or `..` segment.
    pub fn url(&self, segments: &[&str]) -> Result<Url, DomainError> {
        let mut url = self.base_url.clone();
        {
            let mut path = url
                .path_segments_mut()
                .map_err(|_| DomainError::upstream("Back-office base URL cannot carry a path"))?;
            path.pop_if_empty();
            for segment in segments {
                if matches!(*segment, "" | "." | "..") {
                    return Err(DomainError::validation(
                        "id",
                        format!("'{}' cannot address a back-office record", segment),
                    ));
                }
                path.push(segment);
            }
        }
        Ok(url)
    }

    fn request(&self, method: Method, url: Url) -> RequestBuilder {
        let builder = self.http.request(method, url);
        match &self.api_token {
            Some(token) => builder.bearer_auth(token.expose_secret()),
            None => builder,
        }
    }

    async fn send(&self, method: Method, path: &str, builder: RequestBuilder) -> Result<Response, DomainError> {
        builder.send().await.map_err(|e| {
            tracing::error!(%method, path, error = %e, "Back-office request failed");
            DomainError::upstream(format!("{} {} failed: {}", method, path, e))
                .with_detail("path", path)
        })
    }

    async fn reject(method: &Method, path: &str, response: Response) -> DomainError {
        let status = response.status();
        let error_text = response.text().await.unwrap_or_default();
        tracing::error!(%method, path, %status, error = %error_text, "Back-office returned an error");
        DomainError::upstream(format!("{} {} returned {}", method, path, status))
            .with_detail("path", path)
            .with_detail("status", status.as_u16().to_string())
    }

    async fn decode<T: DeserializeOwned>(path: &str, response: Response) -> Result<T, DomainError> {
        response.json().await.map_err(|e| {
            tracing::error!(path, error = %e, "Failed to parse back-office response");
            DomainError::upstream(format!("Failed to parse response from {}: {}", path, e))
                .with_detail("path", path)
        })
    }

    /// GET a resource that must exist.
    pub async fn get<T: DeserializeOwned>(&self, segments: &[&str]) -> Result<T, DomainError> {
        self.get_with_query(segments, &[] as &[(&str, &str)]).await
    }

    /// GET with query parameters; any non-2xx is an upstream failure.
    pub async fn get_with_query<T, Q>(&self, segments: &[&str], query: &Q) -> Result<T, DomainError>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let url = self.url(segments)?;
        let path = url.path().to_owned();
        let builder = self.request(Method::GET, url).query(query);
        let response = self.send(Method::GET, &path, builder).await?;

        if !response.status().is_success() {
            return Err(Self::reject(&Method::GET, &path, response).await);
        }
        Self::decode(&path, response).await
    }

    /// GET a single record; 404 reads as absent.
    pub async fn get_optional<T: DeserializeOwned>(&self, segments: &[&str]) -> Result<Option<T>, DomainError> {
        let url = self.url(segments)?;
        let path = url.path().to_owned();
        let builder = self.request(Method::GET, url);
        let response = self.send(Method::GET, &path, builder).await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !response.status().is_success() {
            return Err(Self::reject(&Method::GET, &path, response).await);
        }
        Self::decode(&path, response).await.map(Some)
    }

    /// POST or PUT a JSON body. The response body is ignored.
    pub async fn write<B>(&self, method: Method, segments: &[&str], body: &B) -> Result<WriteOutcome, DomainError>
    where
        B: Serialize + ?Sized,
    {
        let url = self.url(segments)?;
        let path = url.path().to_owned();
        let builder = self.request(method.clone(), url).json(body);
        let response = self.send(method.clone(), &path, builder).await?;
        Self::classify(&method, &path, response).await
    }

    pub async fn delete(&self, segments: &[&str]) -> Result<WriteOutcome, DomainError> {
        let url = self.url(segments)?;
        let path = url.path().to_owned();
        let builder = self.request(Method::DELETE, url);
        let response = self.send(Method::DELETE, &path, builder).await?;
        Self::classify(&Method::DELETE, &path, response).await
    }

    async fn classify(method: &Method, path: &str, response: Response) -> Result<WriteOutcome, DomainError> {
        match response.status() {
            status if status.is_success() => Ok(WriteOutcome::Done),
            StatusCode::NOT_FOUND => Ok(WriteOutcome::NotFound),
            StatusCode::CONFLICT => Ok(WriteOutcome::Conflict),
            _ => Err(Self::reject(method, path, response).await),
        }
    }
}

impl std::fmt::Debug for BackendClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BackendClient")
            .field("base_url", &self.base_url.as_str())
            .field("authenticated", &self.api_token.is_some())
            .finish()
    }
}
