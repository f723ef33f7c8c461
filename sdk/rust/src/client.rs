use reqwest::{Client, Response, Url};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub uptime: f64,
    pub version: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RootResponse {
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct EchoResponse {
    pub echo: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PredictRequest {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_k: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredToken {
    pub token: String,
    pub score: f64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PredictResponse {
    pub input: String,
    pub top_k: usize,
    pub predictions: Vec<ScoredToken>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: String,
}

#[derive(Debug, Error)]
pub enum SdkError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid base URL: {0}")]
    Url(String),

    /// The service answered with a non-success status.
    #[error("API returned {status}: {detail}")]
    Status { status: u16, detail: String },
}

pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    /// Use a preconfigured `reqwest::Client` (timeouts, proxies, ...).
    pub fn with_client(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub async fn health(&self) -> Result<HealthResponse, SdkError> {
        let resp = self.client.get(format!("{}/health", self.base_url)).send().await?;
        decode(resp).await
    }

    pub async fn root(&self) -> Result<RootResponse, SdkError> {
        let resp = self.client.get(format!("{}/", self.base_url)).send().await?;
        decode(resp).await
    }

    /// Echo `message`; it is percent-encoded as a single path segment.
    pub async fn echo(&self, message: &str) -> Result<EchoResponse, SdkError> {
        let mut url = Url::parse(&self.base_url).map_err(|e| SdkError::Url(e.to_string()))?;
        url.path_segments_mut()
            .map_err(|_| SdkError::Url(self.base_url.clone()))?
            .pop_if_empty()
            .extend(["echo", message]);

        let resp = self.client.get(url).send().await?;
        decode(resp).await
    }

    pub async fn predict(&self, text: &str, top_k: Option<i64>) -> Result<PredictResponse, SdkError> {
        let req = PredictRequest {
            text: text.to_string(),
            top_k,
        };
        let resp = self
            .client
            .post(format!("{}/predict", self.base_url))
            .json(&req)
            .send()
            .await?;
        decode(resp).await
    }
}

async fn decode<T: for<'de> Deserialize<'de>>(resp: Response) -> Result<T, SdkError> {
    let status = resp.status();
    if !status.is_success() {
        let text = resp.text().await?;
        let detail = serde_json::from_str::<ErrorBody>(&text)
            .map(|b| b.detail)
            .unwrap_or(text);
        return Err(SdkError::Status {
            status: status.as_u16(),
            detail,
        });
    }

    Ok(resp.json::<T>().await?)
}
