//! HTTP client for the generation service.
//!
//! One transport loop serves all four typed operations: issue the request,
//! classify the status, retry transient failures with linear backoff, and
//! observe cooperative cancellation at every suspension point.

use crate::generator::endpoint::Endpoint;
use crate::generator::wire::{self, BatchGenerationRequest, SingleGenerationRequest};
use async_trait::async_trait;
use quizforge_application::{GenerationError, GenerationGateway, McqItem, QaItem};
use quizforge_domain::ProblemPattern;
use reqwest::Url;
use reqwest::header;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::future::Future;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::debug;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(20);
const DEFAULT_RETRIES: u32 = 1;

// The two backoff slopes are part of the transport contract: transient
// transport failures back off slightly faster than retryable statuses.
const TRANSPORT_BACKOFF_STEP: f64 = 0.4;
const STATUS_BACKOFF_STEP: f64 = 0.5;

/// Client for the question-generation service.
///
/// Cheap to clone; clones share the connection pool and the cancellation
/// token.
#[derive(Debug, Clone)]
pub struct GeneratorClient {
    base_url: Url,
    extra_headers: Vec<(String, String)>,
    timeout: Duration,
    retries: u32,
    cancellation: Option<CancellationToken>,
    http: reqwest::Client,
}

impl GeneratorClient {
    /// Create a client for the given base URL.
    ///
    /// Endpoint paths are appended to the base URL's path component, so a
    /// base of `http://host:8000/api` yields `/api/generator/...` requests.
    pub fn new(base_url: &str) -> Result<Self, GenerationError> {
        let parsed = Url::parse(base_url)
            .map_err(|e| GenerationError::InvalidUrl(format!("{base_url}: {e}")))?;
        if parsed.cannot_be_a_base() {
            return Err(GenerationError::InvalidUrl(base_url.to_string()));
        }
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| GenerationError::Transport(Box::new(e)))?;

        Ok(Self {
            base_url: parsed,
            extra_headers: Vec::new(),
            timeout: DEFAULT_TIMEOUT,
            retries: DEFAULT_RETRIES,
            cancellation: None,
            http,
        })
    }

    /// Override the per-request timeout (default 20 s).
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Override the retry cap (default 1, i.e. at most two attempts).
    pub fn with_retries(mut self, retries: u32) -> Self {
        self.retries = retries;
        self
    }

    /// Add a header sent with every request, next to `Content-Type`.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra_headers.push((name.into(), value.into()));
        self
    }

    /// Thread a cancellation token through the transport loop.
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation = Some(token);
        self
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    // --- typed operations ---

    pub async fn generate_single_qa(
        &self,
        answer: &str,
        existing_questions: &[String],
        pattern: ProblemPattern,
    ) -> Result<QaItem, GenerationError> {
        let request = SingleGenerationRequest {
            answer,
            existing_questions,
            pattern,
        };
        self.post(&Endpoint::QaGenerate, &request).await
    }

    pub async fn generate_batch_qa(
        &self,
        answers: &[String],
        pattern: ProblemPattern,
    ) -> Result<Vec<QaItem>, GenerationError> {
        let request = BatchGenerationRequest { answers, pattern };
        self.post(&Endpoint::QaBatch, &request).await
    }

    /// The service answers the single 4-choice call with an array; an empty
    /// array means "no result".
    pub async fn generate_single_mcq(
        &self,
        answer: &str,
        existing_questions: &[String],
        pattern: ProblemPattern,
    ) -> Result<Vec<McqItem>, GenerationError> {
        let request = SingleGenerationRequest {
            answer,
            existing_questions,
            pattern,
        };
        self.post(&Endpoint::McqGenerate, &request).await
    }

    pub async fn generate_batch_mcq(
        &self,
        answers: &[String],
        pattern: ProblemPattern,
    ) -> Result<Vec<McqItem>, GenerationError> {
        let request = BatchGenerationRequest { answers, pattern };
        self.post(&Endpoint::McqBatch, &request).await
    }

    // --- transport ---

    async fn post<Req: Serialize, Resp: DeserializeOwned>(
        &self,
        endpoint: &Endpoint,
        body: &Req,
    ) -> Result<Resp, GenerationError> {
        let encoded = wire::encode(body)?;
        let (bytes, _status) = self.run(endpoint, encoded).await?;
        wire::decode(&bytes)
    }

    /// Issue one request with retries. At most `retries + 1` attempts.
    async fn run(
        &self,
        endpoint: &Endpoint,
        body: Vec<u8>,
    ) -> Result<(Vec<u8>, u16), GenerationError> {
        let url = self.endpoint_url(endpoint);
        let mut attempt: u32 = 0;

        loop {
            self.check_cancelled()?;

            let mut request = self
                .http
                .request(endpoint.method(), url.clone())
                .timeout(self.timeout)
                .header(header::CONTENT_TYPE, "application/json");
            for (name, value) in &self.extra_headers {
                request = request.header(name.as_str(), value.as_str());
            }

            let response = match self.cancellable(request.body(body.clone()).send()).await? {
                Ok(response) => response,
                Err(e) => {
                    if attempt < self.retries {
                        attempt += 1;
                        debug!(attempt, error = %e, "transport failure, backing off");
                        self.backoff(TRANSPORT_BACKOFF_STEP, attempt).await?;
                        continue;
                    }
                    return Err(GenerationError::Transport(Box::new(e)));
                }
            };

            let status = response.status();
            if status.is_success() {
                let bytes = self
                    .cancellable(response.bytes())
                    .await?
                    .map_err(|e| GenerationError::Transport(Box::new(e)))?;
                return Ok((bytes.to_vec(), status.as_u16()));
            }

            if (status.as_u16() == 429 || status.is_server_error()) && attempt < self.retries {
                attempt += 1;
                debug!(attempt, status = status.as_u16(), "retryable status, backing off");
                self.backoff(STATUS_BACKOFF_STEP, attempt).await?;
                continue;
            }

            let body = response.bytes().await.map(|b| b.to_vec()).unwrap_or_default();
            return Err(GenerationError::Server {
                status: status.as_u16(),
                body,
            });
        }
    }

    fn endpoint_url(&self, endpoint: &Endpoint) -> Url {
        let mut url = self.base_url.clone();
        let path = format!(
            "{}{}",
            self.base_url.path().trim_end_matches('/'),
            endpoint.path()
        );
        url.set_path(&path);
        url
    }

    fn check_cancelled(&self) -> Result<(), GenerationError> {
        if let Some(token) = &self.cancellation
            && token.is_cancelled()
        {
            return Err(GenerationError::Cancelled);
        }
        Ok(())
    }

    /// Await a future, aborting with [`GenerationError::Cancelled`] as soon
    /// as the cancellation token fires.
    async fn cancellable<T>(&self, fut: impl Future<Output = T>) -> Result<T, GenerationError> {
        match &self.cancellation {
            Some(token) => {
                tokio::select! {
                    _ = token.cancelled() => Err(GenerationError::Cancelled),
                    value = fut => Ok(value),
                }
            }
            None => Ok(fut.await),
        }
    }

    async fn backoff(&self, step_secs: f64, attempt: u32) -> Result<(), GenerationError> {
        let delay = Duration::from_secs_f64(step_secs * f64::from(attempt));
        self.cancellable(tokio::time::sleep(delay)).await
    }
}

#[async_trait]
impl GenerationGateway for GeneratorClient {
    async fn generate_single_qa(
        &self,
        answer: &str,
        existing_questions: &[String],
        pattern: ProblemPattern,
    ) -> Result<QaItem, GenerationError> {
        GeneratorClient::generate_single_qa(self, answer, existing_questions, pattern).await
    }

    async fn generate_batch_qa(
        &self,
        answers: &[String],
        pattern: ProblemPattern,
    ) -> Result<Vec<QaItem>, GenerationError> {
        GeneratorClient::generate_batch_qa(self, answers, pattern).await
    }

    async fn generate_single_mcq(
        &self,
        answer: &str,
        existing_questions: &[String],
        pattern: ProblemPattern,
    ) -> Result<Vec<McqItem>, GenerationError> {
        GeneratorClient::generate_single_mcq(self, answer, existing_questions, pattern).await
    }

    async fn generate_batch_mcq(
        &self,
        answers: &[String],
        pattern: ProblemPattern,
    ) -> Result<Vec<McqItem>, GenerationError> {
        GeneratorClient::generate_batch_mcq(self, answers, pattern).await
    }
}
