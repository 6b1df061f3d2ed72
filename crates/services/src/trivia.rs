use async_trait::async_trait;
use rand::Rng;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use quiz_core::model::{Difficulty, Question, QuizQuestion};

use crate::error::{FetchError, ProviderCode};

pub const DEFAULT_API_URL: &str = "https://opentdb.com/api.php";

/// Only multiple-choice questions are requested.
const QUESTION_TYPE: &str = "multiple";

/// Anything that can hand out a batch of quiz questions.
#[async_trait]
pub trait QuestionSource: Send + Sync {
    /// # Errors
    ///
    /// Returns `FetchError` when the batch cannot be retrieved or decoded.
    async fn fetch_questions(
        &self,
        amount: u32,
        difficulty: Difficulty,
    ) -> Result<Vec<QuizQuestion>, FetchError>;
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TriviaConfig {
    pub base_url: String,
}

impl Default for TriviaConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
        }
    }
}

/// HTTP client for the Open Trivia DB `api.php` endpoint.
#[derive(Clone, Debug)]
pub struct TriviaClient {
    client: Client,
    config: TriviaConfig,
}

impl TriviaClient {
    #[must_use]
    pub fn new(config: TriviaConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }
}

#[async_trait]
impl QuestionSource for TriviaClient {
    async fn fetch_questions(
        &self,
        amount: u32,
        difficulty: Difficulty,
    ) -> Result<Vec<QuizQuestion>, FetchError> {
        if amount == 0 {
            return Err(FetchError::InvalidAmount);
        }

        debug!(url = %self.config.base_url, amount, %difficulty, "requesting question batch");
        let response = self
            .client
            .get(&self.config.base_url)
            .query(&query_params(amount, difficulty))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(FetchError::HttpStatus(response.status()));
        }

        let body = response.text().await?;
        decode_batch(&body, &mut rand::rng())
    }
}

fn query_params(amount: u32, difficulty: Difficulty) -> [(&'static str, String); 3] {
    [
        ("amount", amount.to_string()),
        ("difficulty", difficulty.as_str().to_string()),
        ("type", QUESTION_TYPE.to_string()),
    ]
}

#[derive(Debug, Deserialize)]
struct TriviaResponse {
    #[serde(default)]
    response_code: Option<u8>,
    #[serde(default)]
    results: Option<Vec<Question>>,
}

/// Decode a provider response body and attach a shuffled answer list to
/// every question. Question order is preserved.
///
/// # Errors
///
/// Returns `FetchError::Decode` for malformed JSON, `FetchError::Provider` for a
/// non-zero `response_code`, `FetchError::MissingResults` / `FetchError::EmptyBatch`
/// when there is nothing to play, and `FetchError::InvalidQuestion` for unusable entries.
pub fn decode_batch<R: Rng + ?Sized>(
    body: &str,
    rng: &mut R,
) -> Result<Vec<QuizQuestion>, FetchError> {
    let response: TriviaResponse = serde_json::from_str(body)?;

    if let Some(code) = response.response_code.filter(|code| *code != 0) {
        return Err(FetchError::Provider(ProviderCode(code)));
    }

    let results = response.results.ok_or(FetchError::MissingResults)?;
    if results.is_empty() {
        return Err(FetchError::EmptyBatch);
    }

    results
        .into_iter()
        .map(|question| {
            QuizQuestion::from_question_with(question, &mut *rng).map_err(FetchError::from)
        })
        .collect()
}
