use std::time::Duration;

use reqwest::{Client, Url};

use crate::config::ApiConfig;
use crate::trivia::error::FetchError;
use crate::trivia::model::{describe_response_code, ApiEnvelope, Question};

/// HTTP client for the question endpoint.
///
/// Issues exactly one GET per call. No retries.
#[derive(Debug, Clone)]
pub struct TriviaClient {
    client: Client,
    url: Url,
}

impl TriviaClient {
    pub fn new(config: &ApiConfig) -> Result<Self, FetchError> {
        let timeout = Duration::from_secs(config.timeout_seconds);
        let client = Client::builder()
            .connect_timeout(timeout)
            .timeout(timeout)
            .build()
            .map_err(|source| FetchError::ClientBuild { source })?;

        let url = Url::parse_with_params(
            &config.base_url,
            &[
                ("amount", config.amount.to_string()),
                ("category", config.category.to_string()),
            ],
        )
        .map_err(|e| FetchError::InvalidUrl {
            url: config.base_url.clone(),
            reason: e.to_string(),
        })?;

        Ok(Self { client, url })
    }

    /// Full request URL including the query string.
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Fetch one question: the first entry of the returned pool.
    pub async fn fetch_question(&self) -> Result<Question, FetchError> {
        let envelope = self.fetch_envelope().await?;
        first_playable(envelope)
    }

    async fn fetch_envelope(&self) -> Result<ApiEnvelope, FetchError> {
        let response = self
            .client
            .get(self.url.clone())
            .send()
            .await
            .map_err(|source| FetchError::Network {
                url: self.url.to_string(),
                source,
            })?;

        // The API reports failures such as rate limiting in the body, so the
        // envelope is parsed regardless of the HTTP status.
        let status = response.status();
        let body = response.text().await.map_err(|source| FetchError::Network {
            url: self.url.to_string(),
            source,
        })?;
        tracing::debug!(%status, bytes = body.len(), "Received trivia response");

        serde_json::from_str(&body).map_err(|source| FetchError::Malformed { source })
    }
}

/// Validate an envelope and pick its first question.
pub fn first_playable(envelope: ApiEnvelope) -> Result<Question, FetchError> {
    if envelope.response_code != 0 {
        return Err(FetchError::ApiRejected {
            code: envelope.response_code,
            reason: describe_response_code(envelope.response_code),
        });
    }

    let question = envelope
        .results
        .into_iter()
        .next()
        .ok_or(FetchError::EmptyResults)?;

    if question.correct_answer.is_empty() {
        return Err(FetchError::InvalidQuestion {
            reason: "correct answer is empty".to_string(),
        });
    }
    if question.incorrect_answers.contains(&question.correct_answer) {
        return Err(FetchError::InvalidQuestion {
            reason: "correct answer also listed as incorrect".to_string(),
        });
    }

    Ok(question)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trivia::model::{Difficulty, QuestionKind};

    fn question(correct: &str, incorrect: &[&str]) -> Question {
        Question {
            kind: QuestionKind::Multiple,
            difficulty: Difficulty::Hard,
            category: "Science: Computers".into(),
            question: "?".into(),
            correct_answer: correct.into(),
            incorrect_answers: incorrect.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn nonzero_code_is_rejected() {
        let envelope = ApiEnvelope {
            response_code: 2,
            results: vec![question("a", &["b"])],
        };
        assert!(matches!(
            first_playable(envelope),
            Err(FetchError::ApiRejected { code: 2, .. })
        ));
    }

    #[test]
    fn first_result_is_chosen() {
        let envelope = ApiEnvelope {
            response_code: 0,
            results: vec![question("first", &["x"]), question("second", &["y"])],
        };
        assert_eq!(first_playable(envelope).unwrap().correct_answer, "first");
    }

    #[test]
    fn empty_results_are_an_error() {
        let envelope = ApiEnvelope {
            response_code: 0,
            results: Vec::new(),
        };
        assert!(matches!(
            first_playable(envelope),
            Err(FetchError::EmptyResults)
        ));
    }

    #[test]
    fn duplicated_correct_answer_is_invalid() {
        let envelope = ApiEnvelope {
            response_code: 0,
            results: vec![question("a", &["b", "a"])],
        };
        assert!(matches!(
            first_playable(envelope),
            Err(FetchError::InvalidQuestion { .. })
        ));
    }
}
