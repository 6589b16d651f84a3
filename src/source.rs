// 🌐 Remote Person Source - one GET to a random-user API per person
// The name comes from the API, the money is drawn locally

use crate::config::BoardConfig;
use crate::person::Person;
use async_trait::async_trait;
use rand::Rng;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::sync::Arc;
use thiserror::Error;

/// Exclusive upper bound of the random money draw.
pub const MAX_RANDOM_MONEY: u32 = 1_000_000;

// ============================================================================
// ERRORS
// ============================================================================

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("request to random-user API failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("random-user API answered with status {0}")]
    Status(StatusCode),

    #[error("random-user API returned an unexpected body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("random-user API returned no users")]
    EmptyResults,
}

// ============================================================================
// WIRE FORMAT
// ============================================================================

/// Subset of the random-user response that is actually read.
#[derive(Debug, Deserialize)]
struct RandomUserResponse {
    #[serde(default)]
    results: Vec<RandomUser>,
}

#[derive(Debug, Deserialize)]
struct RandomUser {
    name: RandomUserName,
}

#[derive(Debug, Deserialize)]
struct RandomUserName {
    first: String,
    last: String,
}

/// Extract "first last" from the first entry of a random-user response body.
pub fn parse_random_user_name(body: &str) -> Result<String, SourceError> {
    let response: RandomUserResponse = serde_json::from_str(body)?;
    let user = response
        .results
        .into_iter()
        .next()
        .ok_or(SourceError::EmptyResults)?;

    Ok(format!("{} {}", user.name.first, user.name.last))
}

/// Uniform integer amount in `[0, MAX_RANDOM_MONEY)`.
pub fn random_money<R: Rng>(rng: &mut R) -> f64 {
    f64::from(rng.gen_range(0..MAX_RANDOM_MONEY))
}

// ============================================================================
// SOURCE
// ============================================================================

/// Produces one new person per call.
#[async_trait]
pub trait PersonSource: Send + Sync {
    async fn fetch_person(&self) -> Result<Person, SourceError>;
}

#[async_trait]
impl<T: PersonSource + ?Sized> PersonSource for Arc<T> {
    async fn fetch_person(&self) -> Result<Person, SourceError> {
        (**self).fetch_person().await
    }
}

/// `PersonSource` backed by the random-user HTTP API.
#[derive(Debug, Clone)]
pub struct RandomUserSource {
    client: Client,
    endpoint: String,
}

impl RandomUserSource {
    pub fn new(config: &BoardConfig) -> Result<Self, SourceError> {
        let client = Client::builder().timeout(config.timeout).build()?;

        Ok(RandomUserSource {
            client,
            endpoint: config.endpoint.clone(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl PersonSource for RandomUserSource {
    async fn fetch_person(&self) -> Result<Person, SourceError> {
        tracing::debug!(endpoint = %self.endpoint, "fetching random user");

        let response = self.client.get(&self.endpoint).send().await?;
        let status = response.status();
        if !status.is_success() {
            tracing::warn!(%status, "random-user API rejected request");
            return Err(SourceError::Status(status));
        }

        let body = response.text().await?;
        let name = parse_random_user_name(&body).inspect_err(|err| {
            tracing::warn!(error = %err, "could not read random-user response");
        })?;
        let money = random_money(&mut rand::thread_rng());

        Ok(Person::new(name, money))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_parse_takes_first_result() {
        let body = r#"{
            "results": [
                {"name": {"title": "Ms", "first": "Jane", "last": "Doe"}, "email": "jane@example.com"},
                {"name": {"title": "Mr", "first": "John", "last": "Roe"}}
            ],
            "info": {"seed": "abc", "results": 2}
        }"#;

        assert_eq!(parse_random_user_name(body).unwrap(), "Jane Doe");
    }

    #[test]
    fn test_parse_empty_results() {
        let err = parse_random_user_name(r#"{"results": []}"#).unwrap_err();
        assert!(matches!(err, SourceError::EmptyResults));

        let err = parse_random_user_name(r#"{"info": {}}"#).unwrap_err();
        assert!(matches!(err, SourceError::EmptyResults));
    }

    #[test]
    fn test_parse_malformed_body() {
        let err = parse_random_user_name("<html>oops</html>").unwrap_err();
        assert!(matches!(err, SourceError::Decode(_)));

        let err = parse_random_user_name(r#"{"results": [{"name": {"first": "Solo"}}]}"#).unwrap_err();
        assert!(matches!(err, SourceError::Decode(_)));
    }

    #[test]
    fn test_random_money_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1_000 {
            let money = random_money(&mut rng);
            assert!(money >= 0.0);
            assert!(money < f64::from(MAX_RANDOM_MONEY));
            assert_eq!(money.fract(), 0.0);
        }
    }

    #[test]
    fn test_source_uses_configured_endpoint() {
        let config = BoardConfig::default().with_overrides(Some("http://127.0.0.1:1/api".to_string()), None);
        let source = RandomUserSource::new(&config).unwrap();
        assert_eq!(source.endpoint(), "http://127.0.0.1:1/api");
    }
}
