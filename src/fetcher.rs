use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::dataset::AnimalRecord;

const API_URL: &str = "https://api.api-ninjas.com/v1/animals";

/// What a successful round trip to the animals API means for the page.
#[derive(Debug)]
pub enum FetchOutcome {
    /// At least one matching record.
    Records(Vec<AnimalRecord>),
    /// 200 with an empty list: the animal does not exist. Carries the
    /// ready-to-inject message body.
    NoSuchAnimal(String),
}

/// API Ninjas animals client. The key is injected at construction and sent
/// as the `X-Api-Key` header on every request.
pub struct AnimalsApi {
    client: reqwest::Client,
    api_key: String,
}

impl AnimalsApi {
    pub fn new(api_key: String) -> Self {
        AnimalsApi {
            client: reqwest::Client::new(),
            api_key,
        }
    }

    /// Query the API for animals matching `name`. A non-success status is
    /// logged and reported as `None` (no data); transport failures and
    /// malformed bodies propagate. No retry, no backoff.
    pub async fn fetch(&self, name: &str) -> Result<Option<FetchOutcome>> {
        info!("Fetching animal '{}' from {}", name, API_URL);
        let response = self
            .client
            .get(API_URL)
            .query(&[("name", name)])
            .header("X-Api-Key", &self.api_key)
            .send()
            .await
            .context("animals API request failed")?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .context("failed to read animals API response")?;
        interpret_response(name, status, &body)
    }
}

/// Map status + body to an outcome: 200 with records, 200 with an empty
/// list (animal missing), or anything else (logged, no data).
fn interpret_response(name: &str, status: u16, body: &str) -> Result<Option<FetchOutcome>> {
    if status != 200 {
        warn!("Animals API error {}: {}", status, body);
        return Ok(None);
    }
    let animals: Vec<AnimalRecord> =
        serde_json::from_str(body).context("malformed animals API response")?;
    if animals.is_empty() {
        return Ok(Some(FetchOutcome::NoSuchAnimal(not_found_message(name))));
    }
    Ok(Some(FetchOutcome::Records(animals)))
}

/// Page body used in place of cards when the API knows no such animal.
pub fn not_found_message(name: &str) -> String {
    format!(
        "<h1>The animal '{}' doesn't exist - No data was loaded!</h1>",
        name
    )
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_from_ok_body() {
        let body = r#"[{"name":"Cheetah","characteristics":{"skin_type":"Fur"}}]"#;
        match interpret_response("cheetah", 200, body).unwrap() {
            Some(FetchOutcome::Records(animals)) => {
                assert_eq!(animals.len(), 1);
                assert_eq!(animals[0].name.as_deref(), Some("Cheetah"));
            }
            other => panic!("expected records, got {:?}", other),
        }
    }

    #[test]
    fn empty_body_means_no_such_animal() {
        match interpret_response("Zzyx", 200, "[]").unwrap() {
            Some(FetchOutcome::NoSuchAnimal(msg)) => {
                assert!(msg.contains("Zzyx"));
                assert!(msg.starts_with("<h1>"));
            }
            other => panic!("expected not-found, got {:?}", other),
        }
    }

    #[test]
    fn non_success_status_is_no_data() {
        let outcome = interpret_response("lion", 401, r#"{"error":"Invalid API Key"}"#).unwrap();
        assert!(outcome.is_none());
    }

    #[test]
    fn malformed_ok_body_errors() {
        assert!(interpret_response("lion", 200, "not json").is_err());
    }
}
