//! HTTP client for the quote service.
//!
//! Thin `reqwest` wrapper over two endpoints: `GET {base}/moods` and
//! `GET {base}/quotes/random[?mood=]`. Callers are expected to substitute
//! fallback content on any `Err`; this client never retries.

use std::time::Duration;

use anyhow::{Result, anyhow};
use reqwest::Client;

use super::model::{Mood, Quote};

/// Hard per-request timeout so a dead service can never wedge the UI's
/// loading state.
const TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone)]
pub struct QuotesApi {
    client: Client,
    base: String,
}

impl QuotesApi {
    pub fn new(base: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(TIMEOUT_SECS))
            .build()
            .expect("failed to initialize HTTP client");
        Self {
            client,
            base: base.into(),
        }
    }

    /// Fetch the mood catalog.
    pub async fn moods(&self) -> Result<Vec<Mood>> {
        let url = format!("{}/moods", self.base);
        let response = self.client.get(&url).send().await?.error_for_status()?;
        let moods: Vec<Mood> = response.json().await?;
        Ok(moods)
    }

    /// Fetch a random quote, optionally filtered by mood name.
    pub async fn random_quote(&self, mood: Option<&str>) -> Result<Quote> {
        let url = format!("{}/quotes/random", self.base);
        let mut request = self.client.get(&url);
        if let Some(name) = mood {
            request = request.query(&[("mood", name)]);
        }
        let response = request.send().await?.error_for_status()?;
        let quote: Quote = response.json().await?;
        if quote.text.is_empty() {
            return Err(anyhow!("quote service returned an empty quote"));
        }
        Ok(quote)
    }
}
