// src/sources/themuse.rs

//! The Muse API source.

use async_trait::async_trait;
use serde::Deserialize;

use crate::error::Result;
use crate::models::{MuseJob, RawRecord};
use crate::utils::encode_query;

use super::JobSource;

const API_URL: &str = "https://www.themuse.com/api/public/jobs";

/// At most this many postings are kept per keyword.
const MAX_PER_KEYWORD: usize = 10;

/// Fetches postings from The Muse public API, queried by category keyword.
pub struct TheMuseSource {
    client: reqwest::Client,
}

#[derive(Debug, Deserialize)]
struct MuseResponse {
    #[serde(default)]
    results: Vec<MuseJob>,
}

impl TheMuseSource {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl JobSource for TheMuseSource {
    fn name(&self) -> &'static str {
        "The Muse"
    }

    async fn fetch(&self, keyword: &str) -> Result<Vec<RawRecord>> {
        let url = format!(
            "{}?page=1&api_key=&category={}",
            API_URL,
            encode_query(keyword)
        );
        let response = self.client.get(&url).send().await?.error_for_status()?;
        let body: MuseResponse = response.json().await?;

        Ok(body
            .results
            .into_iter()
            .take(MAX_PER_KEYWORD)
            .map(RawRecord::Muse)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_parsing() {
        let body = r#"{
            "results": [
                {
                    "name": "GIS Analyst",
                    "company": {"name": "Acme Maps"},
                    "locations": [{"name": "Bogotá, Colombia"}],
                    "refs": {"landing_page": "https://example.com/jobs/42"},
                    "contents": "Analyze spatial data"
                }
            ],
            "page": 1
        }"#;
        let parsed: MuseResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.results.len(), 1);
        assert_eq!(parsed.results[0].name, "GIS Analyst");
        assert_eq!(parsed.results[0].company.name, "Acme Maps");
        assert_eq!(parsed.results[0].locations[0].name, "Bogotá, Colombia");
    }

    #[test]
    fn test_response_without_results_key() {
        let parsed: MuseResponse = serde_json::from_str(r#"{"page": 1}"#).unwrap();
        assert!(parsed.results.is_empty());
    }
}
