// src/sources/remoteok.rs

//! RemoteOK API source.

use async_trait::async_trait;
use chrono::Utc;

use crate::error::Result;
use crate::models::{RawRecord, RemoteOkJob};

use super::JobSource;

const API_URL: &str = "https://remoteok.io/api";

/// At most this many postings are kept per keyword.
const MAX_PER_KEYWORD: usize = 10;

/// Fetches recent postings from the RemoteOK public API.
///
/// The API returns the full listing in one call; relevance filtering against
/// the keyword and the recency window happen client-side.
pub struct RemoteOkSource {
    client: reqwest::Client,
    max_age_days: i64,
}

impl RemoteOkSource {
    pub fn new(client: reqwest::Client, max_age_days: i64) -> Self {
        Self {
            client,
            max_age_days,
        }
    }

    /// Convert the raw API payload into job records.
    ///
    /// The first array element is a legal/metadata blob, not a posting; it
    /// is skipped. Remaining entries are converted one at a time so an
    /// entry that is not even an object drops alone instead of failing the
    /// whole payload.
    fn parse_payload(values: Vec<serde_json::Value>) -> Vec<RemoteOkJob> {
        values
            .into_iter()
            .skip(1)
            .filter_map(|value| serde_json::from_value(value).ok())
            .collect()
    }

    /// Keep postings that mention the keyword and fall within the recency
    /// window, capped at [`MAX_PER_KEYWORD`].
    fn select(&self, jobs: Vec<RemoteOkJob>, keyword: &str) -> Vec<RemoteOkJob> {
        let now = Utc::now();
        jobs.into_iter()
            .filter(|job| job.matches_keyword(keyword) && job.is_recent(now, self.max_age_days))
            .take(MAX_PER_KEYWORD)
            .collect()
    }
}

#[async_trait]
impl JobSource for RemoteOkSource {
    fn name(&self) -> &'static str {
        "RemoteOK"
    }

    async fn fetch(&self, keyword: &str) -> Result<Vec<RawRecord>> {
        let response = self.client.get(API_URL).send().await?.error_for_status()?;
        let values: Vec<serde_json::Value> = response.json().await?;

        Ok(self
            .select(Self::parse_payload(values), keyword)
            .into_iter()
            .map(RawRecord::RemoteOk)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn job(position: &str, days_old: i64) -> RemoteOkJob {
        RemoteOkJob {
            position: position.to_string(),
            date: Some((Utc::now() - chrono::Duration::days(days_old)).timestamp()),
            ..RemoteOkJob::default()
        }
    }

    fn source() -> RemoteOkSource {
        RemoteOkSource::new(reqwest::Client::new(), 7)
    }

    #[test]
    fn test_select_filters_by_keyword_and_recency() {
        let jobs = vec![
            job("BIM Coordinator", 2),
            job("BIM Manager", 14), // stale
            job("Barista", 1),      // irrelevant
        ];
        let kept = source().select(jobs, "bim");
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].position, "BIM Coordinator");
    }

    #[test]
    fn test_select_caps_results() {
        let jobs: Vec<_> = (0..25).map(|_| job("GIS Analyst", 1)).collect();
        assert_eq!(source().select(jobs, "gis").len(), MAX_PER_KEYWORD);
    }

    #[test]
    fn test_payload_tolerates_malformed_records() {
        // One record with null fields must not drop its neighbors.
        let payload = r#"[
            {"legal": "API terms of use"},
            {"position": "GIS Analyst", "company": "Acme Maps"},
            {"position": "GIS Developer", "location": null, "salary_min": null},
            "not even an object"
        ]"#;
        let values: Vec<serde_json::Value> = serde_json::from_str(payload).unwrap();
        let jobs = RemoteOkSource::parse_payload(values);
        assert_eq!(jobs.len(), 2);
        assert_eq!(jobs[0].position, "GIS Analyst");
        assert_eq!(jobs[1].position, "GIS Developer");
        assert_eq!(jobs[1].salary_min, 0);
    }

    #[test]
    fn test_select_keeps_undated_jobs() {
        let undated = RemoteOkJob {
            position: "GIS Analyst".to_string(),
            ..RemoteOkJob::default()
        };
        assert_eq!(source().select(vec![undated], "gis").len(), 1);
    }
}
