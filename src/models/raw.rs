//! Raw record shapes for each source.
//!
//! Each API returns its own payload shape; the variants here mirror those
//! shapes verbatim so the normalizer can map them into the canonical
//! [`JobPosting`](super::JobPosting) schema in one place.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// A raw record from one of the configured sources.
#[derive(Debug, Clone)]
pub enum RawRecord {
    /// Posting from the RemoteOK public API
    RemoteOk(RemoteOkJob),

    /// Posting from The Muse public API
    Muse(MuseJob),

    /// Synthetic search-link descriptor (no network fetch behind it)
    Link(SearchLink),
}

/// A job entry from the RemoteOK API listing.
///
/// Entries are inconsistently filled: any field may be absent or `null`,
/// and salary values arrive as numbers or numeric strings. Every field
/// deserializes to its default instead of erroring, so one sloppy record
/// never poisons the rest of the payload.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RemoteOkJob {
    #[serde(default, deserialize_with = "de_string")]
    pub id: String,

    #[serde(default, deserialize_with = "de_string")]
    pub position: String,

    #[serde(default, deserialize_with = "de_string")]
    pub company: String,

    #[serde(default, deserialize_with = "de_string")]
    pub location: String,

    #[serde(default, deserialize_with = "de_string")]
    pub description: String,

    #[serde(default, deserialize_with = "de_salary")]
    pub salary_min: u64,

    #[serde(default, deserialize_with = "de_salary")]
    pub salary_max: u64,

    /// Posting time as a unix epoch; the API sends this as either a number
    /// or a numeric string depending on the entry.
    #[serde(default, deserialize_with = "de_epoch")]
    pub date: Option<i64>,
}

impl RemoteOkJob {
    /// Whether the posting was published within the trailing `max_days`
    /// window. Entries without a parsable timestamp count as recent.
    pub fn is_recent(&self, now: DateTime<Utc>, max_days: i64) -> bool {
        match self.date.and_then(|epoch| DateTime::from_timestamp(epoch, 0)) {
            Some(posted) => now - posted <= chrono::Duration::days(max_days),
            None => true,
        }
    }

    /// Whether the keyword appears anywhere in the position, company or
    /// description text (case-insensitive).
    pub fn matches_keyword(&self, keyword: &str) -> bool {
        let haystack = format!("{} {} {}", self.position, self.company, self.description)
            .to_lowercase();
        haystack.contains(&keyword.to_lowercase())
    }
}

/// Accept an epoch timestamp sent as an integer or a numeric string.
fn de_epoch<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Number(n) => n.as_i64(),
        serde_json::Value::String(s) => s.parse().ok(),
        _ => None,
    })
}

/// Accept a string field sent as `null` (or any non-string) as empty.
fn de_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Accept a salary sent as a number, a numeric string, or `null`.
fn de_salary<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Number(n) => n
            .as_u64()
            .or_else(|| n.as_f64().map(|f| f.max(0.0) as u64))
            .unwrap_or(0),
        serde_json::Value::String(s) => s.parse().unwrap_or(0),
        _ => 0,
    })
}

/// A job entry from The Muse API (`results` array).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MuseJob {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub company: MuseCompany,

    #[serde(default)]
    pub locations: Vec<MuseLocation>,

    #[serde(default)]
    pub refs: MuseRefs,

    #[serde(default)]
    pub contents: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MuseCompany {
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MuseLocation {
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MuseRefs {
    #[serde(default)]
    pub landing_page: String,
}

/// A pre-built search URL into a job board the system does not query
/// programmatically. The `score` is the generator's pre-ranked hint in
/// [50, 95]; it seeds the displayed score and is overwritten by ranking.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchLink {
    pub title: String,
    pub company: String,
    pub location: String,
    pub description: String,
    pub url: String,
    pub source: String,

    /// Pre-filled minimum salary when the link itself encodes one
    #[serde(default)]
    pub salary_min: u64,

    /// Target-market priority hint in [50, 95]
    pub score: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_epoch_from_number_and_string() {
        let job: RemoteOkJob = serde_json::from_str(r#"{"date": 1700000000}"#).unwrap();
        assert_eq!(job.date, Some(1700000000));

        let job: RemoteOkJob = serde_json::from_str(r#"{"date": "1700000000"}"#).unwrap();
        assert_eq!(job.date, Some(1700000000));

        let job: RemoteOkJob = serde_json::from_str(r#"{"date": null}"#).unwrap();
        assert_eq!(job.date, None);
    }

    #[test]
    fn test_is_recent_window() {
        let now = Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).unwrap();

        let fresh = RemoteOkJob {
            date: Some((now - chrono::Duration::days(3)).timestamp()),
            ..RemoteOkJob::default()
        };
        assert!(fresh.is_recent(now, 7));

        let stale = RemoteOkJob {
            date: Some((now - chrono::Duration::days(10)).timestamp()),
            ..RemoteOkJob::default()
        };
        assert!(!stale.is_recent(now, 7));
    }

    #[test]
    fn test_missing_timestamp_counts_as_recent() {
        let job = RemoteOkJob::default();
        assert!(job.is_recent(Utc::now(), 7));
    }

    #[test]
    fn test_matches_keyword_across_fields() {
        let job = RemoteOkJob {
            position: "Senior Engineer".to_string(),
            company: "Acme BIM Studio".to_string(),
            description: "Work with Revit models".to_string(),
            ..RemoteOkJob::default()
        };
        assert!(job.matches_keyword("bim"));
        assert!(job.matches_keyword("Revit"));
        assert!(!job.matches_keyword("blockchain"));
    }

    #[test]
    fn test_metadata_element_deserializes_harmlessly() {
        // RemoteOK prepends a legal notice object to the jobs array.
        let job: RemoteOkJob =
            serde_json::from_str(r#"{"legal": "API terms of use"}"#).unwrap();
        assert!(job.position.is_empty());
        assert_eq!(job.date, None);
    }

    #[test]
    fn test_null_fields_default_instead_of_erroring() {
        let job: RemoteOkJob = serde_json::from_str(
            r#"{"position": "GIS Analyst", "location": null, "company": null,
                "salary_min": null, "salary_max": "60000"}"#,
        )
        .unwrap();
        assert_eq!(job.position, "GIS Analyst");
        assert!(job.location.is_empty());
        assert_eq!(job.salary_min, 0);
        assert_eq!(job.salary_max, 60000);
    }

    #[test]
    fn test_salary_as_float_truncates() {
        let job: RemoteOkJob =
            serde_json::from_str(r#"{"salary_min": 50000.0}"#).unwrap();
        assert_eq!(job.salary_min, 50000);
    }
}
