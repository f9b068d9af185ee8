// src/pipeline/filter.rs

//! Configured posting filters.

use crate::models::{FilterConfig, JobPosting};

/// Location substrings that mark a posting as remote.
const REMOTE_INDICATORS: &[&str] = &["remote", "remoto", "worldwide"];

/// Company substrings that mark a posting as coming from a recruiting agency.
const AGENCY_INDICATORS: &[&str] = &["staffing", "recruiting", "headhunter", "talent acquisition"];

/// Apply the configured filters in order: minimum salary, remote-only,
/// agency exclusion. All substring matches are case-insensitive and
/// surviving postings are returned unmodified.
pub fn apply_filters(postings: Vec<JobPosting>, filters: &FilterConfig) -> Vec<JobPosting> {
    postings
        .into_iter()
        .filter(|posting| {
            // Unknown salary (0) is never treated as "too low".
            if filters.min_salary > 0
                && posting.salary_min > 0
                && posting.salary_min < filters.min_salary
            {
                return false;
            }

            if filters.remote_only {
                let location = posting.location.to_lowercase();
                if !REMOTE_INDICATORS.iter().any(|word| location.contains(word)) {
                    return false;
                }
            }

            if filters.exclude_agencies {
                let company = posting.company.to_lowercase();
                if AGENCY_INDICATORS.iter().any(|word| company.contains(word)) {
                    return false;
                }
            }

            true
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn posting(company: &str, location: &str, salary_min: u64) -> JobPosting {
        JobPosting {
            title: "BIM Manager".to_string(),
            company: company.to_string(),
            location: location.to_string(),
            salary_min,
            salary_max: 0,
            url: format!("https://x/{company}/{salary_min}"),
            description: String::new(),
            source: "RemoteOK".to_string(),
            score: 0,
        }
    }

    fn filters() -> FilterConfig {
        FilterConfig {
            min_salary: 25000,
            remote_only: false,
            exclude_agencies: true,
            max_age_days: 7,
        }
    }

    #[test]
    fn test_min_salary_drops_known_low_salary() {
        let kept = apply_filters(vec![posting("Acme", "Remote", 20000)], &filters());
        assert!(kept.is_empty());
    }

    #[test]
    fn test_min_salary_never_drops_unknown_salary() {
        let kept = apply_filters(vec![posting("Acme", "Remote", 0)], &filters());
        assert_eq!(kept.len(), 1);
    }

    #[test]
    fn test_remote_only() {
        let mut config = filters();
        config.remote_only = true;

        let input = vec![
            posting("Acme", "Remote, Colombia", 0),
            posting("Globex", "Bogotá office", 0),
            posting("Initech", "Trabajo remoto", 0),
            posting("Umbrella", "Worldwide", 0),
        ];
        let kept = apply_filters(input, &config);
        let companies: Vec<_> = kept.iter().map(|p| p.company.as_str()).collect();
        assert_eq!(companies, vec!["Acme", "Initech", "Umbrella"]);
    }

    #[test]
    fn test_agency_exclusion_case_insensitive() {
        let input = vec![
            posting("Acme Engineering", "Remote", 0),
            posting("Global Staffing Inc", "Remote", 0),
            posting("TALENT ACQUISITION PARTNERS", "Remote", 0),
        ];
        let kept = apply_filters(input, &filters());
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].company, "Acme Engineering");
    }

    #[test]
    fn test_disabled_filters_keep_everything() {
        let config = FilterConfig {
            min_salary: 0,
            remote_only: false,
            exclude_agencies: false,
            max_age_days: 7,
        };
        let input = vec![
            posting("Global Staffing Inc", "On-site", 1000),
            posting("Acme", "Remote", 0),
        ];
        assert_eq!(apply_filters(input, &config).len(), 2);
    }

    #[test]
    fn test_survivors_are_unmodified() {
        let original = posting("Acme", "Remote", 60000);
        let kept = apply_filters(vec![original.clone()], &filters());
        assert_eq!(kept[0], original);
    }
}
