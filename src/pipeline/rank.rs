// src/pipeline/rank.rs

//! Relevance scoring and ranking.

use crate::models::{Config, JobPosting};

/// Term-relevance weight multiplier.
const TERM_WEIGHT: i64 = 5;

/// Score every posting and stable-sort the list descending by score.
///
/// The score is the sum of three independent contributions:
/// - term relevance: 5 x (3 per term in title + 2 per term in company
///   + 1 per term in description), case-insensitive substrings;
/// - salary tier: +50 / +30 / +10 against the configured target /
///   preferred / minimum thresholds, highest tier only;
/// - location preference: 10 minus the index of the first matching entry
///   in the ordered preference list (floored at 0), first match only.
///
/// Any pre-existing score, including generator hints on search-link
/// postings, is overwritten. Ties preserve input order.
pub fn rank(mut postings: Vec<JobPosting>, search_terms: &[String], config: &Config) -> Vec<JobPosting> {
    for posting in &mut postings {
        posting.score = score(posting, search_terms, config);
    }
    postings.sort_by_key(|posting| std::cmp::Reverse(posting.score));
    postings
}

fn score(posting: &JobPosting, search_terms: &[String], config: &Config) -> i64 {
    term_relevance(posting, search_terms) * TERM_WEIGHT
        + salary_tier(posting.salary_min, config)
        + location_preference(&posting.location, &config.preferred_locations)
}

fn term_relevance(posting: &JobPosting, search_terms: &[String]) -> i64 {
    let title = posting.title.to_lowercase();
    let company = posting.company.to_lowercase();
    let description = posting.description.to_lowercase();

    let mut relevance = 0;
    for term in search_terms {
        let term = term.to_lowercase();
        if title.contains(&term) {
            relevance += 3;
        }
        if company.contains(&term) {
            relevance += 2;
        }
        if description.contains(&term) {
            relevance += 1;
        }
    }
    relevance
}

fn salary_tier(salary_min: u64, config: &Config) -> i64 {
    if salary_min >= config.salary.target_usd {
        50
    } else if salary_min >= config.salary.preferred_usd {
        30
    } else if salary_min >= config.salary.minimum_usd {
        10
    } else {
        0
    }
}

fn location_preference(location: &str, preferences: &[String]) -> i64 {
    let location = location.to_lowercase();
    for (index, preference) in preferences.iter().enumerate() {
        if location.contains(&preference.to_lowercase()) {
            return (10 - index as i64).max(0);
        }
    }
    0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn posting(title: &str, location: &str, salary_min: u64) -> JobPosting {
        JobPosting {
            title: title.to_string(),
            company: "Acme".to_string(),
            location: location.to_string(),
            salary_min,
            salary_max: 0,
            url: format!("https://x/{title}"),
            description: String::new(),
            source: "RemoteOK".to_string(),
            score: 0,
        }
    }

    fn terms(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_worked_example_scores_55() {
        // Title match: 5*3 = 15; salary 60000 >= preferred 55000: +30;
        // location "Remote" at preference index 0: +10.
        let input = vec![posting("BIM Manager", "Remote, Colombia", 60000)];
        let ranked = rank(input, &terms(&["BIM Manager"]), &Config::default());
        assert_eq!(ranked[0].score, 55);
    }

    #[test]
    fn test_no_match_scores_exactly_zero() {
        let input = vec![posting("Barista", "Antarctica", 0)];
        let ranked = rank(input, &terms(&["BIM Manager"]), &Config::default());
        assert_eq!(ranked[0].score, 0);
    }

    #[test]
    fn test_scores_are_non_negative() {
        let config = Config::default();
        // "Sweden" sits past index 10 in the preference list; the location
        // contribution floors at 0 instead of going negative.
        let input = vec![posting("Barista", "Stockholm, Sweden", 0)];
        let ranked = rank(input, &[], &config);
        assert_eq!(ranked[0].score, 0);
    }

    #[test]
    fn test_term_in_all_fields_compounds() {
        let mut p = posting("Revit Modeler", "Nowhere", 0);
        p.company = "Revit Experts".to_string();
        p.description = "Revit every day".to_string();
        let ranked = rank(vec![p], &terms(&["revit"]), &Config::default());
        // 5 * (3 + 2 + 1) = 30
        assert_eq!(ranked[0].score, 30);
    }

    #[test]
    fn test_salary_tiers_are_exclusive() {
        let config = Config::default();
        assert_eq!(salary_tier(90000, &config), 50);
        assert_eq!(salary_tier(60000, &config), 30);
        assert_eq!(salary_tier(35000, &config), 10);
        assert_eq!(salary_tier(10000, &config), 0);
        assert_eq!(salary_tier(0, &config), 0);
    }

    #[test]
    fn test_only_first_location_preference_counts() {
        // "Remote, Colombia" matches "Remote" (index 0) before "Colombia"
        // (index 6); only the first gives its bonus.
        let config = Config::default();
        assert_eq!(
            location_preference("Remote, Colombia", &config.preferred_locations),
            10
        );
        assert_eq!(
            location_preference("Bogotá, Colombia", &config.preferred_locations),
            4
        );
    }

    #[test]
    fn test_sort_descending_and_stable_on_ties() {
        let a = posting("BIM Manager", "Nowhere", 0); // 15
        let mut b = posting("Nothing", "Nowhere", 0); // 0
        b.url = "https://x/b".to_string();
        let mut c = posting("Nothing else", "Nowhere", 0); // 0, after b
        c.url = "https://x/c".to_string();

        let ranked = rank(
            vec![b.clone(), a.clone(), c.clone()],
            &terms(&["BIM Manager"]),
            &Config::default(),
        );
        assert_eq!(ranked[0].title, "BIM Manager");
        assert_eq!(ranked[1].url, "https://x/b");
        assert_eq!(ranked[2].url, "https://x/c");
    }

    #[test]
    fn test_rank_overwrites_score_hints() {
        let mut hinted = posting("Nothing", "Nowhere", 0);
        hinted.score = 95;
        let ranked = rank(vec![hinted], &[], &Config::default());
        assert_eq!(ranked[0].score, 0);
    }
}
