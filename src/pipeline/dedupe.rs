// src/pipeline/dedupe.rs

//! Posting deduplication.

use std::collections::HashSet;

use crate::models::JobPosting;

/// Remove duplicate postings in a single pass, preserving first-seen order.
///
/// A posting is identified by two keys: its URL and the
/// `"{title}-{company}"` string. If either key was already seen the posting
/// is dropped; otherwise both keys are recorded and the posting kept. This
/// is deliberately coarser than exact-duplicate detection: two distinct
/// postings sharing a URL collide.
pub fn dedupe(postings: Vec<JobPosting>) -> Vec<JobPosting> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut unique = Vec::with_capacity(postings.len());

    for posting in postings {
        let (url, title_company) = posting.dedup_keys();
        if seen.contains(&url) || seen.contains(&title_company) {
            continue;
        }
        seen.insert(url);
        seen.insert(title_company);
        unique.push(posting);
    }

    unique
}
