// src/export/text.rs

//! Plain-text report.

use chrono::Utc;

use crate::models::JobPosting;

use super::ExportOptions;

/// Render the posting list as a plain-text report.
pub fn render(postings: &[&JobPosting], options: &ExportOptions) -> String {
    let mut out = String::new();
    out.push_str("JOB SEARCH RESULTS\n");
    out.push_str(&format!(
        "Exported: {}\n",
        Utc::now().format("%Y-%m-%d %H:%M:%S")
    ));
    out.push_str(&format!("Total jobs: {}\n", postings.len()));
    out.push_str(&"=".repeat(60));
    out.push_str("\n\n");

    for (i, posting) in postings.iter().enumerate() {
        out.push_str(&format!("{}. {}\n", i + 1, posting.title));
        out.push_str(&format!("   Company: {}\n", posting.company));
        out.push_str(&format!("   Location: {}\n", posting.location));
        if let Some(salary) = posting.salary_display() {
            out.push_str(&format!("   Salary: {salary}\n"));
        }
        out.push_str(&format!("   Source: {}\n", posting.source));
        out.push_str(&format!("   Score: {}\n", posting.score));
        out.push_str(&format!("   URL: {}\n", posting.url));
        if options.include_description && !posting.description.is_empty() {
            out.push_str(&format!("   Description: {}\n", posting.description));
        }
        out.push('\n');
        out.push_str(&"-".repeat(50));
        out.push_str("\n\n");
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_layout() {
        let posting = JobPosting {
            title: "BIM Manager".to_string(),
            company: "Acme".to_string(),
            location: "Remote".to_string(),
            salary_min: 0,
            salary_max: 0,
            url: "https://x/1".to_string(),
            description: "desc".to_string(),
            source: "RemoteOK".to_string(),
            score: 15,
        };
        let out = render(&[&posting], &ExportOptions::default());
        assert!(out.contains("1. BIM Manager"));
        assert!(out.contains("Company: Acme"));
        assert!(out.contains("Description: desc"));
        // Unknown salary is omitted entirely.
        assert!(!out.contains("Salary:"));
    }
}
