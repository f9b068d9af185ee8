// src/export/html.rs

//! Static HTML report.

use chrono::Utc;

use crate::models::JobPosting;

use super::{ExportOptions, escape_xml as escape};

const STYLE: &str = "\
        body { font-family: Arial, sans-serif; margin: 20px; }\n\
        .header { background: #2c3e50; color: white; padding: 20px; border-radius: 5px; }\n\
        .job { border: 1px solid #ddd; margin: 10px 0; padding: 15px; border-radius: 5px; }\n\
        .job-title { font-size: 18px; font-weight: bold; color: #2c3e50; }\n\
        .salary { color: #27ae60; font-weight: bold; }\n\
        .company { color: #34495e; }\n\
        .meta { color: #7f8c8d; font-size: 12px; }\n";

/// Render the posting list as a standalone HTML page.
pub fn render(postings: &[&JobPosting], options: &ExportOptions) -> String {
    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html>\n<head>\n");
    html.push_str("    <title>Job Search Results</title>\n");
    html.push_str("    <meta charset=\"utf-8\">\n");
    html.push_str("    <style>\n");
    html.push_str(STYLE);
    html.push_str("    </style>\n</head>\n<body>\n");

    html.push_str("    <div class=\"header\">\n");
    html.push_str("        <h1>Job Search Results</h1>\n");
    html.push_str(&format!(
        "        <p>Exported: {}</p>\n",
        Utc::now().format("%Y-%m-%d %H:%M:%S")
    ));
    html.push_str(&format!(
        "        <p>Total jobs: {}</p>\n",
        postings.len()
    ));
    html.push_str("    </div>\n");

    for (i, posting) in postings.iter().enumerate() {
        html.push_str("    <div class=\"job\">\n");
        html.push_str(&format!(
            "        <div class=\"job-title\">{}. {}</div>\n",
            i + 1,
            escape(&posting.title)
        ));
        html.push_str(&format!(
            "        <div class=\"company\">{}</div>\n",
            escape(&posting.company)
        ));
        html.push_str(&format!(
            "        <div>{}</div>\n",
            escape(&posting.location)
        ));
        if let Some(salary) = posting.salary_display() {
            html.push_str(&format!(
                "        <div><span class=\"salary\">{}</span></div>\n",
                escape(&salary)
            ));
        }
        html.push_str(&format!(
            "        <div class=\"meta\">Source: {} | Score: {} | <a href=\"{}\" target=\"_blank\">View job</a></div>\n",
            escape(&posting.source),
            posting.score,
            escape(&posting.url)
        ));
        if options.include_description && !posting.description.is_empty() {
            html.push_str(&format!(
                "        <div style=\"margin-top: 10px; font-size: 14px;\">{}</div>\n",
                escape(&posting.description)
            ));
        }
        html.push_str("    </div>\n");
    }

    html.push_str("</body>\n</html>\n");
    html
}

#[cfg(test)]
mod tests {
    use super::*;

    fn posting() -> JobPosting {
        JobPosting {
            title: "BIM <Lead>".to_string(),
            company: "Acme".to_string(),
            location: "Remote".to_string(),
            salary_min: 60000,
            salary_max: 80000,
            url: "https://x/1".to_string(),
            description: "desc".to_string(),
            source: "RemoteOK".to_string(),
            score: 55,
        }
    }

    #[test]
    fn test_render_escapes_and_numbers() {
        let p = posting();
        let html = render(&[&p], &ExportOptions::default());
        assert!(html.contains("1. BIM &lt;Lead&gt;"));
        assert!(html.contains("$60000-$80000"));
        assert!(html.contains("Score: 55"));
        assert!(html.contains("href=\"https://x/1\""));
    }

    #[test]
    fn test_description_toggle() {
        let p = posting();
        let without = render(
            &[&p],
            &ExportOptions {
                include_description: false,
                ..ExportOptions::default()
            },
        );
        assert!(!without.contains("desc</div>"));
    }
}
