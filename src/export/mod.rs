// src/export/mod.rs

//! Result export.
//!
//! Serializes a ranked posting list as-is into the supported report
//! formats; no pipeline logic lives here.

mod html;
mod text;

use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::str::FromStr;

use chrono::Utc;
use serde::Serialize;

use crate::error::{AppError, Result};
use crate::models::JobPosting;

/// Supported export formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Csv,
    Xml,
    Html,
    Text,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Csv => "csv",
            Self::Xml => "xml",
            Self::Html => "html",
            Self::Text => "txt",
        }
    }
}

impl FromStr for ExportFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            "xml" => Ok(Self::Xml),
            "html" => Ok(Self::Html),
            "txt" | "text" => Ok(Self::Text),
            other => Err(AppError::export(format!("Unknown export format: {other}"))),
        }
    }
}

/// Export options shared by all formats.
#[derive(Debug, Clone)]
pub struct ExportOptions {
    /// Include description text in CSV/XML/HTML/text output
    pub include_description: bool,

    /// Export only postings with a known salary (salary_min > 0)
    pub salary_only: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            include_description: true,
            salary_only: false,
        }
    }
}

#[derive(Serialize)]
struct JsonEnvelope<'a> {
    exported_at: String,
    total_jobs: usize,
    jobs: &'a [JobPosting],
}

/// Write a report for the posting list to `path` in the given format.
pub fn write_report(
    path: impl AsRef<Path>,
    postings: &[JobPosting],
    format: ExportFormat,
    options: &ExportOptions,
) -> Result<()> {
    let selected: Vec<&JobPosting> = postings
        .iter()
        .filter(|p| !options.salary_only || p.salary_min > 0)
        .collect();

    let content = render(&selected, format, options)?;
    let mut file = File::create(path)?;
    file.write_all(content.as_bytes())?;
    Ok(())
}

/// Render the report as a string (used by `write_report` and previews).
pub fn render(
    postings: &[&JobPosting],
    format: ExportFormat,
    options: &ExportOptions,
) -> Result<String> {
    match format {
        ExportFormat::Json => render_json(postings),
        ExportFormat::Csv => render_csv(postings, options),
        ExportFormat::Xml => Ok(render_xml(postings, options)),
        ExportFormat::Html => Ok(html::render(postings, options)),
        ExportFormat::Text => Ok(text::render(postings, options)),
    }
}

fn render_json(postings: &[&JobPosting]) -> Result<String> {
    let owned: Vec<JobPosting> = postings.iter().map(|p| (*p).clone()).collect();
    let envelope = JsonEnvelope {
        exported_at: Utc::now().to_rfc3339(),
        total_jobs: owned.len(),
        jobs: &owned,
    };
    Ok(serde_json::to_string_pretty(&envelope)?)
}

fn render_csv(postings: &[&JobPosting], options: &ExportOptions) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    let mut header = vec![
        "title",
        "company",
        "location",
        "salary_min",
        "salary_max",
        "source",
        "url",
        "score",
    ];
    if options.include_description {
        header.push("description");
    }
    writer.write_record(&header)?;

    for posting in postings {
        let mut row = vec![
            posting.title.clone(),
            posting.company.clone(),
            posting.location.clone(),
            posting.salary_min.to_string(),
            posting.salary_max.to_string(),
            posting.source.clone(),
            posting.url.clone(),
            posting.score.to_string(),
        ];
        if options.include_description {
            row.push(posting.description.clone());
        }
        writer.write_record(&row)?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| AppError::export(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| AppError::export(e.to_string()))
}

fn render_xml(postings: &[&JobPosting], options: &ExportOptions) -> String {
    let mut xml = String::from("<?xml version=\"1.0\" encoding=\"utf-8\"?>\n");
    xml.push_str("<job_search_results>\n");
    push_element(&mut xml, 1, "exported_at", &Utc::now().to_rfc3339());
    push_element(&mut xml, 1, "total_jobs", &postings.len().to_string());
    xml.push_str("  <jobs>\n");

    for posting in postings {
        xml.push_str("    <job>\n");
        push_element(&mut xml, 3, "title", &posting.title);
        push_element(&mut xml, 3, "company", &posting.company);
        push_element(&mut xml, 3, "location", &posting.location);
        push_element(&mut xml, 3, "salary_min", &posting.salary_min.to_string());
        push_element(&mut xml, 3, "salary_max", &posting.salary_max.to_string());
        push_element(&mut xml, 3, "url", &posting.url);
        if options.include_description {
            push_element(&mut xml, 3, "description", &posting.description);
        }
        push_element(&mut xml, 3, "source", &posting.source);
        push_element(&mut xml, 3, "score", &posting.score.to_string());
        xml.push_str("    </job>\n");
    }

    xml.push_str("  </jobs>\n");
    xml.push_str("</job_search_results>\n");
    xml
}

fn push_element(xml: &mut String, indent: usize, tag: &str, value: &str) {
    for _ in 0..indent {
        xml.push_str("  ");
    }
    xml.push('<');
    xml.push_str(tag);
    xml.push('>');
    xml.push_str(&escape_xml(value));
    xml.push_str("</");
    xml.push_str(tag);
    xml.push_str(">\n");
}

pub(crate) fn escape_xml(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
