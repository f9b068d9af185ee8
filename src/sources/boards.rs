// src/sources/boards.rs

//! Job-board search-link generators.
//!
//! These sources query nothing: they are pure functions of the keyword that
//! emit pre-filled search URLs into boards the system does not call
//! programmatically. Each link carries a score hint in [50, 95] reflecting
//! target-market priority; the hint is a display default only and is
//! overwritten when the ranking stage runs.

use async_trait::async_trait;

use crate::error::Result;
use crate::models::{RawRecord, SearchLink};
use crate::utils::encode_query;

use super::JobSource;

/// Generates LinkedIn, Indeed and specialized-board search links.
pub struct SearchLinkSource;

#[async_trait]
impl JobSource for SearchLinkSource {
    fn name(&self) -> &'static str {
        "SearchLinks"
    }

    async fn fetch(&self, keyword: &str) -> Result<Vec<RawRecord>> {
        let mut links = linkedin_links(keyword);
        links.extend(indeed_links(keyword));
        links.extend(specialized_links(keyword));
        Ok(links.into_iter().map(RawRecord::Link).collect())
    }
}

fn link(
    title: String,
    company: &str,
    location: &str,
    description: String,
    url: String,
    source: &str,
    salary_min: u64,
    score: i64,
) -> SearchLink {
    SearchLink {
        title,
        company: company.to_string(),
        location: location.to_string(),
        description,
        url,
        source: source.to_string(),
        salary_min,
        score,
    }
}

/// LinkedIn Jobs searches scoped to postings from the last 72 hours
/// (`f_TPR=r259200`).
pub fn linkedin_links(keyword: &str) -> Vec<SearchLink> {
    let base = "https://www.linkedin.com/jobs/search/";
    let q = encode_query(keyword);
    let mut links = vec![link(
        format!("LinkedIn: {keyword} (Remote - last 72h)"),
        "LinkedIn Jobs",
        "Remote Worldwide",
        format!("LinkedIn search for '{keyword}' - remote-only postings from the last 72 hours."),
        format!("{base}?keywords={q}&location=Worldwide&f_WT=2&f_TPR=r259200"),
        "LinkedIn (Remote)",
        0,
        90,
    )];

    let locations = ["United States", "Canada", "United Kingdom"];
    for location in locations.iter().take(2) {
        links.push(link(
            format!("LinkedIn: {keyword} ({location} - last 72h)"),
            "LinkedIn Jobs",
            location,
            format!("LinkedIn search for '{keyword}' in {location} - last 72 hours."),
            format!(
                "{base}?keywords={q}&location={}&f_TPR=r259200",
                encode_query(location)
            ),
            "LinkedIn",
            0,
            85,
        ));
    }

    links
}

/// Indeed searches scoped to postings from the last 3 days (`fromage=3`).
pub fn indeed_links(keyword: &str) -> Vec<SearchLink> {
    let base = "https://www.indeed.com/jobs";
    let q = encode_query(keyword);
    vec![
        link(
            format!("Indeed: {keyword} (Remote - last 3 days)"),
            "Indeed Jobs",
            "Remote",
            format!("Indeed search for '{keyword}' - remote postings from the last 3 days."),
            format!("{base}?q={q}&l=Remote&fromage=3&sort=date"),
            "Indeed (Remote)",
            0,
            85,
        ),
        link(
            format!("Indeed: {keyword} ($50K+ - last 3 days)"),
            "Indeed Jobs",
            "Any",
            format!("Indeed search for '{keyword}' - minimum salary $50,000, last 3 days."),
            format!("{base}?q={q}&l=&fromage=3&sort=date&salary=%2450%2C000"),
            "Indeed (Salary)",
            50000,
            80,
        ),
    ]
}

/// Specialized-board searches keyed off the keyword's domain.
///
/// Colombia-focused boards carry the highest hints; generic global boards
/// the lowest.
pub fn specialized_links(keyword: &str) -> Vec<SearchLink> {
    let keyword_lower = keyword.to_lowercase();
    let q = encode_query(keyword);
    let contains_any =
        |terms: &[&str]| terms.iter().any(|term| keyword_lower.contains(term));

    let mut links = vec![link(
        format!("We Work Remotely: {keyword}"),
        "We Work Remotely",
        "Remote Global",
        format!("Largest remote job board, searched for '{keyword}'."),
        format!("https://weworkremotely.com/remote-jobs/search?term={q}"),
        "WeWorkRemotely",
        0,
        55,
    )];

    // BIM/CAD/engineering keywords
    if contains_any(&[
        "bim",
        "revit",
        "autocad",
        "civil",
        "tekla",
        "navisworks",
        "engineer",
        "cad",
    ]) {
        links.extend([
            link(
                format!("Indeed Colombia: {keyword} (last 3 days)"),
                "Indeed Colombia",
                "Colombia",
                format!("Jobs in Colombia for '{keyword}' - last 3 days."),
                format!("https://co.indeed.com/jobs?q={q}&l=Colombia&fromage=3&sort=date"),
                "Indeed Colombia",
                0,
                85,
            ),
            link(
                format!("LinkedIn Colombia: {keyword} (last 72h)"),
                "LinkedIn Colombia",
                "Colombia",
                format!("Professional network in Colombia for '{keyword}' - last 72 hours."),
                format!(
                    "https://www.linkedin.com/jobs/search/?keywords={q}&location=Colombia&f_TPR=r259200"
                ),
                "LinkedIn Colombia",
                0,
                90,
            ),
            link(
                format!("ElEmpleo Colombia: {keyword} (recent)"),
                "ElEmpleo Colombia",
                "Colombia",
                format!("Leading Colombian job board for '{keyword}' - recent openings."),
                format!("https://www.elempleo.com/co/ofertas-empleo?q={q}&l=Colombia"),
                "ElEmpleo Colombia",
                0,
                95,
            ),
        ]);
    }

    // Tech/software keywords
    if contains_any(&[
        "software",
        "developer",
        "engineer",
        "python",
        "javascript",
        "tech",
        "programming",
        "c#",
        "dynamo",
    ]) {
        links.extend([
            link(
                format!("AngelList: {keyword}"),
                "AngelList (Startups)",
                "Global",
                format!("Startup jobs for '{keyword}'."),
                format!(
                    "https://angel.co/jobs#find/f!%7B%22keywords%22%3A%5B%22{q}%22%5D%7D"
                ),
                "AngelList",
                0,
                60,
            ),
            link(
                format!("Stack Overflow Jobs: {keyword}"),
                "Stack Overflow",
                "Global",
                format!("Technical jobs for '{keyword}'."),
                format!("https://stackoverflow.com/jobs?q={q}&r=true"),
                "StackOverflow",
                0,
                65,
            ),
        ]);
    }

    // GIS/data keywords
    if contains_any(&["gis", "arcgis", "qgis", "data", "analyst", "power bi", "spatial"]) {
        links.push(link(
            format!("GIS Jobs: {keyword}"),
            "GIS Jobs Clearinghouse",
            "Global",
            format!("GIS-specialized jobs for '{keyword}'."),
            format!("https://www.gjc.org/jobs/search?query={q}"),
            "GIS Jobs",
            0,
            70,
        ));
    }

    // Colombia general boards, always included
    links.extend([
        link(
            format!("ElEmpleo.com: {keyword}"),
            "ElEmpleo Colombia",
            "Colombia",
            format!("Leading Colombian job board for '{keyword}'."),
            format!("https://www.elempleo.com/co/ofertas-empleo?q={q}&l=Colombia"),
            "ElEmpleo Colombia",
            0,
            80,
        ),
        link(
            format!("Computrabajo Colombia: {keyword}"),
            "Computrabajo",
            "Colombia",
            format!("Jobs in Colombia and LATAM for '{keyword}'."),
            format!("https://www.computrabajo.com.co/trabajo-de-{q}-en-colombia"),
            "Computrabajo",
            0,
            75,
        ),
    ]);

    links
}
