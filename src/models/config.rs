//! Application configuration structures.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// Root application configuration.
///
/// Loaded from TOML and passed by value into the search engine; there is no
/// process-wide mutable configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// HTTP client behavior
    #[serde(default)]
    pub http: HttpConfig,

    /// Which sources contribute to a search
    #[serde(default)]
    pub sources: SourceToggles,

    /// Posting filters applied after deduplication
    #[serde(default)]
    pub filters: FilterConfig,

    /// Salary tier thresholds used by the ranking scorer
    #[serde(default)]
    pub salary: SalaryConfig,

    /// Ordered location preference list; earlier entries score higher
    #[serde(default = "defaults::preferred_locations")]
    pub preferred_locations: Vec<String>,

    /// Category keyword lists for full multi-category runs
    #[serde(default = "defaults::categories")]
    pub categories: Vec<CategoryConfig>,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration or return default if loading fails.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(&path).unwrap_or_else(|e| {
            log::warn!(
                "Config load failed from {:?}: {}. Using defaults.",
                path.as_ref(),
                e
            );
            Self::default()
        })
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        if self.http.user_agent.trim().is_empty() {
            return Err(AppError::validation("http.user_agent is empty"));
        }
        if self.http.timeout_secs == 0 {
            return Err(AppError::validation("http.timeout_secs must be > 0"));
        }
        if self.filters.max_age_days <= 0 {
            return Err(AppError::validation("filters.max_age_days must be > 0"));
        }
        if self.salary.minimum_usd > self.salary.preferred_usd
            || self.salary.preferred_usd > self.salary.target_usd
        {
            return Err(AppError::validation(
                "salary tiers must satisfy minimum <= preferred <= target",
            ));
        }
        if self.categories.is_empty() {
            return Err(AppError::validation("No categories defined"));
        }
        if self.categories.iter().any(|c| c.keywords.is_empty()) {
            return Err(AppError::validation("Category with no keywords"));
        }
        if self.preferred_locations.is_empty() {
            return Err(AppError::validation("No preferred locations defined"));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            http: HttpConfig::default(),
            sources: SourceToggles::default(),
            filters: FilterConfig::default(),
            salary: SalaryConfig::default(),
            preferred_locations: defaults::preferred_locations(),
            categories: defaults::categories(),
        }
    }
}

/// HTTP client settings shared by all API sources.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// User-Agent header for HTTP requests
    #[serde(default = "defaults::user_agent")]
    pub user_agent: String,

    /// Request timeout in seconds
    #[serde(default = "defaults::timeout")]
    pub timeout_secs: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            user_agent: defaults::user_agent(),
            timeout_secs: defaults::timeout(),
        }
    }
}

/// Per-source enable switches.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceToggles {
    #[serde(default = "defaults::enabled")]
    pub remoteok: bool,

    #[serde(default = "defaults::enabled")]
    pub themuse: bool,

    /// Synthetic search-link generators (LinkedIn, Indeed, specialized boards)
    #[serde(default = "defaults::enabled")]
    pub search_links: bool,
}

impl Default for SourceToggles {
    fn default() -> Self {
        Self {
            remoteok: true,
            themuse: true,
            search_links: true,
        }
    }
}

/// Posting filters applied after deduplication, in declaration order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterConfig {
    /// Drop postings with a known salary below this value. Postings with an
    /// unknown salary (salary_min == 0) always survive.
    #[serde(default = "defaults::min_salary")]
    pub min_salary: u64,

    /// Keep only postings whose location looks remote
    #[serde(default)]
    pub remote_only: bool,

    /// Drop postings whose company looks like a recruiting agency
    #[serde(default = "defaults::enabled")]
    pub exclude_agencies: bool,

    /// Recency window in days for sources that carry a posting timestamp
    #[serde(default = "defaults::max_age_days")]
    pub max_age_days: i64,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            min_salary: defaults::min_salary(),
            remote_only: false,
            exclude_agencies: true,
            max_age_days: defaults::max_age_days(),
        }
    }
}

/// Salary tier thresholds in USD for the ranking scorer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalaryConfig {
    #[serde(default = "defaults::minimum_usd")]
    pub minimum_usd: u64,

    #[serde(default = "defaults::preferred_usd")]
    pub preferred_usd: u64,

    #[serde(default = "defaults::target_usd")]
    pub target_usd: u64,
}

impl Default for SalaryConfig {
    fn default() -> Self {
        Self {
            minimum_usd: defaults::minimum_usd(),
            preferred_usd: defaults::preferred_usd(),
            target_usd: defaults::target_usd(),
        }
    }
}

/// A named category with its search keyword list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryConfig {
    /// Category display name
    pub name: String,

    /// Keywords searched (and used as relevance terms) for this category
    pub keywords: Vec<String>,
}

mod defaults {
    use super::CategoryConfig;

    // HTTP defaults
    pub fn user_agent() -> String {
        "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36".into()
    }
    pub fn timeout() -> u64 {
        10
    }

    pub fn enabled() -> bool {
        true
    }

    // Filter defaults
    pub fn min_salary() -> u64 {
        25000
    }
    pub fn max_age_days() -> i64 {
        7
    }

    // Salary tier defaults (USD, global/remote market)
    pub fn minimum_usd() -> u64 {
        30000
    }
    pub fn preferred_usd() -> u64 {
        55000
    }
    pub fn target_usd() -> u64 {
        85000
    }

    // Ordered by preference; the ranking bonus is 10 minus the index of the
    // first matching entry, so only the first ten entries carry weight.
    pub fn preferred_locations() -> Vec<String> {
        [
            // Remote and global
            "Remote",
            "Work from Home",
            "WFH",
            "Telecommute",
            "Virtual",
            "Distributed",
            // Colombia and LATAM
            "Colombia",
            "Bogotá",
            "Bogota",
            "Medellín",
            "Medellin",
            "Cali",
            "Barranquilla",
            "Mexico",
            "Chile",
            "Argentina",
            "Peru",
            "Ecuador",
            "Costa Rica",
            "Panama",
            "Latin America",
            "LATAM",
            // Main markets
            "United States",
            "USA",
            "Canada",
            "United Kingdom",
            "UK",
            "Europe",
            "EU",
            "Australia",
            "New Zealand",
            "Germany",
            "Netherlands",
            "Spain",
            "Portugal",
            // Emerging tech markets
            "Singapore",
            "Dubai",
            "Israel",
            "Ireland",
            "Switzerland",
            "Denmark",
            "Sweden",
        ]
        .into_iter()
        .map(String::from)
        .collect()
    }

    pub fn categories() -> Vec<CategoryConfig> {
        fn category(name: &str, keywords: &[&str]) -> CategoryConfig {
            CategoryConfig {
                name: name.to_string(),
                keywords: keywords.iter().map(|k| k.to_string()).collect(),
            }
        }

        vec![
            category(
                "BIM Specialist",
                &[
                    "BIM Coordinator",
                    "BIM Manager",
                    "BIM Specialist",
                    "Building Information Modeling",
                    "BIM Modeler",
                    "BIM Engineer",
                    "Digital Construction",
                    "VDC Engineer",
                    "Revit Specialist",
                    "Digital Twin Specialist",
                ],
            ),
            category(
                "CAD/GIS Software",
                &[
                    "Revit",
                    "AutoCAD Civil 3D",
                    "MicroStation",
                    "Tekla",
                    "Navisworks",
                    "ArcGIS",
                    "QGIS",
                    "GIS Analyst",
                    "GIS Developer",
                    "CAD Designer",
                    "Geospatial Analyst",
                ],
            ),
            category(
                "Automation/Development",
                &[
                    "Python Developer",
                    "C# Developer",
                    ".NET Developer",
                    "Dynamo Developer",
                    "Revit API",
                    "Revit Add-in Developer",
                    "Automation Engineer",
                    "Software Engineer",
                    "API Development",
                ],
            ),
            category(
                "Infrastructure/Construction",
                &[
                    "Project Manager",
                    "Construction Manager",
                    "Civil Engineer",
                    "Infrastructure Engineer",
                    "Construction Technology",
                    "Smart Cities",
                    "Digital Twins",
                    "Urban Planning",
                ],
            ),
            category(
                "Data/Visualization",
                &[
                    "Data Analyst",
                    "Data Engineer",
                    "Power BI",
                    "Tableau",
                    "Data Visualization",
                    "SQL Developer",
                    "Spatial Data Analyst",
                    "Remote Sensing",
                ],
            ),
            category(
                "Architecture/Design",
                &[
                    "Architect",
                    "Project Architect",
                    "Architectural Designer",
                    "Landscape Architect",
                    "3D Modeler",
                    "Visualization Specialist",
                    "Architectural Visualization",
                ],
            ),
            category(
                "Management/Consulting",
                &[
                    "Technical Consultant",
                    "BIM Consultant",
                    "Digital Transformation",
                    "Asset Management",
                    "Facility Manager",
                    "Technical Lead",
                    "Solution Architect",
                ],
            ),
            category(
                "Emerging Technologies",
                &[
                    "VR Developer",
                    "AR Developer",
                    "Mixed Reality",
                    "Machine Learning",
                    "Computer Vision",
                    "IoT Engineer",
                    "Building Automation",
                    "Drone Technology",
                ],
            ),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_default_config_ok() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn validate_rejects_empty_user_agent() {
        let mut config = Config::default();
        config.http.user_agent = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_inverted_salary_tiers() {
        let mut config = Config::default();
        config.salary.minimum_usd = 90000;
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_empty_categories() {
        let mut config = Config::default();
        config.categories.clear();
        assert!(config.validate().is_err());
    }

    #[test]
    fn default_preferences_start_with_remote() {
        let config = Config::default();
        assert_eq!(config.preferred_locations[0], "Remote");
        assert!(config.preferred_locations.len() > 10);
    }

    #[test]
    fn config_roundtrips_through_toml() {
        let config = Config::default();
        let toml = toml::to_string(&config).unwrap();
        let parsed: Config = toml::from_str(&toml).unwrap();
        assert_eq!(parsed.salary.target_usd, config.salary.target_usd);
        assert_eq!(parsed.categories.len(), config.categories.len());
    }

    #[test]
    fn load_rejects_malformed_toml_but_load_or_default_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[filters\nremote_only = maybe").unwrap();

        assert!(Config::load(&path).is_err());

        let fallback = Config::load_or_default(&path);
        assert_eq!(fallback.filters.min_salary, Config::default().filters.min_salary);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let parsed: Config = toml::from_str("[filters]\nremote_only = true\n").unwrap();
        assert!(parsed.filters.remote_only);
        assert_eq!(parsed.filters.min_salary, 25000);
        assert!(parsed.sources.remoteok);
    }
}
