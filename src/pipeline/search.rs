// src/pipeline/search.rs

//! Search orchestration.
//!
//! For a full run: every configured category, every keyword in that
//! category, every enabled source; per category the combined results go
//! through dedupe -> filter -> rank with the category's full keyword list
//! as relevance terms. Categories are independent and their outputs are
//! concatenated without cross-category deduplication.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::error::Result;
use crate::models::{CategoryConfig, Config, JobPosting};
use crate::sources::{JobSource, enabled_sources};
use crate::utils::http::create_client;

use super::{apply_filters, dedupe, normalize, rank};

/// Cooperative cancellation signal passed down the search call chain.
///
/// The flag is checked between keyword iterations and between sources; an
/// in-flight fetch completes (or hits its own timeout) before cancellation
/// is observed.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation of the search using this token.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Outcome of fetching one keyword across all sources.
#[derive(Debug, Default)]
struct FetchOutcome {
    postings: Vec<JobPosting>,
    source_failures: usize,
}

/// Aggregation engine owning the configuration and the enabled sources.
pub struct SearchEngine {
    config: Config,
    sources: Vec<Box<dyn JobSource>>,
}

impl SearchEngine {
    /// Build an engine from the configuration, creating the shared HTTP
    /// client and the enabled source list.
    pub fn new(config: Config) -> Result<Self> {
        let client = create_client(&config.http)?;
        let sources = enabled_sources(&config, &client);
        Ok(Self { config, sources })
    }

    /// Build an engine over an explicit source list.
    pub fn with_sources(config: Config, sources: Vec<Box<dyn JobSource>>) -> Self {
        Self { config, sources }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Fetch and normalize postings for one keyword across all sources.
    ///
    /// A failing source is logged and contributes nothing; the search
    /// continues with the remaining sources.
    async fn fetch_keyword(&self, keyword: &str, cancel: &CancelToken) -> FetchOutcome {
        let mut outcome = FetchOutcome::default();

        for source in &self.sources {
            if cancel.is_cancelled() {
                log::debug!("Search cancelled before source {}", source.name());
                break;
            }

            match source.fetch(keyword).await {
                Ok(records) => {
                    log::debug!(
                        "{}: {} records for '{}'",
                        source.name(),
                        records.len(),
                        keyword
                    );
                    outcome
                        .postings
                        .extend(records.into_iter().map(normalize));
                }
                Err(error) => {
                    outcome.source_failures += 1;
                    log::warn!("{} failed for '{}': {}", source.name(), keyword, error);
                }
            }
        }

        outcome
    }

    /// Single-keyword run: fetch, then dedupe -> filter -> rank with the
    /// keyword as the only relevance term.
    pub async fn search_keyword(&self, keyword: &str, cancel: &CancelToken) -> Vec<JobPosting> {
        log::info!("Searching for '{}'", keyword);
        let outcome = self.fetch_keyword(keyword, cancel).await;
        let terms = vec![keyword.to_string()];
        self.process(outcome, &terms)
    }

    /// Run one category: every keyword fetched, results concatenated, then
    /// one dedupe/filter/rank pass with the full keyword list as terms.
    pub async fn search_category(
        &self,
        category: &CategoryConfig,
        cancel: &CancelToken,
    ) -> Vec<JobPosting> {
        log::info!("Category '{}': {} keywords", category.name, category.keywords.len());

        let mut combined = FetchOutcome::default();
        for keyword in &category.keywords {
            if cancel.is_cancelled() {
                log::info!("Search cancelled during category '{}'", category.name);
                break;
            }
            let outcome = self.fetch_keyword(keyword, cancel).await;
            combined.postings.extend(outcome.postings);
            combined.source_failures += outcome.source_failures;
        }

        let ranked = self.process(combined, &category.keywords);
        log::info!("Category '{}': {} unique postings", category.name, ranked.len());
        ranked
    }

    /// Full multi-category run. Category outputs are concatenated in
    /// configuration order.
    pub async fn search_all(&self, cancel: &CancelToken) -> Vec<JobPosting> {
        let categories = self.config.categories.clone();
        let mut all = Vec::new();

        for category in &categories {
            if cancel.is_cancelled() {
                break;
            }
            all.extend(self.search_category(category, cancel).await);
        }

        all
    }

    fn process(&self, outcome: FetchOutcome, terms: &[String]) -> Vec<JobPosting> {
        let fetched = outcome.postings.len();
        let unique = dedupe(outcome.postings);
        let filtered = apply_filters(unique, &self.config.filters);
        let ranked = rank(filtered, terms, &self.config);

        log::debug!(
            "{} fetched, {} after filters, {} source failures",
            fetched,
            ranked.len(),
            outcome.source_failures
        );
        ranked
    }
}
