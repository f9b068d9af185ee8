// src/sources/mod.rs

//! Posting sources.
//!
//! A source is anything that turns a search keyword into raw records:
//! either a queried public API (RemoteOK, The Muse) or a generator of
//! pre-filled job-board search links that require no network access.

mod boards;
mod remoteok;
mod themuse;

pub use boards::{SearchLinkSource, indeed_links, linkedin_links, specialized_links};
pub use remoteok::RemoteOkSource;
pub use themuse::TheMuseSource;

use async_trait::async_trait;

use crate::error::Result;
use crate::models::{Config, RawRecord};

/// A polymorphic source of postings for one search keyword.
///
/// Errors are absorbed by the engine at the call boundary: a failing source
/// contributes nothing to the search, it never aborts it.
#[async_trait]
pub trait JobSource: Send + Sync {
    /// Provider name used in logs.
    fn name(&self) -> &'static str;

    /// Produce zero or more raw records for the keyword.
    async fn fetch(&self, keyword: &str) -> Result<Vec<RawRecord>>;
}

/// Build the source list enabled by the configuration.
pub fn enabled_sources(config: &Config, client: &reqwest::Client) -> Vec<Box<dyn JobSource>> {
    let mut sources: Vec<Box<dyn JobSource>> = Vec::new();

    if config.sources.remoteok {
        sources.push(Box::new(RemoteOkSource::new(
            client.clone(),
            config.filters.max_age_days,
        )));
    }
    if config.sources.themuse {
        sources.push(Box::new(TheMuseSource::new(client.clone())));
    }
    if config.sources.search_links {
        sources.push(Box::new(SearchLinkSource));
    }

    sources
}
