// src/pipeline/mod.rs

//! Aggregation and ranking pipeline.
//!
//! Data flows linearly: sources -> normalize -> dedupe -> filter -> rank.
//! Each stage is a pure function over the posting list; orchestration lives
//! in [`search`].

mod dedupe;
mod filter;
mod normalize;
mod rank;
mod search;

pub use dedupe::dedupe;
pub use filter::apply_filters;
pub use normalize::normalize;
pub use rank::rank;
pub use search::{CancelToken, SearchEngine};
