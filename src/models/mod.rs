// src/models/mod.rs

//! Domain models for the job search application.
//!
//! This module contains all data structures used throughout the application,
//! organized by their primary purpose.

mod config;
mod posting;
mod raw;

// Re-export all public types
pub use config::{
    CategoryConfig, Config, FilterConfig, HttpConfig, SalaryConfig, SourceToggles,
};
pub use posting::JobPosting;
pub use raw::{MuseCompany, MuseJob, MuseLocation, MuseRefs, RawRecord, RemoteOkJob, SearchLink};
