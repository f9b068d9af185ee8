// src/lib.rs

//! jobscout library

pub mod error;
pub mod export;
pub mod models;
pub mod pipeline;
pub mod sources;
pub mod utils;
