// src/domain/text/mod.rs
pub mod services;
pub mod value_objects;

pub use services::{ELLIPSIS, slugify, summarize, summarize_with_limit};
pub use value_objects::{DEFAULT_SUMMARY_LIMIT, Slug, Summary, SummaryLimit, TextOpsEnv};
