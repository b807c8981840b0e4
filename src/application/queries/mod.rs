// src/application/queries/mod.rs
pub mod text;

pub use text::{SlugifyQuery, SummarizeQuery, TextQueryService};
