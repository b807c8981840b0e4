// src/presentation/http/controllers/mod.rs
pub mod operations;
pub mod text;
