// src/infrastructure/mod.rs
pub mod manifest;
pub mod text_ops;
pub mod time;
