// src/application/ports/mod.rs
pub mod text;
pub mod time;
