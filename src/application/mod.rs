pub mod dto;
pub mod error;
pub mod executor;
pub mod ports;
pub mod queries;
pub mod registry;
pub mod services;

pub use error::ApplicationResult;
