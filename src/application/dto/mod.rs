pub mod operations;
pub mod text;

pub use operations::{OperationCall, OperationOutcome};
pub use text::{SummaryRequest, SummaryResult};
