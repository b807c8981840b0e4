// src/application/services/mod.rs
use std::sync::Arc;

use crate::application::{
    executor::OperationExecutor, ports::time::Clock, queries::TextQueryService,
    registry::ServiceRegistry,
};

pub struct ApplicationServices {
    pub text_queries: Arc<TextQueryService>,
    pub operations: Arc<OperationExecutor>,
}

impl ApplicationServices {
    pub fn new(registry: Arc<ServiceRegistry>, clock: Arc<dyn Clock>) -> Self {
        let text_queries = Arc::new(TextQueryService::new(
            Arc::clone(&registry),
            Arc::clone(&clock),
        ));
        let operations = Arc::new(OperationExecutor::new(registry));

        Self {
            text_queries,
            operations,
        }
    }
}
