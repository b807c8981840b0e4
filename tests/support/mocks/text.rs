// tests/support/mocks/text.rs
use async_trait::async_trait;
use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};
use textops_core::application::{
    ports::text::TextOps,
    registry::{Lifetime, ServiceRegistry},
};
use textops_core::infrastructure::text_ops::NativeTextOps;

/// Returns its input untouched, to tell it apart from the native implementation.
#[derive(Clone, Default)]
pub struct EchoTextOps;

#[async_trait]
impl TextOps for EchoTextOps {
    fn slugify(&self, input: &str) -> String {
        input.to_string()
    }

    async fn summarize(&self, text: &str) -> String {
        text.to_string()
    }
}

/// Native behaviour plus a shared counter of constructed instances.
pub struct CountingTextOps {
    inner: NativeTextOps,
}

impl CountingTextOps {
    pub fn new(created: &AtomicUsize) -> Self {
        created.fetch_add(1, Ordering::SeqCst);
        Self {
            inner: NativeTextOps::default(),
        }
    }
}

#[async_trait]
impl TextOps for CountingTextOps {
    fn slugify(&self, input: &str) -> String {
        self.inner.slugify(input)
    }

    async fn summarize(&self, text: &str) -> String {
        self.inner.summarize(text).await
    }
}

/// A registry whose text-ops factory bumps the returned counter per instance.
pub fn counting_registry(lifetime: Lifetime) -> (ServiceRegistry, Arc<AtomicUsize>) {
    let created = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&created);
    let mut registry = ServiceRegistry::new();
    registry.register_text_ops(lifetime, move || Arc::new(CountingTextOps::new(&counter)));
    (registry, created)
}
