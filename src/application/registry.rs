// src/application/registry.rs
use crate::application::{
    error::{ApplicationError, ApplicationResult},
    ports::text::TextOps,
};
use std::{
    collections::HashMap,
    sync::{Arc, OnceLock},
};

/// Name under which text operations are registered and invoked.
pub const TEXT_OPS_INTERFACE: &str = "ITextOps";

/// Map an interface name as written by callers onto its registration key.
pub fn canonical_interface(name: &str) -> Option<&'static str> {
    match name {
        "ITextOps" | "TextOps" => Some(TEXT_OPS_INTERFACE),
        _ => None,
    }
}

/// How long a resolved instance is reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Lifetime {
    /// One instance for the whole registry.
    Singleton,
    /// One instance per [`ServiceScope`].
    #[default]
    Scoped,
    /// A fresh instance on every resolution.
    Transient,
}

impl Lifetime {
    /// Case-insensitive; anything unrecognised falls back to `Scoped`.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "singleton" => Self::Singleton,
            "transient" => Self::Transient,
            _ => Self::Scoped,
        }
    }
}

pub type TextOpsFactory = Arc<dyn Fn() -> Arc<dyn TextOps> + Send + Sync>;

struct Registration {
    lifetime: Lifetime,
    factory: TextOpsFactory,
    singleton: OnceLock<Arc<dyn TextOps>>,
}

impl Registration {
    fn create(&self) -> Arc<dyn TextOps> {
        (self.factory)()
    }
}

#[derive(Default)]
pub struct ServiceRegistry {
    registrations: HashMap<&'static str, Registration>,
}

impl ServiceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the text-ops implementation. A later registration replaces an
    /// earlier one.
    pub fn register_text_ops<F>(&mut self, lifetime: Lifetime, factory: F) -> &mut Self
    where
        F: Fn() -> Arc<dyn TextOps> + Send + Sync + 'static,
    {
        tracing::debug!(
            interface = TEXT_OPS_INTERFACE,
            ?lifetime,
            "registering implementation"
        );
        self.registrations.insert(
            TEXT_OPS_INTERFACE,
            Registration {
                lifetime,
                factory: Arc::new(factory),
                singleton: OnceLock::new(),
            },
        );
        self
    }

    pub fn is_registered(&self, interface: &str) -> bool {
        canonical_interface(interface)
            .map(|key| self.registrations.contains_key(key))
            .unwrap_or(false)
    }

    pub fn lifetime_of(&self, interface: &str) -> Option<Lifetime> {
        let key = canonical_interface(interface)?;
        self.registrations.get(key).map(|r| r.lifetime)
    }

    pub fn create_scope(&self) -> ServiceScope<'_> {
        ServiceScope {
            registry: self,
            scoped: HashMap::new(),
        }
    }
}

/// Resolution context; scoped instances live as long as the scope.
pub struct ServiceScope<'a> {
    registry: &'a ServiceRegistry,
    scoped: HashMap<&'static str, Arc<dyn TextOps>>,
}

impl ServiceScope<'_> {
    pub fn resolve_text_ops(&mut self, interface: &str) -> ApplicationResult<Arc<dyn TextOps>> {
        let registry = self.registry;
        let (key, registration) = canonical_interface(interface)
            .and_then(|key| registry.registrations.get_key_value(key))
            .ok_or_else(|| {
                ApplicationError::not_found(format!("interface '{interface}' not registered"))
            })?;

        let instance = match registration.lifetime {
            Lifetime::Singleton => {
                Arc::clone(registration.singleton.get_or_init(|| registration.create()))
            }
            Lifetime::Scoped => Arc::clone(
                self.scoped
                    .entry(*key)
                    .or_insert_with(|| registration.create()),
            ),
            Lifetime::Transient => registration.create(),
        };
        Ok(instance)
    }
}
