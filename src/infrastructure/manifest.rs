// src/infrastructure/manifest.rs
//! JSON manifest that decides which implementation backs each interface and
//! with which lifetime.
//!
//! ```json
//! [
//!   { "interface": "ITextOps", "impl": "native", "lifetime": "singleton",
//!     "ctorArgs": { "passEnv": true } }
//! ]
//! ```
//!
//! PascalCase keys (`Interface`, `Impl`, `CtorArgs.PassEnv`, ...) are accepted
//! as well.
use crate::{
    application::registry::{Lifetime, ServiceRegistry, canonical_interface},
    domain::text::TextOpsEnv,
    infrastructure::text_ops::NativeTextOps,
};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
    sync::Arc,
};
use thiserror::Error;

fn default_lifetime() -> String {
    "Scoped".into()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManifestEntry {
    #[serde(alias = "Interface", default)]
    pub interface: String,
    #[serde(rename = "impl", alias = "Impl", default)]
    pub implementation: String,
    #[serde(alias = "Module", default)]
    pub module: String,
    #[serde(alias = "Class", default)]
    pub class: String,
    #[serde(alias = "Lifetime", default = "default_lifetime")]
    pub lifetime: String,
    #[serde(alias = "CtorArgs", default)]
    pub ctor_args: Option<CtorArgs>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CtorArgs {
    #[serde(alias = "PassEnv", default)]
    pub pass_env: bool,
}

impl ManifestEntry {
    pub fn lifetime(&self) -> Lifetime {
        Lifetime::parse(&self.lifetime)
    }

    pub fn passes_env(&self) -> bool {
        self.ctor_args.as_ref().is_some_and(|args| args.pass_env)
    }
}

#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("failed to read manifest {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse manifest {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("unsupported implementation '{implementation}' for {interface} ({module}.{class})")]
    UnsupportedImplementation {
        interface: String,
        implementation: String,
        module: String,
        class: String,
    },
}

pub fn load_manifest(path: &Path) -> Result<Vec<ManifestEntry>, ManifestError> {
    let raw = fs::read_to_string(path).map_err(|source| ManifestError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| ManifestError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Register every entry in order; later entries for the same interface win.
///
/// Entries naming an unknown interface are skipped with a warning. Returns the
/// number of registrations made.
pub fn register_manifest(
    registry: &mut ServiceRegistry,
    entries: &[ManifestEntry],
    env: &TextOpsEnv,
) -> Result<usize, ManifestError> {
    let mut registered = 0;

    for entry in entries {
        if canonical_interface(&entry.interface).is_none() {
            tracing::warn!(
                interface = %entry.interface,
                "skipping manifest entry for unknown interface"
            );
            continue;
        }

        if entry.implementation.eq_ignore_ascii_case("python") {
            return Err(ManifestError::UnsupportedImplementation {
                interface: entry.interface.clone(),
                implementation: entry.implementation.clone(),
                module: entry.module.clone(),
                class: entry.class.clone(),
            });
        }

        let env = entry.passes_env().then(|| env.clone());
        registry.register_text_ops(entry.lifetime(), move || {
            Arc::new(NativeTextOps::new(env.clone()))
        });
        registered += 1;
    }

    Ok(registered)
}

/// Registry with the native implementation as a scoped fallback, overridden
/// by the manifest at `manifest_path` when that file exists.
pub fn build_registry(
    manifest_path: Option<&Path>,
    env: &TextOpsEnv,
) -> Result<ServiceRegistry, ManifestError> {
    let mut registry = ServiceRegistry::new();
    registry.register_text_ops(Lifetime::Scoped, || Arc::new(NativeTextOps::default()));

    match manifest_path {
        Some(path) if path.exists() => {
            let entries = load_manifest(path)?;
            let count = register_manifest(&mut registry, &entries, env)?;
            tracing::info!(path = %path.display(), registrations = count, "manifest loaded");
        }
        Some(path) => {
            tracing::warn!(path = %path.display(), "manifest file not found, using defaults");
        }
        None => {}
    }

    Ok(registry)
}
