// src/config.rs
use crate::domain::text::TextOpsEnv;
use std::{env, net::SocketAddr, path::PathBuf};
use thiserror::Error;

#[derive(Clone, Debug)]
pub struct AppConfig {
    listen_addr: String,
    manifest_path: Option<PathBuf>,
    tenant_id: String,
    allowed_origins: Vec<String>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing environment variable: {0}")]
    Missing(&'static str),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_listen_addr() -> String {
    "127.0.0.1:8080".into()
}

fn default_tenant_id() -> String {
    "api".into()
}

fn default_allowed_origins() -> Vec<String> {
    vec!["http://localhost:3000".into()]
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect()
}

impl AppConfig {
    /// Build configuration from environment variables. Every key is optional;
    /// only malformed values are rejected.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let listen_addr = env::var("LISTEN_ADDR").unwrap_or_else(|_| default_listen_addr());
        let manifest_path = env::var("OPS_MANIFEST_PATH")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);
        let tenant_id = env::var("TEXTOPS_TENANT_ID").unwrap_or_else(|_| default_tenant_id());
        let allowed_origins = env::var("ALLOWED_ORIGINS")
            .ok()
            .map(|s| parse_origins(&s))
            .unwrap_or_else(default_allowed_origins);

        Self::new(listen_addr, manifest_path, tenant_id, allowed_origins)
    }

    pub fn new(
        listen_addr: impl Into<String>,
        manifest_path: Option<PathBuf>,
        tenant_id: impl Into<String>,
        allowed_origins: Vec<String>,
    ) -> Result<Self, ConfigError> {
        let listen_addr = listen_addr.into();
        if listen_addr.parse::<SocketAddr>().is_err() {
            return Err(ConfigError::Invalid(format!(
                "LISTEN_ADDR must be host:port, got '{listen_addr}'"
            )));
        }

        let tenant_id = tenant_id.into();
        if tenant_id.trim().is_empty() {
            return Err(ConfigError::Missing("TEXTOPS_TENANT_ID"));
        }

        Ok(Self {
            listen_addr,
            manifest_path,
            tenant_id,
            allowed_origins,
        })
    }

    pub fn listen_addr(&self) -> &str {
        &self.listen_addr
    }

    /// Manifest that drives implementation registration, if configured.
    pub fn manifest_path(&self) -> Option<&PathBuf> {
        self.manifest_path.as_ref()
    }

    /// Context handed to implementations whose manifest entry asks for it.
    pub fn text_ops_env(&self) -> TextOpsEnv {
        TextOpsEnv::new(self.tenant_id.clone())
    }

    pub fn allowed_origins(&self) -> &[String] {
        &self.allowed_origins
    }
}
