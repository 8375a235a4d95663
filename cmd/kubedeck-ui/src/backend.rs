//! Server-side state shared by the server functions.

use crate::config::UiConfig;
use anyhow::{Context, bail};
use dioxus::prelude::ServerFnError;
use pkg_client::ApiClient;
use std::sync::OnceLock;
use tracing::info;

struct Backend {
    client: ApiClient,
    namespace: String,
}

static BACKEND: OnceLock<Backend> = OnceLock::new();

/// Build the cluster API client. Called once from `main` before launch.
pub fn install(cfg: UiConfig) -> anyhow::Result<()> {
    let client = ApiClient::new(&cfg.server, &cfg.token)
        .with_context(|| format!("Failed to create API client for {}", cfg.server))?;
    info!("Cluster API client ready: {:?}", client);
    if BACKEND
        .set(Backend {
            client,
            namespace: cfg.namespace,
        })
        .is_err()
    {
        bail!("backend is already installed");
    }
    Ok(())
}

fn backend() -> Result<&'static Backend, ServerFnError> {
    BACKEND
        .get()
        .ok_or_else(|| ServerFnError::new("cluster API client is not configured"))
}

pub fn client() -> Result<&'static ApiClient, ServerFnError> {
    backend().map(|b| &b.client)
}

pub fn default_namespace() -> Result<String, ServerFnError> {
    backend().map(|b| b.namespace.clone())
}
