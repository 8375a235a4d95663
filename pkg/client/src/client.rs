use anyhow::{Context, bail};
use pkg_constants::network::API_TIMEOUT_SECS;
use pkg_types::namespace::NamespaceEntry;
use pkg_types::pod::Pod;
use pkg_types::secret::{NewSecret, SecretRow};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, warn};

/// Path of the secret list for `ns`. An empty namespace lists secrets of
/// every namespace.
pub fn secrets_path(ns: &str) -> String {
    if ns.is_empty() {
        "/api/v1/secrets".to_string()
    } else {
        format!("/api/v1/namespaces/{}/secrets", ns)
    }
}

pub fn pods_path(ns: &str) -> String {
    format!("/api/v1/namespaces/{}/pods", ns)
}

/// Thin wrapper around `reqwest::Client` that knows the cluster API address
/// and bearer token. Cheap to clone.
#[derive(Clone)]
pub struct ApiClient {
    base: String,
    token: String,
    http: reqwest::Client,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base", &self.base)
            .field("token", &"***")
            .finish()
    }
}

impl ApiClient {
    pub fn new(base: &str, token: &str) -> anyhow::Result<Self> {
        let url = reqwest::Url::parse(base)
            .with_context(|| format!("Invalid cluster API address '{}'", base))?;
        if !matches!(url.scheme(), "http" | "https") {
            bail!("cluster API address '{}' must use http or https", base);
        }
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(API_TIMEOUT_SECS))
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self {
            base: base.trim_end_matches('/').to_string(),
            token: token.to_string(),
            http,
        })
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> anyhow::Result<T> {
        let url = self.url(path);
        debug!("GET {}", url);
        let resp = self
            .http
            .get(&url)
            .bearer_auth(&self.token)
            .send()
            .await
            .with_context(|| format!("GET {} failed", url))?;

        if !resp.status().is_success() {
            warn!("GET {} returned {}", url, resp.status());
            bail!("GET {} returned {}", url, resp.status());
        }

        resp.json()
            .await
            .with_context(|| format!("Invalid response body from {}", url))
    }

    /// Names of all namespaces.
    pub async fn list_namespaces(&self) -> anyhow::Result<Vec<String>> {
        let entries: Vec<NamespaceEntry> = self.get_json("/api/v1/namespaces").await?;
        Ok(entries.into_iter().map(NamespaceEntry::into_name).collect())
    }

    /// Secrets of `ns`, or of every namespace when `ns` is empty.
    pub async fn list_secrets(&self, ns: &str) -> anyhow::Result<Vec<SecretRow>> {
        self.get_json(&secrets_path(ns)).await
    }

    pub async fn list_pods(&self, ns: &str) -> anyhow::Result<Vec<Pod>> {
        self.get_json(&pods_path(ns)).await
    }

    pub async fn create_secret(&self, secret: &NewSecret) -> anyhow::Result<SecretRow> {
        if secret.namespace.is_empty() {
            bail!("a namespace is required to create a secret");
        }
        let url = self.url(&format!("/api/v1/namespaces/{}/secrets", secret.namespace));
        debug!("POST {}", url);
        let resp = self
            .http
            .post(&url)
            .bearer_auth(&self.token)
            .json(secret)
            .send()
            .await
            .with_context(|| format!("POST {} failed", url))?;

        if !resp.status().is_success() {
            warn!("POST {} returned {}", url, resp.status());
            bail!("POST {} returned {}", url, resp.status());
        }

        resp.json()
            .await
            .with_context(|| format!("Invalid response body from {}", url))
    }
}
