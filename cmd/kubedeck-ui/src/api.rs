use dioxus::prelude::*;
use pkg_types::pod::Pod;
use pkg_types::secret::{NewSecret, SecretRow};

// ============================================================
// Server functions: proxy the cluster API for the browser
// ============================================================

#[get("/api/ui/session")]
pub async fn get_default_namespace() -> Result<String> {
    let ns = crate::backend::default_namespace()?;
    Ok(ns)
}

#[get("/api/ui/namespaces")]
pub async fn get_namespaces() -> Result<Vec<String>> {
    let client = crate::backend::client()?;
    let names = client
        .list_namespaces()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;
    Ok(names)
}

#[get("/api/ui/secrets?ns")]
pub async fn get_secrets(ns: String) -> Result<Vec<SecretRow>> {
    let client = crate::backend::client()?;
    let secrets = client
        .list_secrets(&ns)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;
    Ok(secrets)
}

#[post("/api/ui/secrets")]
pub async fn create_secret(secret: NewSecret) -> Result<SecretRow> {
    let client = crate::backend::client()?;
    let created = client
        .create_secret(&secret)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;
    tracing::info!("Created secret {}/{}", created.namespace, created.name);
    Ok(created)
}

#[get("/api/ui/pods?ns")]
pub async fn get_pods(ns: String) -> Result<Vec<Pod>> {
    let client = crate::backend::client()?;
    let pods = client
        .list_pods(&ns)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;
    Ok(pods)
}
