use serde::{Deserialize, Serialize};

/// Dashboard server configuration file (YAML).
///
/// Example `ui.yaml`:
/// ```yaml
/// server: http://10.0.0.1:6443
/// token: my-secret-token
/// namespace: default
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DashboardConfigFile {
    /// Cluster API endpoint the server functions proxy to.
    #[serde(default, alias = "api-server")]
    pub server: Option<String>,
    #[serde(default)]
    pub token: Option<String>,
    /// Namespace selected when a browser session starts.
    #[serde(default, alias = "default-namespace")]
    pub namespace: Option<String>,
}

/// Load a YAML config file, returning the default if the file doesn't exist.
pub fn load_config_file<T: serde::de::DeserializeOwned + Default>(path: &str) -> anyhow::Result<T> {
    let content = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Ok(T::default());
        }
        Err(e) => return Err(anyhow::anyhow!("Failed to read config {}: {}", path, e)),
    };
    if content.trim().is_empty() {
        return Ok(T::default());
    }
    let config: T = serde_yaml::from_str(&content)
        .map_err(|e| anyhow::anyhow!("Invalid config {}: {}", path, e))?;
    Ok(config)
}
