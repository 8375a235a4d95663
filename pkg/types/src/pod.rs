use serde::{Deserialize, Serialize};

/// Pod summary as listed by `/api/v1/namespaces/{ns}/pods`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Pod {
    #[serde(default)]
    pub id: String,
    pub name: String,
    pub namespace: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub node_id: Option<String>,
}
