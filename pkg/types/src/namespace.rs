use serde::{Deserialize, Serialize};

/// One entry of the namespace list returned by the cluster API.
///
/// The API answers with bare names (`["default", "kube-system"]`); full
/// namespace objects (`[{"name": "default", ...}]`) are accepted as well.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum NamespaceEntry {
    Name(String),
    Object { name: String },
}

impl NamespaceEntry {
    pub fn into_name(self) -> String {
        match self {
            NamespaceEntry::Name(name) | NamespaceEntry::Object { name } => name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_names_and_objects() {
        let raw = r#"["default", {"name": "kube-system", "labels": {}}]"#;
        let entries: Vec<NamespaceEntry> = serde_json::from_str(raw).unwrap();
        let names: Vec<String> = entries.into_iter().map(NamespaceEntry::into_name).collect();
        assert_eq!(names, vec!["default", "kube-system"]);
    }
}
