use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

/// A secret as listed by `/api/v1/namespaces/{ns}/secrets`.
///
/// Field names are PascalCase on the wire. There is no id field; list views
/// derive a row key from `Name` and `CreateTime`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct SecretRow {
    pub name: String,
    #[serde(default)]
    pub namespace: String,
    #[serde(rename = "Type", default)]
    pub secret_type: String,
    #[serde(default)]
    pub create_time: String,
    #[serde(default, deserialize_with = "bool_like")]
    pub is_complete: bool,
}

/// Body of a create request sent to `/api/v1/namespaces/{ns}/secrets`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct NewSecret {
    pub name: String,
    pub namespace: String,
    #[serde(rename = "Type")]
    pub secret_type: String,
    #[serde(default)]
    pub data: BTreeMap<String, String>,
}

/// Accepts `true`, `"true"`, `1` and their negatives for `IsComplete`.
fn bool_like<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Bool(bool),
        Text(String),
        Number(i64),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Bool(b) => Ok(b),
        Raw::Number(n) => Ok(n != 0),
        Raw::Text(s) => match s.trim().to_ascii_lowercase().as_str() {
            "true" | "1" | "yes" => Ok(true),
            "false" | "0" | "no" | "" => Ok(false),
            other => Err(serde::de::Error::custom(format!(
                "invalid IsComplete value '{}'",
                other
            ))),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_pascal_case_rows() {
        let raw = r#"{
            "Name": "db-password",
            "Namespace": "prod",
            "Type": "Opaque",
            "CreateTime": "2024-03-01T10:00:00Z",
            "IsComplete": true
        }"#;
        let row: SecretRow = serde_json::from_str(raw).unwrap();
        assert_eq!(row.name, "db-password");
        assert_eq!(row.namespace, "prod");
        assert_eq!(row.secret_type, "Opaque");
        assert_eq!(row.create_time, "2024-03-01T10:00:00Z");
        assert!(row.is_complete);
    }

    #[test]
    fn is_complete_accepts_text_and_numbers() {
        let text: SecretRow = serde_json::from_str(r#"{"Name":"a","IsComplete":"false"}"#).unwrap();
        assert!(!text.is_complete);
        let number: SecretRow = serde_json::from_str(r#"{"Name":"a","IsComplete":1}"#).unwrap();
        assert!(number.is_complete);
        let missing: SecretRow = serde_json::from_str(r#"{"Name":"a"}"#).unwrap();
        assert!(!missing.is_complete);
    }

    #[test]
    fn rejects_unknown_is_complete_text() {
        let res: Result<SecretRow, _> = serde_json::from_str(r#"{"Name":"a","IsComplete":"maybe"}"#);
        assert!(res.is_err());
    }

    #[test]
    fn new_secret_serializes_type_field() {
        let secret = NewSecret {
            name: "token".to_string(),
            namespace: "default".to_string(),
            secret_type: "Opaque".to_string(),
            data: BTreeMap::new(),
        };
        let json = serde_json::to_value(&secret).unwrap();
        assert_eq!(json["Type"], "Opaque");
        assert_eq!(json["Name"], "token");
    }
}
