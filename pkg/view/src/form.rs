use anyhow::bail;
use pkg_types::secret::NewSecret;
use pkg_types::validate::validate_secret_name;
use std::collections::BTreeMap;

/// Secret types offered by the create form.
pub const SECRET_TYPES: &[&str] = &[
    "Opaque",
    "kubernetes.io/tls",
    "kubernetes.io/dockerconfigjson",
    "kubernetes.io/basic-auth",
];

/// Raw input of the "New Secret" page.
#[derive(Debug, Clone, PartialEq)]
pub struct NewSecretForm {
    pub name: String,
    pub namespace: String,
    pub secret_type: String,
    /// One `key=value` pair per line. Blank lines and `#` comments are skipped.
    pub data: String,
}

impl NewSecretForm {
    pub fn new(namespace: &str) -> Self {
        Self {
            name: String::new(),
            namespace: namespace.to_string(),
            secret_type: SECRET_TYPES[0].to_string(),
            data: String::new(),
        }
    }

    /// Check the input and build the create request.
    pub fn validate(&self) -> anyhow::Result<NewSecret> {
        let name = self.name.trim();
        let namespace = self.namespace.trim();
        if namespace.is_empty() {
            bail!("select a namespace before creating a secret");
        }
        validate_secret_name(namespace, name)?;
        if !SECRET_TYPES.contains(&self.secret_type.as_str()) {
            bail!("unsupported secret type '{}'", self.secret_type);
        }
        Ok(NewSecret {
            name: name.to_string(),
            namespace: namespace.to_string(),
            secret_type: self.secret_type.clone(),
            data: parse_data(&self.data)?,
        })
    }
}

/// Parse `key=value` lines. Values may contain `=`; keys may not repeat.
pub fn parse_data(text: &str) -> anyhow::Result<BTreeMap<String, String>> {
    let mut data = BTreeMap::new();
    for (idx, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let Some((key, value)) = line.split_once('=') else {
            bail!("line {}: expected key=value", idx + 1);
        };
        let key = key.trim();
        if key.is_empty() {
            bail!("line {}: empty key", idx + 1);
        }
        if data.insert(key.to_string(), value.trim().to_string()).is_some() {
            bail!("line {}: duplicate key '{}'", idx + 1, key);
        }
    }
    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(name: &str, ns: &str) -> NewSecretForm {
        NewSecretForm {
            name: name.to_string(),
            ..NewSecretForm::new(ns)
        }
    }

    #[test]
    fn builds_request() {
        let mut f = form(" db-password ", "prod");
        f.data = "user=admin\n\n# comment\npassword = a=b\n".to_string();
        let secret = f.validate().unwrap();
        assert_eq!(secret.name, "db-password");
        assert_eq!(secret.namespace, "prod");
        assert_eq!(secret.secret_type, "Opaque");
        assert_eq!(secret.data.get("user").map(String::as_str), Some("admin"));
        assert_eq!(secret.data.get("password").map(String::as_str), Some("a=b"));
    }

    #[test]
    fn rejects_bad_names_and_missing_namespace() {
        assert!(form("DB", "prod").validate().is_err());
        assert!(form("db", "").validate().is_err());
        assert!(form("db", "Prod").validate().is_err());
    }

    #[test]
    fn rejects_unknown_type() {
        let mut f = form("db", "prod");
        f.secret_type = "custom".to_string();
        assert!(f.validate().is_err());
    }

    #[test]
    fn data_errors_name_the_line() {
        let err = parse_data("a=1\nnovalue").unwrap_err();
        assert!(err.to_string().contains("line 2"));
        assert!(parse_data("=x").is_err());
        assert!(parse_data("a=1\na=2").is_err());
    }
}
