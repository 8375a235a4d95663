use anyhow::{Result, bail};
use pkg_constants::grid::MAX_NAME_LEN;
use std::fmt;

/// What a validated name belongs to. Only used to word the error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameKind {
    Secret,
    Namespace,
}

impl fmt::Display for NameKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NameKind::Secret => write!(f, "secret name"),
            NameKind::Namespace => write!(f, "namespace"),
        }
    }
}

fn is_label_char(c: char) -> bool {
    matches!(c, 'a'..='z' | '0'..='9' | '-')
}

/// Secret names and namespaces share the DNS label rule: `[a-z0-9-]`, at
/// most `MAX_NAME_LEN` bytes, alphanumeric at both ends.
pub fn validate_label(kind: NameKind, value: &str) -> Result<()> {
    if value.is_empty() {
        bail!("{} is required", kind);
    }
    if value.len() > MAX_NAME_LEN {
        bail!("{} '{}' is longer than {} characters", kind, value, MAX_NAME_LEN);
    }
    if let Some(bad) = value.chars().find(|c| !is_label_char(*c)) {
        bail!("{} '{}' contains '{}'; use a-z, 0-9 and '-'", kind, value, bad);
    }
    if value.starts_with('-') || value.ends_with('-') {
        bail!("{} '{}' must begin and end with a letter or digit", kind, value);
    }
    Ok(())
}

/// Check both halves of a secret's identity before it is sent to the cluster.
pub fn validate_secret_name(namespace: &str, name: &str) -> Result<()> {
    validate_label(NameKind::Namespace, namespace)?;
    validate_label(NameKind::Secret, name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_dns_labels() {
        assert!(validate_secret_name("prod", "db-password").is_ok());
        assert!(validate_secret_name("team-2", "tls-2024").is_ok());
        assert!(validate_label(NameKind::Secret, &"a".repeat(MAX_NAME_LEN)).is_ok());
    }

    #[test]
    fn rejects_bad_secret_names() {
        for bad in ["", "Db-Password", "db_password", "-leading", "trailing-", "tls.crt"] {
            assert!(validate_secret_name("prod", bad).is_err(), "{bad}");
        }
        assert!(validate_label(NameKind::Secret, &"a".repeat(MAX_NAME_LEN + 1)).is_err());
    }

    #[test]
    fn errors_name_the_field() {
        let err = validate_secret_name("", "db").unwrap_err().to_string();
        assert_eq!(err, "namespace is required");

        let err = validate_secret_name("prod", "db_pw").unwrap_err().to_string();
        assert!(err.starts_with("secret name 'db_pw' contains '_'"), "{err}");
    }
}
