use crate::session::Session;

/// An option of the header's namespace selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamespaceOption {
    pub label: String,
    pub id: String,
}

impl NamespaceOption {
    pub fn new(name: &str) -> Self {
        Self {
            label: name.to_string(),
            id: name.to_string(),
        }
    }

    /// Options compare by id only.
    pub fn same_as(&self, other: &NamespaceOption) -> bool {
        self.id == other.id
    }
}

/// Build selector options from the namespace names reported by the cluster.
pub fn options(namespaces: &[String]) -> Vec<NamespaceOption> {
    namespaces.iter().map(|n| NamespaceOption::new(n)).collect()
}

/// The option shown as selected, or `None` when no namespace is set.
pub fn current(session: &Session) -> Option<NamespaceOption> {
    if session.has_namespace() {
        Some(NamespaceOption::new(session.namespace()))
    } else {
        None
    }
}

/// Apply a selector change: a picked option writes its label, a cleared
/// selector writes the empty string.
pub fn select(session: &mut Session, picked: Option<&NamespaceOption>) {
    match picked {
        Some(option) => session.update_namespace(option.label.clone()),
        None => session.update_namespace(""),
    }
}

/// Resolve the raw value of an HTML `<select>` change event. The empty value
/// is the "clear" entry.
pub fn select_value(session: &mut Session, value: &str) {
    if value.is_empty() {
        select(session, None);
    } else {
        select(session, Some(&NamespaceOption::new(value)));
    }
}
