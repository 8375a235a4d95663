use pkg_constants::routes::{POD_ROOT, SECRET_ROOT};
use pkg_types::secret::SecretRow;

/// `/secret`
pub fn secret_list_path() -> String {
    SECRET_ROOT.to_string()
}

/// `/secret/new`
pub fn new_secret_path() -> String {
    format!("{}/new", SECRET_ROOT)
}

/// `/secret/{name}`
pub fn secret_details_path(name: &str) -> String {
    format!("{}/{}", SECRET_ROOT, name)
}

/// `/pod/{namespace}/{name}`
pub fn pod_path(namespace: &str, name: &str) -> String {
    format!("{}/{}/{}", POD_ROOT, namespace, name)
}

/// Per-row navigation actions of the secret grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAction {
    /// Menu entry "View".
    View,
    /// Menu entry "Edit". Not implemented: it has no target.
    Edit,
    /// Click on the name cell.
    OpenPod,
}

impl RowAction {
    /// Entries of the row menu, in display order.
    pub const MENU: [RowAction; 2] = [RowAction::View, RowAction::Edit];

    pub fn label(&self) -> &'static str {
        match self {
            RowAction::View => "View",
            RowAction::Edit => "Edit",
            RowAction::OpenPod => "Open",
        }
    }

    /// Where the action navigates to, or `None` if it does nothing.
    pub fn target(&self, row: &SecretRow) -> Option<String> {
        match self {
            RowAction::View => Some(secret_details_path(&row.name)),
            RowAction::Edit => None,
            RowAction::OpenPod => Some(pod_path(&row.namespace, &row.name)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row() -> SecretRow {
        SecretRow {
            name: "db-password".to_string(),
            namespace: "prod".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn view_targets_details_by_name() {
        assert_eq!(
            RowAction::View.target(&row()).as_deref(),
            Some("/secret/db-password")
        );
    }

    #[test]
    fn edit_goes_nowhere() {
        assert_eq!(RowAction::Edit.target(&row()), None);
    }

    #[test]
    fn name_click_targets_pod_route() {
        assert_eq!(
            RowAction::OpenPod.target(&row()).as_deref(),
            Some("/pod/prod/db-password")
        );
    }

    #[test]
    fn static_paths() {
        assert_eq!(secret_list_path(), "/secret");
        assert_eq!(new_secret_path(), "/secret/new");
    }
}
