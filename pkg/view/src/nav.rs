use crate::actions::{new_secret_path, secret_list_path};

/// An entry of the navigation menu, also searched by the header search box.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItem {
    pub group: &'static str,
    pub title: &'static str,
    pub path: String,
}

pub fn nav_items() -> Vec<NavItem> {
    vec![
        NavItem {
            group: "Secret",
            title: "List",
            path: secret_list_path(),
        },
        NavItem {
            group: "Secret",
            title: "Create",
            path: new_secret_path(),
        },
    ]
}

/// Entries whose group or title contains `query`, case-insensitively.
/// A blank query matches nothing so the result popup stays closed.
pub fn search<'a>(items: &'a [NavItem], query: &str) -> Vec<&'a NavItem> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return Vec::new();
    }
    items
        .iter()
        .filter(|item| {
            item.title.to_lowercase().contains(&query) || item.group.to_lowercase().contains(&query)
        })
        .collect()
}
