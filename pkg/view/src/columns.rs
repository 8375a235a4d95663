use chrono::DateTime;
use pkg_types::secret::SecretRow;
use std::collections::BTreeMap;

/// Columns of the secret grid, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Column {
    Name,
    Namespace,
    Type,
    CreateTime,
    Actions,
}

impl Column {
    pub const ALL: [Column; 5] = [
        Column::Name,
        Column::Namespace,
        Column::Type,
        Column::CreateTime,
        Column::Actions,
    ];

    /// Row field the column is bound to.
    pub fn field(&self) -> &'static str {
        match self {
            Column::Name => "Name",
            Column::Namespace => "Namespace",
            Column::Type => "Type",
            Column::CreateTime => "CreateTime",
            Column::Actions => "actions",
        }
    }

    pub fn header(&self) -> &'static str {
        match self {
            Column::Name => "Name",
            Column::Namespace => "Namespace",
            Column::Type => "Type",
            Column::CreateTime => "Create at",
            Column::Actions => " ",
        }
    }

    /// The name column cannot be hidden.
    pub fn hideable(&self) -> bool {
        !matches!(self, Column::Name)
    }

    /// Whether the columns panel lists this column.
    pub fn togglable(&self) -> bool {
        !matches!(self, Column::Name | Column::Actions)
    }

    /// Display text of the cell, `None` for the actions column.
    pub fn cell(&self, row: &SecretRow) -> Option<String> {
        match self {
            Column::Name => Some(row.name.clone()),
            Column::Namespace => Some(row.namespace.clone()),
            Column::Type => Some(row.secret_type.clone()),
            Column::CreateTime => Some(format_create_time(&row.create_time)),
            Column::Actions => None,
        }
    }
}

/// `YYYY-MM-DD HH:MM:SS` for RFC 3339 timestamps, the raw text otherwise.
pub fn format_create_time(raw: &str) -> String {
    match DateTime::parse_from_rfc3339(raw) {
        Ok(ts) => ts.format("%Y-%m-%d %H:%M:%S").to_string(),
        Err(_) => raw.to_string(),
    }
}

/// Which grid columns are shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnVisibility {
    hidden: BTreeMap<Column, bool>,
}

impl Default for ColumnVisibility {
    fn default() -> Self {
        Self {
            hidden: Column::ALL.iter().map(|c| (*c, false)).collect(),
        }
    }
}

impl ColumnVisibility {
    pub fn is_visible(&self, column: Column) -> bool {
        !self.hidden.get(&column).copied().unwrap_or(false)
    }

    /// Show or hide a column. Returns `false` when the column can't be hidden.
    pub fn set(&mut self, column: Column, visible: bool) -> bool {
        if !visible && !column.hideable() {
            return false;
        }
        self.hidden.insert(column, !visible);
        true
    }

    pub fn toggle(&mut self, column: Column) -> bool {
        let visible = self.is_visible(column);
        self.set(column, !visible)
    }

    /// Columns listed in the columns panel.
    pub fn togglable(&self) -> Vec<Column> {
        Column::ALL.into_iter().filter(Column::togglable).collect()
    }

    pub fn visible(&self) -> Vec<Column> {
        Column::ALL
            .into_iter()
            .filter(|c| self.is_visible(*c))
            .collect()
    }

    pub fn show_all(&mut self) {
        for hidden in self.hidden.values_mut() {
            *hidden = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn everything_visible_by_default() {
        let vis = ColumnVisibility::default();
        assert_eq!(vis.visible(), Column::ALL.to_vec());
    }

    #[test]
    fn name_column_cannot_be_hidden() {
        let mut vis = ColumnVisibility::default();
        assert!(!vis.set(Column::Name, false));
        assert!(vis.is_visible(Column::Name));
    }

    #[test]
    fn toggles_hideable_columns() {
        let mut vis = ColumnVisibility::default();
        assert!(vis.toggle(Column::Type));
        assert!(!vis.is_visible(Column::Type));
        assert_eq!(
            vis.visible(),
            vec![
                Column::Name,
                Column::Namespace,
                Column::CreateTime,
                Column::Actions
            ]
        );
        vis.show_all();
        assert!(vis.is_visible(Column::Type));
    }

    #[test]
    fn panel_lists_data_columns_only() {
        assert_eq!(
            ColumnVisibility::default().togglable(),
            vec![Column::Namespace, Column::Type, Column::CreateTime]
        );
    }

    #[test]
    fn formats_rfc3339_create_time() {
        assert_eq!(
            format_create_time("2024-03-01T10:20:30Z"),
            "2024-03-01 10:20:30"
        );
        assert_eq!(format_create_time("yesterday"), "yesterday");
    }

    #[test]
    fn actions_column_has_no_text() {
        let row = SecretRow {
            name: "a".to_string(),
            ..Default::default()
        };
        assert_eq!(Column::Actions.cell(&row), None);
        assert_eq!(Column::Name.cell(&row).as_deref(), Some("a"));
    }
}
