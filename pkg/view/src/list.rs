use crate::columns::{Column, ColumnVisibility};
use crate::filter::{FilterSpec, RowField, apply_filter};
use crate::identity::row_id;
use crate::pagination::Pagination;
use crate::search::quick_search;
use crate::selection::Selection;
use pkg_types::secret::SecretRow;
use tracing::{debug, info};

/// Placeholder shown instead of grid rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    /// Nothing was fetched: empty namespace or a failed request.
    NoData,
    /// Rows exist but the filters removed all of them.
    NoResults,
}

impl Overlay {
    pub fn title(&self) -> &'static str {
        match self {
            Overlay::NoData => "No Data",
            Overlay::NoResults => "No results found",
        }
    }
}

/// Everything the secret list keeps between renders, apart from the fetched
/// rows themselves.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SecretListState {
    pub filters: FilterSpec,
    pub query: String,
    pub columns: ColumnVisibility,
    pub selection: Selection,
    pub pagination: Pagination,
    confirm_open: bool,
}

impl SecretListState {
    /// Rows that pass the facets and the quick filter, in fetch order.
    pub fn visible_rows<'a>(&self, rows: &'a [SecretRow]) -> Vec<&'a SecretRow> {
        let filtered = apply_filter(rows, &self.filters);
        quick_search(filtered, &self.query, &self.columns)
    }

    /// Slice of `visible` on the current page.
    pub fn page_rows<'a>(&self, visible: &[&'a SecretRow]) -> Vec<&'a SecretRow> {
        visible[self.pagination.range(visible.len())].to_vec()
    }

    pub fn overlay(&self, rows: &[SecretRow], visible: &[&SecretRow]) -> Option<Overlay> {
        if rows.is_empty() {
            Some(Overlay::NoData)
        } else if visible.is_empty() {
            Some(Overlay::NoResults)
        } else {
            None
        }
    }

    /// Call after every fetch: forget checked rows that are gone and keep the
    /// page index in range.
    pub fn rows_changed(&mut self, rows: &[SecretRow]) {
        let present: Vec<String> = rows.iter().map(row_id).collect();
        self.selection.retain_present(&present);
        let visible = self.visible_rows(rows).len();
        self.pagination.clamp(visible);
    }

    pub fn set_filter(&mut self, field: RowField, values: Vec<String>) {
        debug!("filter {:?} = {:?}", field, values);
        self.filters.set(field, values);
        self.pagination.first();
    }

    pub fn toggle_filter(&mut self, field: RowField, value: &str) {
        self.filters.toggle(field, value);
        self.pagination.first();
    }

    pub fn remove_filter(&mut self, field: RowField, value: &str) {
        self.filters.remove(field, value);
        self.pagination.first();
    }

    pub fn reset_filters(&mut self) {
        self.filters.reset();
        self.pagination.first();
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.pagination.first();
    }

    /// Show or hide a column. Hidden cells drop out of the quick filter, so
    /// the page goes back to the first one.
    pub fn toggle_column(&mut self, column: Column) {
        if self.columns.toggle(column) {
            self.pagination.first();
        }
    }

    /// Label of the toolbar delete button, shown only with a selection.
    pub fn delete_label(&self) -> Option<String> {
        if self.selection.is_empty() {
            None
        } else {
            Some(format!("Delete ({})", self.selection.len()))
        }
    }

    pub fn confirm_open(&self) -> bool {
        self.confirm_open
    }

    pub fn open_confirm(&mut self) {
        self.confirm_open = true;
    }

    pub fn close_confirm(&mut self) {
        self.confirm_open = false;
    }

    pub fn confirm_message(&self) -> String {
        format!(
            "Are you sure want to delete {} items?",
            self.selection.len()
        )
    }

    /// The dialog's "Delete" button. Secret deletion is not available, so
    /// this only closes the dialog; the selection is left as it was.
    pub fn confirm_delete(&mut self) {
        info!(
            "Delete requested for {} secret(s); deletion is not supported",
            self.selection.len()
        );
        self.confirm_open = false;
    }

    pub fn results_label(&self, visible: usize) -> String {
        format!("{} results found", visible)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(name: &str, ns: &str, complete: bool, created: &str) -> SecretRow {
        SecretRow {
            name: name.to_string(),
            namespace: ns.to_string(),
            secret_type: "Opaque".to_string(),
            create_time: created.to_string(),
            is_complete: complete,
        }
    }

    fn many(n: usize) -> Vec<SecretRow> {
        (0..n)
            .map(|i| row(&format!("s{}", i), "prod", i % 2 == 0, &format!("t{}", i)))
            .collect()
    }

    #[test]
    fn facets_then_quick_filter() {
        let rows = vec![
            row("db-password", "prod", true, "t1"),
            row("db-user", "dev", true, "t2"),
            row("api-key", "prod", false, "t3"),
        ];
        let mut state = SecretListState::default();
        state.set_filter(RowField::Namespace, vec!["prod".to_string()]);
        state.set_query("db");
        let names: Vec<&str> = state
            .visible_rows(&rows)
            .into_iter()
            .map(|r| r.name.as_str())
            .collect();
        assert_eq!(names, vec!["db-password"]);
    }

    #[test]
    fn overlays() {
        let state = SecretListState::default();
        assert_eq!(state.overlay(&[], &[]), Some(Overlay::NoData));

        let rows = many(3);
        assert_eq!(state.overlay(&rows, &[]), Some(Overlay::NoResults));

        let visible = state.visible_rows(&rows);
        assert_eq!(state.overlay(&rows, &visible), None);
        assert_eq!(Overlay::NoData.title(), "No Data");
    }

    #[test]
    fn pages_visible_rows() {
        let rows = many(23);
        let mut state = SecretListState::default();
        state.pagination.set_page(2, 23);
        let visible = state.visible_rows(&rows);
        let page = state.page_rows(&visible);
        assert_eq!(page.len(), 3);
        assert_eq!(page[0].name, "s20");
    }

    #[test]
    fn filter_changes_return_to_first_page() {
        let rows = many(23);
        let mut state = SecretListState::default();
        state.pagination.set_page(2, rows.len());
        state.toggle_filter(RowField::IsComplete, "true");
        assert_eq!(state.pagination.page(), 0);
    }

    #[test]
    fn rows_changed_prunes_selection_and_clamps_page() {
        let rows = many(23);
        let mut state = SecretListState::default();
        state.selection.toggle(&row_id(&rows[0]));
        state.selection.toggle(&row_id(&rows[22]));
        state.pagination.set_page(2, rows.len());

        let fewer = many(5);
        state.rows_changed(&fewer);
        assert_eq!(state.selection.ids(), [row_id(&rows[0])].as_slice());
        assert_eq!(state.pagination.page(), 0);
    }

    #[test]
    fn delete_dialog_only_closes() {
        let rows = many(2);
        let mut state = SecretListState::default();
        assert_eq!(state.delete_label(), None);

        state.selection.toggle(&row_id(&rows[0]));
        state.selection.toggle(&row_id(&rows[1]));
        assert_eq!(state.delete_label().as_deref(), Some("Delete (2)"));

        state.open_confirm();
        assert!(state.confirm_open());
        assert_eq!(state.confirm_message(), "Are you sure want to delete 2 items?");

        state.confirm_delete();
        assert!(!state.confirm_open());
        assert_eq!(state.selection.len(), 2);
    }

    #[test]
    fn hidden_column_narrows_quick_filter() {
        let rows = vec![row("a", "prod", true, "t1")];
        let mut state = SecretListState::default();
        state.set_query("opaque");
        assert_eq!(state.visible_rows(&rows).len(), 1);
        state.columns.set(Column::Type, false);
        assert!(state.visible_rows(&rows).is_empty());
    }

    #[test]
    fn hiding_a_searched_column_returns_to_first_page() {
        let mut rows: Vec<SecretRow> = (0..25)
            .map(|i| SecretRow {
                name: format!("cert-{}", i),
                namespace: "prod".to_string(),
                secret_type: "kubernetes.io/tls".to_string(),
                create_time: format!("t{}", i),
                is_complete: true,
            })
            .collect();
        rows[0].name = "tls-0".to_string();
        rows[1].name = "tls-1".to_string();

        let mut state = SecretListState::default();
        state.set_query("tls");
        state.pagination.set_page(2, rows.len());
        assert_eq!(state.pagination.page(), 2);

        state.toggle_column(Column::Type);
        let visible = state.visible_rows(&rows);
        assert_eq!(visible.len(), 2);
        assert_eq!(state.pagination.page(), 0);
        assert_eq!(state.page_rows(&visible).len(), 2);
        assert_eq!(state.overlay(&rows, &visible), None);
        assert_eq!(state.pagination.label(visible.len()), "1–2 of 2");
    }

    #[test]
    fn name_column_toggle_keeps_page() {
        let mut state = SecretListState::default();
        state.pagination.set_page(1, 23);
        state.toggle_column(Column::Name);
        assert!(state.columns.is_visible(Column::Name));
        assert_eq!(state.pagination.page(), 1);
    }
}
