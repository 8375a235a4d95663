use crate::columns::{Column, ColumnVisibility};
use pkg_types::secret::SecretRow;

/// Grid quick filter: every whitespace-separated term has to occur,
/// case-insensitively, in at least one visible cell of the row.
pub fn quick_search<'a, I>(rows: I, query: &str, columns: &ColumnVisibility) -> Vec<&'a SecretRow>
where
    I: IntoIterator<Item = &'a SecretRow>,
{
    let terms: Vec<String> = query.split_whitespace().map(str::to_lowercase).collect();
    if terms.is_empty() {
        return rows.into_iter().collect();
    }
    let visible = columns.visible();

    rows.into_iter()
        .filter(|row| {
            let cells: Vec<String> = visible
                .iter()
                .filter_map(|c: &Column| c.cell(row))
                .map(|c| c.to_lowercase())
                .collect();
            terms
                .iter()
                .all(|term| cells.iter().any(|cell| cell.contains(term.as_str())))
        })
        .collect()
}
