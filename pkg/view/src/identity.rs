use pkg_constants::grid::ROW_ID_SEPARATOR;
use pkg_types::secret::SecretRow;

/// Grid key of a secret row: `Name~CreateTime`.
///
/// Two rows with the same name and creation time get the same key; the grid
/// then treats them as one row for selection.
pub fn row_id(row: &SecretRow) -> String {
    format!("{}{}{}", row.name, ROW_ID_SEPARATOR, row.create_time)
}
