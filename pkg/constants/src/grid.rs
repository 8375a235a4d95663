//! Data grid constants shared by list views.

/// Page sizes offered by the grid footer.
pub const PAGE_SIZE_OPTIONS: &[usize] = &[5, 10, 25];

/// Page size used when a list view is first rendered.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Separator between the parts of a derived row identity key.
pub const ROW_ID_SEPARATOR: char = '~';

/// Longest resource name accepted by the create forms.
pub const MAX_NAME_LEN: usize = 63;
