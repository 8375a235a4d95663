use pkg_types::secret::SecretRow;
use std::borrow::Cow;

/// A secret row field a facet can match on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RowField {
    Namespace,
    IsComplete,
}

impl RowField {
    pub fn label(&self) -> &'static str {
        match self {
            RowField::Namespace => "Namespace",
            RowField::IsComplete => "Complete",
        }
    }

    /// Text the facet compares against. `IsComplete` matches as `"true"` / `"false"`.
    pub fn value<'a>(&self, row: &'a SecretRow) -> Cow<'a, str> {
        match self {
            RowField::Namespace => Cow::Borrowed(row.namespace.as_str()),
            RowField::IsComplete => Cow::Owned(row.is_complete.to_string()),
        }
    }

    /// Values offered by the toolbar for this field, derived from the rows on
    /// screen. Namespaces keep first-seen order.
    pub fn options(&self, rows: &[SecretRow]) -> Vec<String> {
        match self {
            RowField::Namespace => {
                let mut seen: Vec<String> = Vec::new();
                for row in rows {
                    if !seen.iter().any(|n| n == &row.namespace) {
                        seen.push(row.namespace.clone());
                    }
                }
                seen
            }
            RowField::IsComplete => vec!["true".to_string(), "false".to_string()],
        }
    }
}

/// One filter dimension: a row passes if its field value is one of `allowed`.
/// An empty `allowed` list disables the facet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Facet {
    pub field: RowField,
    pub allowed: Vec<String>,
}

impl Facet {
    pub fn new(field: RowField) -> Self {
        Self {
            field,
            allowed: Vec::new(),
        }
    }

    pub fn is_active(&self) -> bool {
        !self.allowed.is_empty()
    }

    pub fn matches(&self, row: &SecretRow) -> bool {
        if !self.is_active() {
            return true;
        }
        let value = self.field.value(row);
        self.allowed.iter().any(|a| a.as_str() == value.as_ref())
    }
}

/// Ordered list of facets, ANDed together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterSpec {
    facets: Vec<Facet>,
}

impl Default for FilterSpec {
    /// Namespace and completion facets, both empty.
    fn default() -> Self {
        Self::with_fields(&[RowField::Namespace, RowField::IsComplete])
    }
}

impl FilterSpec {
    pub fn with_fields(fields: &[RowField]) -> Self {
        Self {
            facets: fields.iter().map(|f| Facet::new(*f)).collect(),
        }
    }

    pub fn facets(&self) -> &[Facet] {
        &self.facets
    }

    pub fn facet(&self, field: RowField) -> Option<&Facet> {
        self.facets.iter().find(|f| f.field == field)
    }

    fn facet_mut(&mut self, field: RowField) -> &mut Facet {
        let idx = match self.facets.iter().position(|f| f.field == field) {
            Some(idx) => idx,
            None => {
                self.facets.push(Facet::new(field));
                self.facets.len() - 1
            }
        };
        &mut self.facets[idx]
    }

    /// Replace the allowed values of `field`. Duplicates are dropped.
    pub fn set(&mut self, field: RowField, values: Vec<String>) {
        let mut allowed: Vec<String> = Vec::with_capacity(values.len());
        for v in values {
            if !allowed.contains(&v) {
                allowed.push(v);
            }
        }
        self.facet_mut(field).allowed = allowed;
    }

    /// Add `value` to the facet, or remove it if already present.
    pub fn toggle(&mut self, field: RowField, value: &str) {
        let facet = self.facet_mut(field);
        if let Some(pos) = facet.allowed.iter().position(|v| v == value) {
            facet.allowed.remove(pos);
        } else {
            facet.allowed.push(value.to_string());
        }
    }

    pub fn remove(&mut self, field: RowField, value: &str) {
        if let Some(facet) = self.facets.iter_mut().find(|f| f.field == field) {
            facet.allowed.retain(|v| v != value);
        }
    }

    pub fn is_active(&self) -> bool {
        self.facets.iter().any(Facet::is_active)
    }

    /// True when any facet holds a value, i.e. "Clear" has something to do.
    pub fn can_reset(&self) -> bool {
        self.is_active()
    }

    pub fn reset(&mut self) {
        for facet in &mut self.facets {
            facet.allowed.clear();
        }
    }

    pub fn matches(&self, row: &SecretRow) -> bool {
        self.facets.iter().all(|f| f.matches(row))
    }

    /// `(field, value)` pairs for the "filters result" chips.
    pub fn chips(&self) -> Vec<(RowField, String)> {
        self.facets
            .iter()
            .flat_map(|f| f.allowed.iter().map(move |v| (f.field, v.clone())))
            .collect()
    }
}

/// Keep the rows that pass every active facet, in their original order.
pub fn apply_filter<'a, I>(rows: I, spec: &FilterSpec) -> Vec<&'a SecretRow>
where
    I: IntoIterator<Item = &'a SecretRow>,
{
    rows.into_iter().filter(|row| spec.matches(row)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn row(name: &str, ns: &str, complete: bool, created: &str) -> SecretRow {
        SecretRow {
            name: name.to_string(),
            namespace: ns.to_string(),
            secret_type: "Opaque".to_string(),
            create_time: created.to_string(),
            is_complete: complete,
        }
    }

    fn sample() -> Vec<SecretRow> {
        vec![row("a", "ns1", true, "t1"), row("b", "ns2", false, "t2")]
    }

    fn names(rows: &[&SecretRow]) -> Vec<String> {
        rows.iter().map(|r| r.name.clone()).collect()
    }

    #[test]
    fn empty_facets_are_identity() {
        let rows = sample();
        let out = apply_filter(&rows, &FilterSpec::default());
        assert_eq!(out.len(), rows.len());
        assert!(out.iter().zip(rows.iter()).all(|(a, b)| std::ptr::eq(*a, b)));
    }

    #[test]
    fn empty_input_stays_empty() {
        let mut spec = FilterSpec::default();
        spec.set(RowField::Namespace, vec!["ns1".to_string()]);
        let rows: Vec<SecretRow> = Vec::new();
        assert!(apply_filter(&rows, &spec).is_empty());
        assert!(apply_filter(&rows, &FilterSpec::default()).is_empty());
    }

    #[rstest]
    #[case(vec!["ns1"], vec![], vec!["a"])]
    #[case(vec![], vec!["false"], vec!["b"])]
    #[case(vec!["ns1", "ns2"], vec![], vec!["a", "b"])]
    #[case(vec!["ns1"], vec!["false"], vec![])]
    #[case(vec!["ns2"], vec!["false", "true"], vec!["b"])]
    #[case(vec!["other"], vec![], vec![])]
    fn facets_intersect(
        #[case] namespaces: Vec<&str>,
        #[case] complete: Vec<&str>,
        #[case] expected: Vec<&str>,
    ) {
        let rows = sample();
        let mut spec = FilterSpec::default();
        spec.set(
            RowField::Namespace,
            namespaces.into_iter().map(String::from).collect(),
        );
        spec.set(
            RowField::IsComplete,
            complete.into_iter().map(String::from).collect(),
        );
        assert_eq!(names(&apply_filter(&rows, &spec)), expected);
    }

    #[test]
    fn filtering_is_idempotent_and_order_preserving() {
        let rows = vec![
            row("c", "ns1", false, "t3"),
            row("a", "ns2", false, "t1"),
            row("b", "ns1", true, "t2"),
            row("d", "ns1", false, "t4"),
        ];
        let mut spec = FilterSpec::default();
        spec.set(RowField::Namespace, vec!["ns1".to_string()]);
        spec.set(RowField::IsComplete, vec!["false".to_string()]);

        let once = apply_filter(&rows, &spec);
        let twice = apply_filter(once.iter().copied(), &spec);
        assert_eq!(names(&once), vec!["c", "d"]);
        assert_eq!(names(&once), names(&twice));
    }

    #[test]
    fn set_drops_duplicates() {
        let mut spec = FilterSpec::default();
        spec.set(
            RowField::Namespace,
            vec!["ns1".to_string(), "ns1".to_string()],
        );
        assert_eq!(spec.facet(RowField::Namespace).unwrap().allowed, vec!["ns1"]);
    }

    #[test]
    fn toggle_remove_and_reset() {
        let mut spec = FilterSpec::default();
        assert!(!spec.can_reset());

        spec.toggle(RowField::Namespace, "ns1");
        spec.toggle(RowField::IsComplete, "true");
        assert!(spec.can_reset());
        assert_eq!(
            spec.chips(),
            vec![
                (RowField::Namespace, "ns1".to_string()),
                (RowField::IsComplete, "true".to_string()),
            ]
        );

        spec.toggle(RowField::Namespace, "ns1");
        assert!(!spec.facet(RowField::Namespace).unwrap().is_active());

        spec.remove(RowField::IsComplete, "true");
        assert!(!spec.can_reset());

        spec.set(RowField::Namespace, vec!["ns2".to_string()]);
        spec.reset();
        assert_eq!(spec, FilterSpec::default());
    }

    #[test]
    fn unknown_field_is_added_on_write() {
        let mut spec = FilterSpec::with_fields(&[RowField::Namespace]);
        assert!(spec.facet(RowField::IsComplete).is_none());
        spec.toggle(RowField::IsComplete, "true");
        assert_eq!(spec.facets().len(), 2);
        assert!(spec.facet(RowField::IsComplete).unwrap().is_active());
    }

    #[test]
    fn options_come_from_rows() {
        let rows = vec![
            row("a", "prod", true, "t1"),
            row("b", "dev", false, "t2"),
            row("c", "prod", false, "t3"),
        ];
        assert_eq!(RowField::Namespace.options(&rows), vec!["prod", "dev"]);
        assert_eq!(RowField::IsComplete.options(&rows), vec!["true", "false"]);
    }
}
