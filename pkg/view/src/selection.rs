/// Checked grid rows, by row identity key, in the order they were checked.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    ids: Vec<String>,
}

impl Selection {
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|i| i == id)
    }

    pub fn toggle(&mut self, id: &str) {
        if let Some(pos) = self.ids.iter().position(|i| i == id) {
            self.ids.remove(pos);
        } else {
            self.ids.push(id.to_string());
        }
    }

    /// True when every id in `page` is checked (and `page` isn't empty).
    pub fn all_selected(&self, page: &[String]) -> bool {
        !page.is_empty() && page.iter().all(|id| self.contains(id))
    }

    /// Header checkbox: check the whole page, or uncheck it if it's already checked.
    pub fn toggle_page(&mut self, page: &[String]) {
        if self.all_selected(page) {
            self.ids.retain(|id| !page.contains(id));
        } else {
            for id in page {
                if !self.contains(id) {
                    self.ids.push(id.clone());
                }
            }
        }
    }

    /// Drop ids whose rows are gone, e.g. after a namespace switch.
    pub fn retain_present(&mut self, present: &[String]) {
        self.ids.retain(|id| present.contains(id));
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn toggle_keeps_check_order() {
        let mut sel = Selection::default();
        sel.toggle("b~t2");
        sel.toggle("a~t1");
        assert_eq!(sel.ids(), ids(&["b~t2", "a~t1"]).as_slice());
        sel.toggle("b~t2");
        assert_eq!(sel.ids(), ids(&["a~t1"]).as_slice());
    }

    #[test]
    fn page_toggle_checks_then_unchecks() {
        let page = ids(&["a~t1", "b~t2"]);
        let mut sel = Selection::default();
        sel.toggle("c~t3");
        sel.toggle("a~t1");

        sel.toggle_page(&page);
        assert!(sel.all_selected(&page));
        assert_eq!(sel.len(), 3);

        sel.toggle_page(&page);
        assert_eq!(sel.ids(), ids(&["c~t3"]).as_slice());
    }

    #[test]
    fn empty_page_is_never_all_selected() {
        assert!(!Selection::default().all_selected(&[]));
    }

    #[test]
    fn prunes_missing_rows() {
        let mut sel = Selection::default();
        sel.toggle("a~t1");
        sel.toggle("b~t2");
        sel.retain_present(&ids(&["b~t2", "c~t3"]));
        assert_eq!(sel.ids(), ids(&["b~t2"]).as_slice());
        sel.clear();
        assert!(sel.is_empty());
    }
}
