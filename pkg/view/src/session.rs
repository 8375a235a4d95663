use tracing::debug;

/// Per-browser-session application state shared between the header and the
/// pages.
///
/// One `Session` is created by the layout and handed to every page through
/// context. Writers never coordinate: the last call to
/// [`Session::update_namespace`] wins.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    namespace: String,
    stretch: bool,
}

impl Session {
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            stretch: false,
        }
    }

    /// Currently selected namespace. Empty means "none selected".
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn has_namespace(&self) -> bool {
        !self.namespace.is_empty()
    }

    /// Overwrite the selected namespace. Never fails and does not check the
    /// value against the namespaces the cluster reports.
    pub fn update_namespace(&mut self, namespace: impl Into<String>) {
        let namespace = namespace.into();
        debug!("namespace: {:?} -> {:?}", self.namespace, namespace);
        self.namespace = namespace;
    }

    /// Whether page containers drop their max-width.
    pub fn stretch(&self) -> bool {
        self.stretch
    }

    pub fn toggle_stretch(&mut self) {
        self.stretch = !self.stretch;
    }
}
