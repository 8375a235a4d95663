//! Filesystem path constants.

/// Default config file path for the dashboard server.
pub const DEFAULT_UI_CONFIG: &str = "/etc/kubedeck/ui.yaml";
