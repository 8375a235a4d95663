//! Network-related constants.

/// Default cluster API server address (HTTP).
pub const DEFAULT_API_ADDR: &str = "http://127.0.0.1:6443";

/// Bearer token used when neither the CLI, the environment nor the config file sets one.
pub const DEFAULT_API_TOKEN: &str = "demo-token-123";

/// Request timeout for calls to the cluster API, in seconds.
pub const API_TIMEOUT_SECS: u64 = 10;
