//! Route prefixes used when building navigation targets.

/// Root of the secret pages (`/secret`, `/secret/new`, `/secret/{name}`).
pub const SECRET_ROOT: &str = "/secret";

/// Root of the pod pages (`/pod/{namespace}/{name}`).
pub const POD_ROOT: &str = "/pod";
