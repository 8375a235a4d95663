mod breadcrumbs;
mod confirm;
mod empty;
mod header;

pub use breadcrumbs::*;
pub use confirm::*;
pub use empty::*;
pub use header::*;
