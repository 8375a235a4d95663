mod details;
mod list;
mod new;

pub use details::*;
pub use list::*;
pub use new::*;
