mod not_found;
mod pod;
mod secrets;

pub use not_found::*;
pub use pod::*;
pub use secrets::*;
