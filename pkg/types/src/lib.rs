pub mod config;
pub mod namespace;
pub mod pod;
pub mod secret;
pub mod validate;
