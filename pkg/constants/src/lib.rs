//! Centralized constants for the kubedeck project.
//!
//! All project-wide constant values live here.
//! Change a value in one place and it applies everywhere.

pub mod grid;
pub mod network;
pub mod paths;
pub mod routes;
