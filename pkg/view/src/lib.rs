//! View-model logic for the dashboard pages.
//!
//! Nothing in here knows about Dioxus: the UI crate keeps these types in
//! signals and calls into them from event handlers.

pub mod actions;
pub mod columns;
pub mod filter;
pub mod form;
pub mod identity;
pub mod list;
pub mod namespace;
pub mod nav;
pub mod pagination;
pub mod pods;
pub mod search;
pub mod selection;
pub mod session;
