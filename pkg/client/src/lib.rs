//! HTTP client for the cluster API consumed by the dashboard.

pub mod client;

pub use client::ApiClient;
