//! External metadata lookup implementations.

pub mod http_client;

pub use http_client::HttpEnrichmentClient;
