//! Property tax record service: domain core, SQLite persistence adapters,
//! and the actix-web HTTP adapter.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod outbound;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
