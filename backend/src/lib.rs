//! Comment analysis backend library.
//!
//! Hexagonal layout: [`domain`] holds types, services and ports;
//! [`inbound`] adapts HTTP requests; [`outbound`] implements storage and the
//! language model client.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::Trace;
