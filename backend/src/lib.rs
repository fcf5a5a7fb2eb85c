//! Exercise tracker backend.
//!
//! Layered in the hexagonal style: `domain` holds the entities, services and
//! ports; `inbound::http` adapts Actix requests onto the driving ports; and
//! `outbound::persistence` implements the driven repository ports over
//! PostgreSQL with Diesel.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod settings;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use middleware::Trace;
