mod registered_service;
mod service_pattern;
mod shared;

pub use registered_service::{RegisteredService, INITIAL_IDENTIFIER_VALUE};
pub use service_pattern::{InvalidPatternError, ServicePattern};
pub use shared::entity::Entity;
