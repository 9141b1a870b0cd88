//! Domain Layer
//!
//! Request payloads and domain errors.
//! This layer has NO external dependencies (except serde for serialization).

mod error;
mod greeting;

pub use error::{DomainError, DomainResult};
pub use greeting::GreetRequest;
