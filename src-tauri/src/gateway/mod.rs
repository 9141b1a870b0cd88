//! Gateway Layer
//!
//! Access to the upstream greeting service.

mod traits;
mod http;

pub use traits::GreetingGateway;
pub use http::HttpGateway;
