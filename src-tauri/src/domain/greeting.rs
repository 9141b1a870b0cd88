//! Greeting Request
//!
//! JSON body posted to the upstream `/greet` endpoint.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GreetRequest {
    pub name: String,
}

impl GreetRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}
