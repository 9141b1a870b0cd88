//! Gateway Layer - Core Traits

use async_trait::async_trait;

use crate::domain::DomainResult;

/// Source of greeting and status text.
///
/// Both calls return the upstream body as-is.
#[async_trait]
pub trait GreetingGateway: Send + Sync {
    /// Greeting for `name`
    async fn greet(&self, name: &str) -> DomainResult<String>;

    /// Current status text
    async fn check(&self) -> DomainResult<String>;
}
