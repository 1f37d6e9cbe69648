//! Identity service provider trait

use async_trait::async_trait;

use crate::error::CoreResult;
use crate::types::{Project, User};

/// Read operations against the identity service.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    async fn list_projects(&self) -> CoreResult<Vec<Project>>;

    async fn list_users(&self) -> CoreResult<Vec<User>>;
}
