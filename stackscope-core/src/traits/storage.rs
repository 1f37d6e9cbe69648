//! Block storage provider trait

use async_trait::async_trait;

use crate::error::CoreResult;
use crate::types::Volume;

/// Read operations against the block storage service.
#[async_trait]
pub trait StorageProvider: Send + Sync {
    async fn list_volumes(&self) -> CoreResult<Vec<Volume>>;

    async fn get_volume(&self, id: &str) -> CoreResult<Volume>;
}
