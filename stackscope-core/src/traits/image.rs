//! Image service provider trait

use async_trait::async_trait;

use crate::error::CoreResult;
use crate::types::Image;

/// Read operations against the image service.
#[async_trait]
pub trait ImageProvider: Send + Sync {
    async fn list_images(&self) -> CoreResult<Vec<Image>>;
}
