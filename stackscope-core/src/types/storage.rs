//! Block storage records

use serde::{Deserialize, Serialize};

/// Ties a volume to the server it is attached to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VolumeAttachment {
    pub volume_id: String,
    pub server_id: String,
    /// Device path on the server, e.g. `/dev/vdb`.
    pub device: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Volume {
    pub id: String,
    pub name: String,
    pub status: String,
    pub size_gb: u64,
    pub attachments: Vec<VolumeAttachment>,
}

impl Volume {
    /// Device path of the first attachment, the one shown in summaries.
    pub fn device(&self) -> Option<&str> {
        self.attachments.first().map(|a| a.device.as_str())
    }
}
