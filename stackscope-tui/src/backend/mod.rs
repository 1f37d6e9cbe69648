//! Backend layer
//!
//! Completely decoupled from the UI. Owns the async dispatcher and the
//! cloud access service; the update layer talks to the cloud only
//! through these.

mod cloud;
mod clouds;
mod dispatcher;
mod static_cloud;

pub use cloud::{CloudService, ResourceDetail, ResourceRow};
pub use clouds::discover_clouds;
pub use dispatcher::Dispatcher;
pub use static_cloud::StaticCloud;

use std::sync::Arc;

/// Everything the update layer needs to reach the outside world.
pub struct Backend {
    pub dispatcher: Dispatcher,
    pub cloud: Arc<CloudService>,
    /// Named cloud profiles the user can switch between.
    pub clouds: Vec<String>,
}

impl Backend {
    pub fn new(dispatcher: Dispatcher, cloud: CloudService, clouds: Vec<String>) -> Self {
        Self {
            dispatcher,
            cloud: Arc::new(cloud),
            clouds,
        }
    }

    /// Replaces the active cloud. In-flight fetches for the old cloud
    /// keep running but their completions no longer match any pending
    /// request, so they are dropped on arrival.
    pub fn switch_cloud(&mut self, name: &str) {
        self.cloud = Arc::new(CloudService::demo(name));
    }
}
