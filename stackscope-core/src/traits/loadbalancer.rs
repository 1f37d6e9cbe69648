//! Load balancer provider trait

use async_trait::async_trait;

use crate::error::CoreResult;
use crate::types::{Listener, LoadBalancer, Pool};

/// Read operations against the load balancer service.
#[async_trait]
pub trait LoadBalancerProvider: Send + Sync {
    async fn list_load_balancers(&self) -> CoreResult<Vec<LoadBalancer>>;

    async fn list_listeners(&self, lb_id: &str) -> CoreResult<Vec<Listener>>;

    async fn list_pools(&self, lb_id: &str) -> CoreResult<Vec<Pool>>;
}
