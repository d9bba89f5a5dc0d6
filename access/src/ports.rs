use crate::domain::{AccountRow, CreateAccessRequest, SearchCriteria};
use async_trait::async_trait;
use shared::Result;

// Ports are the pluggable seams to the remote account services.
// Browser HTTP futures are not `Send`, so wasm builds drop that bound.

/// Port for the account filter query
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
pub trait AccountDirectory: Send + Sync + 'static {
    async fn filter_accounts(&self, criteria: &SearchCriteria) -> Result<Vec<AccountRow>>;
}

/// Port for recording an access request
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
pub trait AccessRequestGateway: Send + Sync + 'static {
    async fn create_access_request(&self, request: CreateAccessRequest) -> Result<()>;
}
