use crate::config::Config;
use access::{AccessRequestGateway, AccountDirectory, AccountRow, CreateAccessRequest, SearchCriteria};
use async_trait::async_trait;
use dioxus::prelude::{info, warn};
use reqwest::{Client, Response};
use shared::{Error, Result};
use shared_http::api::{AccountRowResponse, AccountsQuery, CreateAccessRequestBody, ErrorResponse};

#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    config: Config,
}

impl ApiClient {
    pub fn new(config: Config) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.config.api_base_url, path)
    }

    /// Passes 2xx responses through and turns anything else into `Error::Remote`,
    /// using the server's error body when it sent one.
    async fn check_status(response: Response) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let message = response
            .json::<ErrorResponse>()
            .await
            .map(|body| body.error)
            .unwrap_or_else(|_| status.canonical_reason().unwrap_or("request failed").to_string());
        Err(Error::Remote {
            status: status.as_u16(),
            message,
        })
    }
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
impl AccountDirectory for ApiClient {
    async fn filter_accounts(&self, criteria: &SearchCriteria) -> Result<Vec<AccountRow>> {
        let url = self.endpoint("accounts");
        info!("Filtering accounts at URL: {}", url);
        let response = self
            .client
            .get(&url)
            .query(&AccountsQuery::from(criteria))
            .send()
            .await
            .map_err(|e| {
                warn!("Account filter request failed: {}", e);
                Error::Transport(e.to_string())
            })?;
        let rows: Vec<AccountRowResponse> = Self::check_status(response)
            .await?
            .json()
            .await
            .map_err(|e| Error::Decode(e.to_string()))?;
        Ok(rows.into_iter().map(AccountRow::from).collect())
    }
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
impl AccessRequestGateway for ApiClient {
    async fn create_access_request(&self, request: CreateAccessRequest) -> Result<()> {
        let url = self.endpoint("access-requests");
        let account_id = request.account_id.clone();
        let response = self
            .client
            .post(&url)
            .json(&CreateAccessRequestBody::from(request))
            .send()
            .await
            .map_err(|e| {
                warn!("Access request call failed: {}", e);
                Error::Transport(e.to_string())
            })?;
        Self::check_status(response).await?;
        info!("Access request recorded for account {}", account_id);
        Ok(())
    }
}
