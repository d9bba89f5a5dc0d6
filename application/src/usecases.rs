use access::{
    AccessRequestGateway, AccountDirectory, AccountRow, CreateAccessRequest, SearchCriteria,
};
use shared::Result;
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub struct SearchAccountsUseCase {
    directory: Arc<dyn AccountDirectory>,
}
impl SearchAccountsUseCase {
    pub fn new(directory: Arc<dyn AccountDirectory>) -> Self {
        Self { directory }
    }
    pub async fn exec(&self, criteria: &SearchCriteria) -> Result<Vec<AccountRow>> {
        info!(
            search_term = %criteria.search_term,
            record_type = %criteria.record_type_name(),
            "Filtering accounts"
        );
        self.directory.filter_accounts(criteria).await
    }
}

#[derive(Clone)]
pub struct SubmitAccessRequestUseCase {
    gateway: Arc<dyn AccessRequestGateway>,
}
impl SubmitAccessRequestUseCase {
    pub fn new(gateway: Arc<dyn AccessRequestGateway>) -> Self {
        Self { gateway }
    }
    pub async fn exec(&self, request: CreateAccessRequest) -> Result<()> {
        info!(account_id = %request.account_id, "Submitting access request");
        self.gateway.create_access_request(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fakes::{InMemoryDirectory, RecordingGateway};
    use access::RecordType;
    use chrono::NaiveDate;

    #[tokio::test]
    async fn test_search_passes_criteria_through() {
        let rows = vec![AccountRow::new("001", "Acme")];
        let directory = Arc::new(InMemoryDirectory::with_rows(rows));
        let usecase = SearchAccountsUseCase::new(directory.clone());

        let criteria = SearchCriteria::new("ac", Some(RecordType::PersonAccount));
        let rows = usecase.exec(&criteria).await.unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(directory.queries(), vec![criteria]);
    }

    #[tokio::test]
    async fn test_submit_forwards_request() {
        let gateway = Arc::new(RecordingGateway::default());
        let usecase = SubmitAccessRequestUseCase::new(gateway.clone());

        let request = CreateAccessRequest {
            account_id: "001".to_string(),
            start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            end_date: None,
            indefinite: false,
            notes: String::new(),
        };
        usecase.exec(request.clone()).await.unwrap();

        assert_eq!(gateway.requests(), vec![request]);
    }

    #[tokio::test]
    async fn test_submit_surfaces_gateway_failure() {
        let gateway = Arc::new(RecordingGateway::failing());
        let usecase = SubmitAccessRequestUseCase::new(gateway);

        let request = CreateAccessRequest {
            account_id: "001".to_string(),
            start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            end_date: None,
            indefinite: false,
            notes: String::new(),
        };
        let result = usecase.exec(request).await;
        assert!(matches!(result, Err(shared::Error::Remote { status: 500, .. })));
    }
}
