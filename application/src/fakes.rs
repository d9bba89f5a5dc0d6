// In-memory port implementations shared by the unit tests.
use access::{
    AccessRequestGateway, AccountDirectory, AccountRow, CreateAccessRequest, Notification,
    Notifier, SearchCriteria,
};
use async_trait::async_trait;
use shared::{Error, Result};
use std::sync::Mutex;

#[derive(Default)]
pub struct InMemoryDirectory {
    rows: Vec<AccountRow>,
    queries: Mutex<Vec<SearchCriteria>>,
    failing: bool,
}

impl InMemoryDirectory {
    pub fn with_rows(rows: Vec<AccountRow>) -> Self {
        Self {
            rows,
            ..Default::default()
        }
    }

    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Default::default()
        }
    }

    pub fn queries(&self) -> Vec<SearchCriteria> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl AccountDirectory for InMemoryDirectory {
    async fn filter_accounts(&self, criteria: &SearchCriteria) -> Result<Vec<AccountRow>> {
        self.queries.lock().unwrap().push(criteria.clone());
        if self.failing {
            return Err(Error::Transport("connection refused".to_string()));
        }
        let term = criteria.search_term.to_lowercase();
        Ok(self
            .rows
            .iter()
            .filter(|row| row.name.to_lowercase().contains(&term))
            .cloned()
            .collect())
    }
}

#[derive(Default)]
pub struct RecordingGateway {
    requests: Mutex<Vec<CreateAccessRequest>>,
    failing: bool,
}

impl RecordingGateway {
    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Default::default()
        }
    }

    pub fn requests(&self) -> Vec<CreateAccessRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl AccessRequestGateway for RecordingGateway {
    async fn create_access_request(&self, request: CreateAccessRequest) -> Result<()> {
        self.requests.lock().unwrap().push(request);
        if self.failing {
            return Err(Error::Remote {
                status: 500,
                message: "insert failed".to_string(),
            });
        }
        Ok(())
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    seen: Mutex<Vec<Notification>>,
}

impl RecordingNotifier {
    pub fn seen(&self) -> Vec<Notification> {
        self.seen.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: Notification) {
        self.seen.lock().unwrap().push(notification);
    }
}
