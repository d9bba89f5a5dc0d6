use access::{AccountRow, SearchCriteria};
use tracing::{debug, error};

/// Identifies one issued account query. Later tickets supersede earlier ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct SearchTicket(u64);

/// A query the host should run against the account directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountQuery {
    pub ticket: SearchTicket,
    pub criteria: SearchCriteria,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FetchState {
    #[default]
    Idle,
    Loading,
    Loaded(Vec<AccountRow>),
    Failed(String),
}

impl FetchState {
    pub fn rows(&self) -> &[AccountRow] {
        match self {
            FetchState::Loaded(rows) => rows,
            _ => &[],
        }
    }
}

/// Tracks the latest issued query so only its result reaches the table.
#[derive(Debug, Default)]
pub struct SearchState {
    latest: u64,
    state: FetchState,
}

impl SearchState {
    pub fn issue(&mut self, criteria: &SearchCriteria) -> AccountQuery {
        self.latest += 1;
        self.state = FetchState::Loading;
        AccountQuery {
            ticket: SearchTicket(self.latest),
            criteria: criteria.clone(),
        }
    }

    pub fn is_current(&self, ticket: SearchTicket) -> bool {
        ticket.0 == self.latest
    }

    /// Records the outcome of `ticket`. Returns false when a newer query superseded it.
    pub fn apply(&mut self, ticket: SearchTicket, result: shared::Result<Vec<AccountRow>>) -> bool {
        if !self.is_current(ticket) {
            debug!(ticket = ticket.0, latest = self.latest, "Dropping stale account result");
            return false;
        }
        self.state = match result {
            Ok(rows) => FetchState::Loaded(rows),
            Err(e) => {
                error!("Account query failed: {}", e);
                FetchState::Failed(e.to_string())
            }
        };
        true
    }

    pub fn state(&self) -> &FetchState {
        &self.state
    }

    pub(crate) fn rows_mut(&mut self) -> Option<&mut Vec<AccountRow>> {
        match &mut self.state {
            FetchState::Loaded(rows) => Some(rows),
            _ => None,
        }
    }
}
