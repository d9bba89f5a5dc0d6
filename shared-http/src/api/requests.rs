use access::{CreateAccessRequest, SearchCriteria};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Query string of the account filter endpoint
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AccountsQuery {
    pub search_term: String,
    /// Empty when no record type is selected
    pub record_type_name: String,
}

impl From<&SearchCriteria> for AccountsQuery {
    fn from(criteria: &SearchCriteria) -> Self {
        Self {
            search_term: criteria.search_term.clone(),
            record_type_name: criteria.record_type_name(),
        }
    }
}

/// Request body for the create access request endpoint
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CreateAccessRequestBody {
    pub account_id: String,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub indefinite: bool,
    pub notes: String,
}

impl From<CreateAccessRequest> for CreateAccessRequestBody {
    fn from(request: CreateAccessRequest) -> Self {
        Self {
            account_id: request.account_id,
            start_date: request.start_date,
            end_date: request.end_date,
            indefinite: request.indefinite,
            notes: request.notes,
        }
    }
}
