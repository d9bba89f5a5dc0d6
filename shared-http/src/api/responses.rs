use access::AccountRow;
use serde::{Deserialize, Serialize};

/// One record of the account filter response, keyed by the service's field names.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct AccountRowResponse {
    pub id: String,
    /// The service sends `null` for unnamed accounts
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub account_number: Option<String>,
    #[serde(default)]
    pub practice_name: Option<String>,
    #[serde(default)]
    pub approver_name: Option<String>,
    #[serde(default)]
    pub region: Option<String>,
}

impl From<AccountRowResponse> for AccountRow {
    fn from(row: AccountRowResponse) -> Self {
        Self {
            id: row.id,
            name: row.name.unwrap_or_default(),
            account_number: row.account_number,
            practice_name: row.practice_name,
            approver_name: row.approver_name,
            region: row.region,
        }
    }
}

// Error response
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_account_row_from_service_payload() {
        let rows: Vec<AccountRowResponse> = serde_json::from_value(json!([
            {
                "Id": "001",
                "Name": "Acme",
                "AccountNumber": "AC-1",
                "PracticeName": "Audit",
                "ApproverName": "Dana Reyes",
                "Region": "EMEA"
            },
            { "Id": "002", "Name": "Globex", "Region": null }
        ]))
        .unwrap();

        let rows: Vec<AccountRow> = rows.into_iter().map(AccountRow::from).collect();
        assert_eq!(rows[0].account_number.as_deref(), Some("AC-1"));
        assert_eq!(rows[0].approver_name.as_deref(), Some("Dana Reyes"));
        assert_eq!(rows[1], AccountRow::new("002", "Globex"));
    }

    #[test]
    fn test_account_row_with_null_name() {
        let rows: Vec<AccountRowResponse> = serde_json::from_value(json!([
            { "Id": "003", "Name": null },
            { "Id": "004" }
        ]))
        .unwrap();

        let rows: Vec<AccountRow> = rows.into_iter().map(AccountRow::from).collect();
        assert_eq!(rows[0], AccountRow::new("003", ""));
        assert_eq!(rows[1], AccountRow::new("004", ""));
    }

    #[test]
    fn test_account_row_requires_id() {
        let result = serde_json::from_value::<AccountRowResponse>(json!({ "Name": "Acme" }));
        assert!(result.is_err());
    }

    #[test]
    fn test_error_response_shape() {
        let err: ErrorResponse = serde_json::from_value(json!({ "error": "denied" })).unwrap();
        assert_eq!(err.error, "denied");
    }
}
