use crate::domain::{AccessRequestDraft, AccountRow, CreateAccessRequest};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Start Date is required")]
    MissingStartDate,

    #[error("Select an account before requesting access")]
    NoAccountSelected,
}

impl AccessRequestDraft {
    /// Builds the create payload for `account`, or the first rule the draft breaks.
    ///
    /// `end_date` and `indefinite` are passed through as entered.
    pub fn to_request(
        &self,
        account: Option<&AccountRow>,
    ) -> Result<CreateAccessRequest, ValidationError> {
        let start_date = self.start_date.ok_or(ValidationError::MissingStartDate)?;

        let account = account
            .filter(|account| !account.id.is_empty())
            .ok_or(ValidationError::NoAccountSelected)?;

        Ok(CreateAccessRequest {
            account_id: account.id.clone(),
            start_date,
            end_date: self.end_date,
            indefinite: self.indefinite,
            notes: self.notes.clone(),
        })
    }
}
