use crate::error::FormError;
use crate::search::{AccountQuery, FetchState, SearchState, SearchTicket};
use crate::usecases::{SearchAccountsUseCase, SubmitAccessRequestUseCase};
use access::{
    AccessRequestDraft, AccountRow, CreateAccessRequest, DraftField, FormVisibility, Notification,
    Notifier, RecordType, SearchCriteria, SortDirection, sort_by_name,
};
use std::fmt::Debug;
use std::sync::Arc;
use tracing::{debug, error, info};

const SUBMITTED_MESSAGE: &str = "Request submitted!";
const SUBMISSION_FAILED_MESSAGE: &str = "Submission failed";

/// Headless state of the request-client-access view.
///
/// Every handler runs synchronously against local state. Remote work is handed
/// back to the host as an [`AccountQuery`] or [`CreateAccessRequest`] and its
/// outcome fed in through [`apply_accounts`](Self::apply_accounts) and
/// [`finish_submit`](Self::finish_submit). [`load`](Self::load) and
/// [`submit`](Self::submit) run both halves against the use cases.
pub struct AccessRequestForm {
    criteria: SearchCriteria,
    search: SearchState,
    sort: Option<SortDirection>,
    selected: Option<AccountRow>,
    draft: AccessRequestDraft,
    visibility: FormVisibility,
    /// Account id of the create call in flight, if any.
    in_flight: Option<String>,
    notifier: Arc<dyn Notifier>,
}

impl AccessRequestForm {
    pub fn new(notifier: Arc<dyn Notifier>) -> Self {
        Self {
            criteria: SearchCriteria::default(),
            search: SearchState::default(),
            sort: None,
            selected: None,
            draft: AccessRequestDraft::default(),
            visibility: FormVisibility::Hidden,
            in_flight: None,
            notifier,
        }
    }

    pub fn criteria(&self) -> &SearchCriteria {
        &self.criteria
    }

    pub fn fetch_state(&self) -> &FetchState {
        self.search.state()
    }

    pub fn accounts(&self) -> &[AccountRow] {
        self.search.state().rows()
    }

    pub fn sort(&self) -> Option<SortDirection> {
        self.sort
    }

    pub fn selected_account(&self) -> Option<&AccountRow> {
        self.selected.as_ref()
    }

    pub fn draft(&self) -> &AccessRequestDraft {
        &self.draft
    }

    pub fn visibility(&self) -> FormVisibility {
        self.visibility
    }

    pub fn is_submitting(&self) -> bool {
        self.in_flight.is_some()
    }

    // --- search ---

    /// Issues a query for the current criteria, e.g. on first render.
    pub fn refresh(&mut self) -> AccountQuery {
        self.search.issue(&self.criteria)
    }

    pub fn on_search_term_change(&mut self, text: impl Into<String>) -> AccountQuery {
        self.criteria.search_term = text.into();
        self.refresh()
    }

    pub fn on_record_type_change(&mut self, record_type: Option<RecordType>) -> AccountQuery {
        self.criteria.record_type = record_type;
        self.refresh()
    }

    /// Applies a directory result. Results of superseded queries are dropped.
    pub fn apply_accounts(
        &mut self,
        ticket: SearchTicket,
        result: shared::Result<Vec<AccountRow>>,
    ) -> bool {
        let applied = self.search.apply(ticket, result);
        if applied {
            self.resort();
        }
        applied
    }

    /// Flips the name sort, ascending first.
    pub fn on_sort(&mut self) {
        self.sort = Some(self.sort.map_or(SortDirection::Ascending, SortDirection::toggled));
        self.resort();
    }

    fn resort(&mut self) {
        if let (Some(direction), Some(rows)) = (self.sort, self.search.rows_mut()) {
            sort_by_name(rows, direction);
        }
    }

    // --- selection and draft ---

    pub fn on_row_action(&mut self, row: AccountRow) {
        debug!(account_id = %row.id, "Account selected");
        self.selected = Some(row);
        self.visibility = FormVisibility::Visible;
    }

    pub fn on_cancel(&mut self) {
        self.close();
    }

    pub fn on_field_change(&mut self, field: DraftField) {
        self.draft.apply(field);
    }

    /// Label-addressed variant of [`on_field_change`](Self::on_field_change).
    /// Returns false, leaving the draft untouched, for labels no field answers to.
    pub fn on_labeled_change(&mut self, label: &str, value: &str, checked: bool) -> bool {
        match DraftField::from_label(label, value, checked) {
            Some(field) => {
                self.on_field_change(field);
                true
            }
            None => false,
        }
    }

    fn close(&mut self) {
        self.visibility = FormVisibility::Hidden;
        self.selected = None;
        self.draft.reset();
    }

    // --- submit ---

    /// Validates the draft and marks a submission in flight.
    ///
    /// Validation failures are reported through the notifier. A submit while
    /// another is in flight is refused silently.
    pub fn begin_submit(&mut self) -> Result<CreateAccessRequest, FormError> {
        if self.in_flight.is_some() {
            debug!("Ignoring submit while a request is in flight");
            return Err(FormError::SubmissionPending);
        }

        match self.draft.to_request(self.selected.as_ref()) {
            Ok(request) => {
                self.in_flight = Some(request.account_id.clone());
                Ok(request)
            }
            Err(e) => {
                self.notifier.notify(Notification::error(e.to_string()));
                Err(e.into())
            }
        }
    }

    /// Applies the outcome of the create call started by [`begin_submit`](Self::begin_submit).
    ///
    /// On success the form closes only if it still shows the submitted account;
    /// a form reopened for another account meanwhile keeps its draft.
    pub fn finish_submit(&mut self, result: shared::Result<()>) -> Result<(), FormError> {
        let submitted = self.in_flight.take();
        match result {
            Ok(()) => {
                info!(account_id = ?submitted, "Access request submitted");
                self.notifier.notify(Notification::success(SUBMITTED_MESSAGE));
                let still_showing = self.visibility.is_visible()
                    && self.selected.as_ref().map(|a| &a.id) == submitted.as_ref();
                if still_showing {
                    self.close();
                }
                Ok(())
            }
            Err(e) => {
                error!("Access request submission failed: {}", e);
                self.notifier
                    .notify(Notification::error(SUBMISSION_FAILED_MESSAGE));
                Err(e.into())
            }
        }
    }

    pub async fn submit(&mut self, usecase: &SubmitAccessRequestUseCase) -> Result<(), FormError> {
        let request = self.begin_submit()?;
        let result = usecase.exec(request).await;
        self.finish_submit(result)
    }

    pub async fn load(&mut self, usecase: &SearchAccountsUseCase, query: AccountQuery) -> bool {
        let result = usecase.exec(&query.criteria).await;
        self.apply_accounts(query.ticket, result)
    }
}

impl Debug for AccessRequestForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccessRequestForm")
            .field("criteria", &self.criteria)
            .field("fetch_state", self.search.state())
            .field("selected", &self.selected)
            .field("draft", &self.draft)
            .field("visibility", &self.visibility)
            .field("in_flight", &self.in_flight)
            .finish()
    }
}
