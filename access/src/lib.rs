#![deny(clippy::all)]

// Public API
pub mod domain;
pub mod notify;
pub mod ports;
pub mod table;
pub mod validation;

// Re-export commonly used types
pub use domain::{
    AccessRequestDraft, AccountRow, CreateAccessRequest, DraftField, FormVisibility, RecordType,
    SearchCriteria, parse_date_input,
};
pub use notify::{Notification, Notifier, Severity};
pub use ports::{AccessRequestGateway, AccountDirectory};
pub use table::{ACCOUNT_COLUMNS, AccountField, Column, ColumnKind, SortDirection, sort_by_name};
pub use validation::ValidationError;
