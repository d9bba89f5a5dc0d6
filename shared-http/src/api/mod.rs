pub mod requests;
pub mod responses;

pub use requests::{AccountsQuery, CreateAccessRequestBody};
pub use responses::{AccountRowResponse, ErrorResponse};
