// application/src/lib.rs
pub mod error;
pub mod form;
pub mod search;
pub mod usecases;

#[cfg(test)]
pub(crate) mod fakes;

use access::{AccessRequestGateway, AccountDirectory};
use std::sync::Arc;
use usecases::{SearchAccountsUseCase, SubmitAccessRequestUseCase};

pub use error::FormError;
pub use form::AccessRequestForm;
pub use search::{AccountQuery, FetchState, SearchTicket};

#[derive(Clone)]
pub struct Application {
    pub search: SearchAccountsUseCase,
    pub submit: SubmitAccessRequestUseCase,
}

impl Application {
    pub fn new(
        directory: Arc<dyn AccountDirectory>,
        gateway: Arc<dyn AccessRequestGateway>,
    ) -> Self {
        Self {
            search: SearchAccountsUseCase::new(directory),
            submit: SubmitAccessRequestUseCase::new(gateway),
        }
    }
}
