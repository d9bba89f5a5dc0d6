pub mod request_client_access;

pub use request_client_access::RequestClientAccess;
