// shared/src/lib.rs

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("transport: {0}")]
    Transport(String),
    #[error("remote service returned {status}: {message}")]
    Remote { status: u16, message: String },
    #[error("decode: {0}")]
    Decode(String),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remote_error_message() {
        let err = Error::Remote {
            status: 503,
            message: "maintenance".to_string(),
        };
        assert_eq!(err.to_string(), "remote service returned 503: maintenance");
    }
}
