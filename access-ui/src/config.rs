#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub api_base_url: String,
    /// Shown on the request form as the requester
    pub requester_name: String,
}

const DEFAULT_API_SERVER: &str = "http://localhost:8090";
const DEFAULT_REQUESTER_NAME: &str = "Current User";

impl Config {
    pub fn new(api_server: impl Into<String>, requester_name: impl Into<String>) -> Self {
        let api_server = api_server.into();
        let api_base_url = format!("{}{}", api_server.trim_end_matches('/'), "/api");
        Self {
            api_base_url,
            requester_name: requester_name.into(),
        }
    }

    pub fn from_env() -> Self {
        let api_server =
            std::env::var("ACCESS_API_SERVER").unwrap_or_else(|_| DEFAULT_API_SERVER.to_string());
        let requester_name = std::env::var("ACCESS_REQUESTER_NAME")
            .unwrap_or_else(|_| DEFAULT_REQUESTER_NAME.to_string());

        Self::new(api_server, requester_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_base_url() {
        let config = Config::new("https://access.example.com/", "Dana Reyes");
        assert_eq!(config.api_base_url, "https://access.example.com/api");
        assert_eq!(config.requester_name, "Dana Reyes");
    }
}
