use std::env;

pub const DEFAULT_API_URL: &str = "http://localhost:5000/api/todos";

/// Where the client finds the todo collection.
///
/// `TASKO_API_URL` overrides the default; a trailing slash is dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

impl ClientConfig {
    #[must_use]
    pub fn new(api_url: impl AsRef<str>) -> Self {
        Self {
            api_url: api_url.as_ref().trim().trim_end_matches('/').to_string(),
        }
    }

    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        lookup("TASKO_API_URL")
            .filter(|value| !value.trim().is_empty())
            .map_or_else(Self::default, Self::new)
    }
}
