use std::{env, time::Duration};

pub const DEFAULT_ENDPOINT: &str = "https://randomuser.me/api";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_INITIAL_PEOPLE: usize = 3;

/// Board configuration sourced from the environment.
#[derive(Debug, Clone, PartialEq)]
pub struct BoardConfig {
    /// Random-user API queried by "add person"
    pub endpoint: String,
    /// HTTP client timeout for a single fetch
    pub timeout: Duration,
    /// People fetched before the first command
    pub initial_people: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            initial_people: DEFAULT_INITIAL_PEOPLE,
        }
    }
}

impl BoardConfig {
    /// Read `WEALTH_BOARD_*` variables, falling back to defaults for anything
    /// missing or unparsable.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let endpoint = lookup("WEALTH_BOARD_ENDPOINT")
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

        let timeout = lookup("WEALTH_BOARD_TIMEOUT_SECS")
            .and_then(|value| value.trim().parse::<u64>().ok())
            .filter(|value| *value > 0)
            .map(Duration::from_secs)
            .unwrap_or_else(|| Duration::from_secs(DEFAULT_TIMEOUT_SECS));

        let initial_people = lookup("WEALTH_BOARD_INITIAL_PEOPLE")
            .and_then(|value| value.trim().parse::<usize>().ok())
            .unwrap_or(DEFAULT_INITIAL_PEOPLE);

        BoardConfig {
            endpoint,
            timeout,
            initial_people,
        }
    }

    /// Apply command-line overrides on top of the environment.
    pub fn with_overrides(mut self, endpoint: Option<String>, initial_people: Option<usize>) -> Self {
        if let Some(endpoint) = endpoint {
            self.endpoint = endpoint;
        }
        if let Some(initial_people) = initial_people {
            self.initial_people = initial_people;
        }
        self
    }
}
