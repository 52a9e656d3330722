use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2";
pub const DEFAULT_PAGE_SIZE: usize = 52;
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);
pub const DEFAULT_LOG_FILE: &str = "dexbrowse.log";

/// Runtime settings, read from environment variables.
///
/// | variable                     | default                     |
/// |------------------------------|-----------------------------|
/// | `POKEAPI_BASE_URL`           | `https://pokeapi.co/api/v2` |
/// | `POKEMON_LIMIT`              | `52`                        |
/// | `POKEMON_FETCH_TIMEOUT_SECS` | `10`                        |
/// | `DEXBROWSE_LOG`              | `dexbrowse.log`             |
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub base_url: String,
    pub page_size: usize,
    /// Deadline for the whole catalog fetch.
    pub timeout: Duration,
    pub log_file: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            timeout: DEFAULT_TIMEOUT,
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary key lookup. Missing or
    /// unparseable values keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(url) = lookup("POKEAPI_BASE_URL").filter(|s| !s.trim().is_empty()) {
            config.base_url = url.trim().trim_end_matches('/').to_string();
        }
        if let Some(limit) = lookup("POKEMON_LIMIT")
            .and_then(|s| s.trim().parse::<usize>().ok())
            .filter(|&n| n > 0)
        {
            config.page_size = limit;
        }
        if let Some(secs) = lookup("POKEMON_FETCH_TIMEOUT_SECS")
            .and_then(|s| s.trim().parse::<u64>().ok())
            .filter(|&n| n > 0)
        {
            config.timeout = Duration::from_secs(secs);
        }
        if let Some(path) = lookup("DEXBROWSE_LOG").filter(|s| !s.is_empty()) {
            config.log_file = PathBuf::from(path);
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = Config::from_lookup(|_| None);
        assert_eq!(config, Config::default());
        assert_eq!(config.page_size, 52);
        assert_eq!(config.timeout, Duration::from_secs(10));
    }

    #[test]
    fn reads_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("POKEAPI_BASE_URL", "http://localhost:9000/api/v2/"),
            ("POKEMON_LIMIT", "151"),
            ("POKEMON_FETCH_TIMEOUT_SECS", "3"),
            ("DEXBROWSE_LOG", "/tmp/dex.log"),
        ]));
        assert_eq!(config.base_url, "http://localhost:9000/api/v2");
        assert_eq!(config.page_size, 151);
        assert_eq!(config.timeout, Duration::from_secs(3));
        assert_eq!(config.log_file, PathBuf::from("/tmp/dex.log"));
    }

    #[test]
    fn garbage_falls_back() {
        let config = Config::from_lookup(lookup_from(&[
            ("POKEMON_LIMIT", "lots"),
            ("POKEMON_FETCH_TIMEOUT_SECS", "0"),
        ]));
        assert_eq!(config.page_size, DEFAULT_PAGE_SIZE);
        assert_eq!(config.timeout, DEFAULT_TIMEOUT);
    }
}
