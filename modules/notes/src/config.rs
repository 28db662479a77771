use std::env;
use std::path::PathBuf;

/// Environment variable names - single source of truth
pub mod env_vars {
    pub const HOST: &str = "NOTES_HOST";
    pub const PORT: &str = "NOTES_PORT";
    pub const NOTES_DIR: &str = "NOTES_DIR";
    /// Flat file with one valid token per line
    pub const TOKENS_FILE: &str = "NOTES_TOKENS_FILE";
}

/// Default values
pub mod defaults {
    pub const HOST: &str = "127.0.0.1";
    pub const PORT: u16 = 8000;
    pub const NOTES_DIR: &str = "notes";
    pub const TOKENS_FILE: &str = "tokens.txt";
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub notes_dir: PathBuf,
    pub tokens_file: PathBuf,
}

impl Config {
    /// Read configuration from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup, falling back to defaults
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup(env_vars::HOST)
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| defaults::HOST.to_string());

        let port = lookup(env_vars::PORT)
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults::PORT);

        let notes_dir = lookup(env_vars::NOTES_DIR)
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| defaults::NOTES_DIR.to_string());

        let tokens_file = lookup(env_vars::TOKENS_FILE)
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| defaults::TOKENS_FILE.to_string());

        Self {
            host,
            port,
            notes_dir: PathBuf::from(notes_dir),
            tokens_file: PathBuf::from(tokens_file),
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
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
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(|_| None);
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8000);
        assert_eq!(config.notes_dir, PathBuf::from("notes"));
        assert_eq!(config.tokens_file, PathBuf::from("tokens.txt"));
        assert_eq!(config.bind_addr(), "127.0.0.1:8000");
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            (env_vars::HOST, "0.0.0.0"),
            (env_vars::PORT, "9200"),
            (env_vars::NOTES_DIR, "/var/lib/notes"),
            (env_vars::TOKENS_FILE, "/etc/notes/tokens"),
        ]));
        assert_eq!(config.bind_addr(), "0.0.0.0:9200");
        assert_eq!(config.notes_dir, PathBuf::from("/var/lib/notes"));
        assert_eq!(config.tokens_file, PathBuf::from("/etc/notes/tokens"));
    }

    #[test]
    fn test_bad_port_falls_back() {
        let config = Config::from_lookup(lookup_from(&[(env_vars::PORT, "not-a-port")]));
        assert_eq!(config.port, defaults::PORT);
    }
}
