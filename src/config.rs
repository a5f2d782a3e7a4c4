// =============================================================================
// Run configuration: built-in defaults, optionally overridden by a TOML file
// =============================================================================

use crate::error::SumsError;
use crate::fork_join::Backend;
use crate::report::Language;
use crate::triangular::cumulative_closed_form;
use log::{debug, info};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Looked up in the search directory when no path is given explicitly.
pub const DEFAULT_CONFIG_FILE: &str = "parallel_sums.toml";
pub const DEFAULT_MAX_NUMBER: u64 = 100_000;
pub const DEFAULT_THREADS: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Upper bound of the range `[1, max_number]`.
    pub max_number: u64,
    pub backend: Backend,
    /// Worker count for the rayon backend.
    pub threads: usize,
    pub language: Language,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_number: DEFAULT_MAX_NUMBER,
            backend: Backend::default(),
            threads: DEFAULT_THREADS,
            language: Language::default(),
        }
    }
}

impl Config {
    pub fn from_toml_str(content: &str) -> Result<Self, SumsError> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, SumsError> {
        let content = fs::read_to_string(path).map_err(|source| SumsError::ReadConfig {
            path: path.to_path_buf(),
            source,
        })?;
        info!("loading config from {}", path.display());
        Self::from_toml_str(&content)
    }

    /// An explicit path must exist. Otherwise `DEFAULT_CONFIG_FILE` in
    /// `search_dir` is used if present, and the defaults if not.
    pub fn load(explicit: Option<&Path>, search_dir: &Path) -> Result<Self, SumsError> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        let candidate = search_dir.join(DEFAULT_CONFIG_FILE);
        if candidate.is_file() {
            return Self::from_file(&candidate);
        }

        debug!("no {} in {}, using defaults", DEFAULT_CONFIG_FILE, search_dir.display());
        let config = Config::default();
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), SumsError> {
        if self.max_number == 0 {
            return Err(SumsError::invalid_config("max_number", "must be at least 1"));
        }

        // The sequential accumulator holds the largest total of the run.
        let fits = cumulative_closed_form(self.max_number)
            .map_or(false, |total| total <= u64::MAX as u128);
        if !fits {
            return Err(SumsError::invalid_config(
                "max_number",
                format!(
                    "{} overflows a 64-bit accumulator (largest supported is {})",
                    self.max_number,
                    largest_supported_max()
                ),
            ));
        }

        if self.threads < 2 {
            return Err(SumsError::invalid_config(
                "threads",
                format!("must be at least 2, got {}", self.threads),
            ));
        }

        Ok(())
    }
}

/// Largest `max_number` whose cumulative total still fits in a `u64`.
pub fn largest_supported_max() -> u64 {
    let fits = |n: u64| cumulative_closed_form(n).map_or(false, |total| total <= u64::MAX as u128);

    let (mut low, mut high) = (1u64, u64::MAX);
    while low < high {
        let mid = low + (high - low + 1) / 2;
        if fits(mid) {
            low = mid;
        } else {
            high = mid - 1;
        }
    }
    low
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{tempdir, NamedTempFile};

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.max_number, 100_000);
        assert_eq!(config.backend, Backend::Rayon);
        assert_eq!(config.threads, 2);
        assert_eq!(config.language, Language::En);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_toml_gives_defaults() {
        assert_eq!(Config::from_toml_str("").unwrap(), Config::default());
    }

    #[test]
    fn test_full_toml() {
        let content = r#"
            max_number = 10
            backend = "scoped-threads"
            threads = 4
            language = "ru"
        "#;
        let config = Config::from_toml_str(content).unwrap();
        assert_eq!(
            config,
            Config {
                max_number: 10,
                backend: Backend::ScopedThreads,
                threads: 4,
                language: Language::Ru,
            }
        );
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = Config::from_toml_str("max_numbr = 10").unwrap_err();
        assert!(matches!(err, SumsError::ParseConfig(_)));
    }

    #[test]
    fn test_negative_max_rejected() {
        let err = Config::from_toml_str("max_number = -5").unwrap_err();
        assert!(matches!(err, SumsError::ParseConfig(_)));
    }

    #[test]
    fn test_unknown_backend_rejected() {
        let err = Config::from_toml_str(r#"backend = "tokio""#).unwrap_err();
        assert!(matches!(err, SumsError::ParseConfig(_)));
    }

    #[test]
    fn test_zero_max_rejected() {
        let err = Config::from_toml_str("max_number = 0").unwrap_err();
        assert!(matches!(
            err,
            SumsError::InvalidConfig {
                field: "max_number",
                ..
            }
        ));
    }

    #[test]
    fn test_single_thread_rejected() {
        let err = Config::from_toml_str("threads = 1").unwrap_err();
        assert!(matches!(err, SumsError::InvalidConfig { field: "threads", .. }));
    }

    #[test]
    fn test_overflow_boundary() {
        assert_eq!(largest_supported_max(), 4_801_278);

        let at_limit = Config {
            max_number: 4_801_278,
            ..Config::default()
        };
        assert!(at_limit.validate().is_ok());

        let past_limit = Config {
            max_number: 4_801_279,
            ..Config::default()
        };
        let err = past_limit.validate().unwrap_err();
        assert!(err.to_string().contains("4801278"));

        let huge = Config {
            max_number: u64::MAX,
            ..Config::default()
        };
        assert!(huge.validate().is_err());
    }

    #[test]
    fn test_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "max_number = 42").unwrap();

        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.max_number, 42);
    }

    #[test]
    fn test_missing_explicit_file() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("nope.toml");

        let err = Config::load(Some(&missing), dir.path()).unwrap_err();
        assert!(matches!(err, SumsError::ReadConfig { .. }));
    }

    #[test]
    fn test_load_discovers_default_file() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join(DEFAULT_CONFIG_FILE), "language = \"ru\"\n").unwrap();

        let config = Config::load(None, dir.path()).unwrap();
        assert_eq!(config.language, Language::Ru);
        assert_eq!(config.max_number, DEFAULT_MAX_NUMBER);
    }

    #[test]
    fn test_load_falls_back_to_defaults() {
        let dir = tempdir().unwrap();
        assert_eq!(Config::load(None, dir.path()).unwrap(), Config::default());
    }

    #[test]
    fn test_explicit_path_wins_over_discovery() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join(DEFAULT_CONFIG_FILE), "max_number = 7\n").unwrap();
        let explicit = dir.path().join("other.toml");
        std::fs::write(&explicit, "max_number = 9\n").unwrap();

        let config = Config::load(Some(&explicit), dir.path()).unwrap();
        assert_eq!(config.max_number, 9);
    }
}
