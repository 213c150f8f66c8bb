use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    #[serde(default)]
    pub corpus: CorpusSettings,
    #[serde(default)]
    pub matching: MatchingSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CorpusSettings {
    #[serde(default = "default_teachers_path")]
    pub teachers_path: PathBuf,
}

impl Default for CorpusSettings {
    fn default() -> Self {
        Self {
            teachers_path: default_teachers_path(),
        }
    }
}

fn default_teachers_path() -> PathBuf { PathBuf::from("data/teachers.json") }

#[derive(Debug, Clone, Deserialize)]
pub struct MatchingSettings {
    /// Applied when a request carries no limit; `None` returns every teacher
    pub default_limit: Option<u16>,
    #[serde(default = "default_max_limit")]
    pub max_limit: u16,
}

impl Default for MatchingSettings {
    fn default() -> Self {
        Self {
            default_limit: None,
            max_limit: default_max_limit(),
        }
    }
}

impl MatchingSettings {
    /// Whether a requested limit is within `1..=max_limit`
    pub fn accepts_limit(&self, requested: Option<u16>) -> bool {
        requested.map_or(true, |limit| (1..=self.max_limit).contains(&limit))
    }

    /// Resolve the number of results to return for an accepted request
    ///
    /// A configured `default_limit` above `max_limit` is capped.
    pub fn effective_limit(&self, requested: Option<u16>) -> Option<usize> {
        requested
            .or_else(|| self.default_limit.map(|limit| limit.min(self.max_limit)))
            .map(usize::from)
    }
}

fn default_max_limit() -> u16 { 100 }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

/// Output formatter selected by `logging.format` / `LOG_FORMAT`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Json,
    Pretty,
    /// Single-line text, for any unrecognised name
    Plain,
}

impl LogFormat {
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "json" => LogFormat::Json,
            "pretty" => LogFormat::Pretty,
            _ => LogFormat::Plain,
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with UNITINDER__)
    /// 5. TEACHERS_PATH
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., UNITINDER__SERVER__PORT -> server.port
            .add_source(env_source())
            .build()?;

        apply_env_overrides(settings)?.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(env_source())
            .build()?;

        apply_env_overrides(settings)?.try_deserialize()
    }
}

fn env_source() -> Environment {
    Environment::with_prefix("UNITINDER")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}

/// Apply well-known unprefixed environment variables on top of the layered config
fn apply_env_overrides(settings: Config) -> Result<Config, ConfigError> {
    let mut builder = Config::builder().add_source(settings);

    if let Ok(path) = std::env::var("TEACHERS_PATH") {
        builder = builder.set_override("corpus.teachers_path", path)?;
    }

    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matching() {
        let matching = MatchingSettings::default();
        assert_eq!(matching.default_limit, None);
        assert_eq!(matching.max_limit, 100);
    }

    #[test]
    fn test_effective_limit() {
        let matching = MatchingSettings {
            default_limit: Some(10),
            max_limit: 50,
        };

        assert_eq!(matching.effective_limit(None), Some(10));
        assert_eq!(matching.effective_limit(Some(20)), Some(20));

        let unlimited = MatchingSettings::default();
        assert_eq!(unlimited.effective_limit(None), None);

        let oversized_default = MatchingSettings {
            default_limit: Some(500),
            max_limit: 50,
        };
        assert_eq!(oversized_default.effective_limit(None), Some(50));
    }

    #[test]
    fn test_accepts_limit() {
        let matching = MatchingSettings {
            default_limit: None,
            max_limit: 2,
        };

        assert!(matching.accepts_limit(None));
        assert!(matching.accepts_limit(Some(1)));
        assert!(matching.accepts_limit(Some(2)));
        assert!(!matching.accepts_limit(Some(3)));
        assert!(!matching.accepts_limit(Some(0)));
    }

    #[test]
    fn test_default_logging() {
        let level = default_log_level();
        let format = default_log_format();
        assert_eq!(level, "info");
        assert_eq!(format, "json");
    }

    #[test]
    fn test_log_format_names() {
        assert_eq!(LogFormat::from_name(&default_log_format()), LogFormat::Json);
        assert_eq!(LogFormat::from_name("Pretty"), LogFormat::Pretty);
        assert_eq!(LogFormat::from_name("text"), LogFormat::Plain);
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!("unitinder-settings-{}.toml", std::process::id()));
        std::fs::write(
            &path,
            "[server]\nhost = \"127.0.0.1\"\nport = 9000\n\n[matching]\ndefault_limit = 5\n",
        )
        .unwrap();

        let settings = Settings::load_from(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(settings.server.port, 9000);
        assert_eq!(settings.matching.default_limit, Some(5));
        assert_eq!(settings.matching.max_limit, 100);
        assert_eq!(settings.logging.level, "info");
    }
}
