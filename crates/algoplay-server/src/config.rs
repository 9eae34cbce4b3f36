//! Server configuration

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::net::SocketAddr;
use std::path::Path;

/// Default listen port
pub const DEFAULT_PORT: u16 = 2344;

/// Default listen host
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Deployment environment, selected by `ALGOPLAY_ENV`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development, verbose logging
    #[default]
    Development,
    /// Deployed service, warnings and errors only
    Production,
    /// Test runs, verbose logging
    Testing,
}

impl Environment {
    /// Resolve an environment name; unknown names fall back to development
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "production" => Self::Production,
            "testing" => Self::Testing,
            "development" => Self::Development,
            other => {
                tracing::warn!("Unknown environment '{}', using development", other);
                Self::Development
            }
        }
    }

    /// Lowercase name
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Production => "production",
            Self::Testing => "testing",
        }
    }

    /// Whether debug behaviour is on
    pub fn is_debug(&self) -> bool {
        !matches!(self, Self::Production)
    }

    /// Log level used when none is configured
    pub fn default_log_level(&self) -> &'static str {
        match self {
            Self::Production => "warn",
            Self::Development | Self::Testing => "debug",
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Explicit level filter; falls back to the environment default
    pub level: Option<String>,
    /// Whether to also append logs to `file`
    pub to_file: bool,
    /// Log file path
    pub file: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: None,
            to_file: true,
            file: "app.log".to_string(),
        }
    }
}

/// CORS configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CorsConfig {
    /// Allowed origins; `*` allows any origin
    pub origins: Vec<String>,
    /// Allowed methods
    pub methods: Vec<String>,
    /// Allowed request headers
    pub allow_headers: Vec<String>,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            origins: vec!["*".to_string()],
            methods: vec!["GET".to_string(), "POST".to_string(), "OPTIONS".to_string()],
            allow_headers: vec!["Content-Type".to_string(), "Authorization".to_string()],
        }
    }
}

impl CorsConfig {
    /// Whether any origin is allowed
    pub fn allows_any_origin(&self) -> bool {
        self.origins.iter().any(|o| o == "*")
    }
}

/// `[server]` section of the config file
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct ServerSection {
    host: Option<String>,
    port: Option<u16>,
    environment: Option<Environment>,
}

/// Config file structure (`config/server.toml`)
#[derive(Debug, Default, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    server: ServerSection,
    #[serde(default)]
    log: LogConfig,
    #[serde(default)]
    cors: CorsConfig,
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address
    pub addr: SocketAddr,
    /// Deployment environment
    pub environment: Environment,
    /// Logging configuration
    pub log: LogConfig,
    /// CORS configuration
    pub cors: CorsConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([0, 0, 0, 0], DEFAULT_PORT)),
            environment: Environment::default(),
            log: LogConfig::default(),
            cors: CorsConfig::default(),
        }
    }
}

impl Config {
    /// Load the optional `server.toml` from `config_dir`
    /// Returns None if the file doesn't exist or can't be parsed
    pub fn from_file(config_dir: impl AsRef<Path>) -> Option<ConfigFile> {
        let config_path = config_dir.as_ref().join("server.toml");

        if !config_path.exists() {
            tracing::debug!("Config file not found: {:?}", config_path);
            return None;
        }

        match std::fs::read_to_string(&config_path) {
            Ok(content) => match toml::from_str::<ConfigFile>(&content) {
                Ok(file) => {
                    tracing::info!("Loaded configuration from {:?}", config_path);
                    Some(file)
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config file {:?}: {}", config_path, e);
                    None
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config file {:?}: {}", config_path, e);
                None
            }
        }
    }

    /// Load configuration from `config/server.toml` and environment variables
    /// Priority: Environment variables > config file > defaults
    pub fn from_env() -> anyhow::Result<Self> {
        Self::load("config")
    }

    /// Same as [`Config::from_env`] with an explicit config directory
    pub fn load(config_dir: impl AsRef<Path>) -> anyhow::Result<Self> {
        let file = Self::from_file(config_dir).unwrap_or_default();

        let environment = match std::env::var("ALGOPLAY_ENV") {
            Ok(name) => Environment::from_name(&name),
            Err(_) => file.server.environment.unwrap_or_default(),
        };

        let host = std::env::var("HOST")
            .ok()
            .or(file.server.host)
            .unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = match std::env::var("PORT") {
            Ok(port) => port
                .trim()
                .parse::<u16>()
                .with_context(|| format!("Invalid PORT '{}'", port))?,
            Err(_) => file.server.port.unwrap_or(DEFAULT_PORT),
        };
        let addr = format!("{}:{}", host, port)
            .parse::<SocketAddr>()
            .with_context(|| format!("Invalid bind address {}:{}", host, port))?;

        let mut log = file.log;
        if let Ok(level) = std::env::var("ALGOPLAY_LOG_LEVEL") {
            log.level = Some(level);
        }
        if let Ok(to_file) = std::env::var("ALGOPLAY_LOG_TO_FILE") {
            match to_file.trim().to_ascii_lowercase().parse::<bool>() {
                Ok(value) => log.to_file = value,
                Err(_) => tracing::warn!(
                    "Invalid ALGOPLAY_LOG_TO_FILE '{}', keeping {}",
                    to_file,
                    log.to_file
                ),
            }
        }
        if let Ok(path) = std::env::var("ALGOPLAY_LOG_FILE") {
            log.file = path;
        }

        let mut cors = file.cors;
        if let Ok(origins) = std::env::var("CORS_ORIGINS") {
            cors.origins = origins
                .split(',')
                .map(str::trim)
                .filter(|o| !o.is_empty())
                .map(String::from)
                .collect();
        }

        Ok(Self {
            addr,
            environment,
            log,
            cors,
        })
    }

    /// Effective log level
    pub fn log_level(&self) -> &str {
        self.log
            .level
            .as_deref()
            .unwrap_or_else(|| self.environment.default_log_level())
    }

    /// Listen port
    pub fn port(&self) -> u16 {
        self.addr.port()
    }

    /// Set a new bind address
    pub fn with_addr(mut self, addr: SocketAddr) -> Self {
        self.addr = addr;
        self
    }

    /// Set the environment
    pub fn with_environment(mut self, environment: Environment) -> Self {
        self.environment = environment;
        self
    }

    /// Replace the allowed CORS origins
    pub fn with_cors_origins<I, S>(mut self, origins: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.cors.origins = origins.into_iter().map(Into::into).collect();
        self
    }

    /// Disable or enable file logging
    pub fn with_log_to_file(mut self, to_file: bool) -> Self {
        self.log.to_file = to_file;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::net::{IpAddr, Ipv4Addr};

    const ENV_VARS: &[&str] = &[
        "ALGOPLAY_ENV",
        "HOST",
        "PORT",
        "ALGOPLAY_LOG_LEVEL",
        "ALGOPLAY_LOG_TO_FILE",
        "ALGOPLAY_LOG_FILE",
        "CORS_ORIGINS",
    ];

    fn clear_env() {
        for var in ENV_VARS {
            unsafe {
                std::env::remove_var(var);
            }
        }
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.addr.port(), 2344);
        assert_eq!(config.addr.ip(), IpAddr::V4(Ipv4Addr::new(0, 0, 0, 0)));
        assert_eq!(config.environment, Environment::Development);
        assert_eq!(config.log_level(), "debug");
        assert!(config.log.to_file);
        assert_eq!(config.log.file, "app.log");
        assert!(config.cors.allows_any_origin());
    }

    #[test]
    fn test_environment_from_name() {
        assert_eq!(Environment::from_name("production"), Environment::Production);
        assert_eq!(Environment::from_name("PRODUCTION"), Environment::Production);
        assert_eq!(Environment::from_name("testing"), Environment::Testing);
        assert_eq!(Environment::from_name("staging"), Environment::Development);
    }

    #[test]
    fn test_environment_defaults() {
        assert!(!Environment::Production.is_debug());
        assert!(Environment::Testing.is_debug());
        assert_eq!(Environment::Production.default_log_level(), "warn");
        assert_eq!(Environment::Development.default_log_level(), "debug");
    }

    #[test]
    fn test_config_chaining() {
        let new_addr = "10.0.0.1:9000".parse().unwrap();
        let config = Config::default()
            .with_addr(new_addr)
            .with_environment(Environment::Production)
            .with_cors_origins(["https://a.example", "https://b.example"])
            .with_log_to_file(false);

        assert_eq!(config.addr, new_addr);
        assert_eq!(config.port(), 9000);
        assert_eq!(config.log_level(), "warn");
        assert!(!config.cors.allows_any_origin());
        assert_eq!(config.cors.origins.len(), 2);
        assert!(!config.log.to_file);
    }

    #[test]
    fn test_explicit_log_level_wins() {
        let mut config = Config::default().with_environment(Environment::Production);
        config.log.level = Some("info".to_string());
        assert_eq!(config.log_level(), "info");
    }

    #[test]
    fn test_from_file_not_found() {
        assert!(Config::from_file("/nonexistent/path").is_none());
    }

    #[test]
    fn test_from_file_invalid_toml() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("server.toml"), "invalid toml content [").unwrap();

        assert!(Config::from_file(dir.path()).is_none());
    }

    #[test]
    #[serial]
    fn test_load_from_file() {
        clear_env();
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("server.toml"),
            r#"
[server]
host = "127.0.0.1"
port = 8080
environment = "production"

[log]
level = "info"
to_file = false
file = "logs/algoplay.log"

[cors]
origins = ["https://visualizer.example"]
"#,
        )
        .unwrap();

        let config = Config::load(dir.path()).unwrap();
        assert_eq!(config.addr, "127.0.0.1:8080".parse().unwrap());
        assert_eq!(config.environment, Environment::Production);
        assert_eq!(config.log_level(), "info");
        assert!(!config.log.to_file);
        assert_eq!(config.log.file, "logs/algoplay.log");
        assert_eq!(config.cors.origins, vec!["https://visualizer.example"]);
        // Unset keys keep their defaults
        assert_eq!(config.cors.methods, CorsConfig::default().methods);
    }

    #[test]
    #[serial]
    fn test_load_partial_file() {
        clear_env();
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("server.toml"), "[server]\nport = 3000\n").unwrap();

        let config = Config::load(dir.path()).unwrap();
        assert_eq!(config.port(), 3000);
        assert_eq!(config.addr.ip(), IpAddr::V4(Ipv4Addr::new(0, 0, 0, 0)));
        assert_eq!(config.environment, Environment::Development);
        assert!(config.log.to_file);
    }

    #[test]
    #[serial]
    fn test_env_overrides_file() {
        clear_env();
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("server.toml"),
            "[server]\nport = 3000\nenvironment = \"production\"\n",
        )
        .unwrap();

        unsafe {
            std::env::set_var("PORT", "4000");
            std::env::set_var("HOST", "127.0.0.1");
            std::env::set_var("ALGOPLAY_ENV", "testing");
            std::env::set_var("ALGOPLAY_LOG_TO_FILE", "false");
            std::env::set_var("CORS_ORIGINS", "https://a.example, https://b.example");
        }

        let config = Config::load(dir.path()).unwrap();
        clear_env();

        assert_eq!(config.addr, "127.0.0.1:4000".parse().unwrap());
        assert_eq!(config.environment, Environment::Testing);
        assert!(!config.log.to_file);
        assert_eq!(
            config.cors.origins,
            vec!["https://a.example", "https://b.example"]
        );
    }

    #[test]
    #[serial]
    fn test_load_defaults_without_file_or_env() {
        clear_env();
        let dir = tempfile::tempdir().unwrap();

        let config = Config::load(dir.path()).unwrap();
        assert_eq!(config.port(), DEFAULT_PORT);
        assert_eq!(config.environment, Environment::Development);
    }

    #[test]
    #[serial]
    fn test_invalid_log_to_file_keeps_current_value() {
        clear_env();
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("server.toml"), "[log]\nto_file = false\n").unwrap();

        unsafe {
            std::env::set_var("ALGOPLAY_LOG_TO_FILE", "maybe");
        }
        let config = Config::load(dir.path()).unwrap();
        assert!(!config.log.to_file);

        unsafe {
            std::env::set_var("ALGOPLAY_LOG_TO_FILE", " TRUE ");
        }
        let config = Config::load(dir.path()).unwrap();
        clear_env();
        assert!(config.log.to_file);
    }

    #[test]
    #[serial]
    fn test_invalid_port_is_an_error() {
        clear_env();
        unsafe {
            std::env::set_var("PORT", "not-a-port");
        }

        let result = Config::load("/nonexistent/path");
        clear_env();

        let err = result.unwrap_err();
        assert!(err.to_string().contains("Invalid PORT"));
    }
}
