//! Configuration loading
//!
//! Every setting resolves in the same priority order:
//! 1. Command-line argument / environment variable (parsed by the binary)
//! 2. TOML config file
//! 3. Compiled default

use crate::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_DB_NAME: &str = "showbill";
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// `[logging]` table of the TOML config file
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct LoggingConfig {
    pub level: Option<String>,
    pub file: Option<PathBuf>,
}

/// Contents of the optional TOML config file
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct TomlConfig {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub database_url: Option<String>,
    pub db_dir: Option<PathBuf>,
    pub db_name: Option<String>,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl TomlConfig {
    /// Parse a config file that must exist
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| Error::Config(format!("Invalid config file {}: {}", path.display(), e)))
    }

    /// Parse a config file if present; a missing file yields empty config
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load(path)
    }

    /// Platform config file location (`<config_dir>/showbill/config.toml`)
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("showbill").join("config.toml"))
    }
}

/// Values supplied on the command line or through the environment
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub database_url: Option<String>,
    pub db_dir: Option<PathBuf>,
    pub db_name: Option<String>,
    pub log_level: Option<String>,
    pub log_file: Option<PathBuf>,
}

/// Fallback values compiled into the binary
#[derive(Debug, Clone)]
pub struct CompiledDefaults {
    pub host: String,
    pub port: u16,
    pub db_dir: PathBuf,
    pub db_name: String,
    pub log_level: String,
}

impl CompiledDefaults {
    pub fn for_current_platform() -> Self {
        // ~/.local/share/showbill, ~/Library/Application Support/showbill, %LOCALAPPDATA%\showbill
        let db_dir = dirs::data_local_dir()
            .map(|d| d.join("showbill"))
            .unwrap_or_else(|| PathBuf::from("./showbill_data"));

        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            db_dir,
            db_name: DEFAULT_DB_NAME.to_string(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

/// Where the database lives
#[derive(Debug, Clone, PartialEq)]
pub struct DatabaseConfig {
    /// Full connection URL; takes precedence over `dir` + `name`
    pub url: Option<String>,
    pub dir: PathBuf,
    pub name: String,
}

impl DatabaseConfig {
    /// Compose the connection string handed to the pool
    pub fn connection_url(&self) -> String {
        match &self.url {
            Some(url) => url.clone(),
            None => format!("sqlite://{}", self.database_path().display()),
        }
    }

    /// Database file composed from directory and name
    pub fn database_path(&self) -> PathBuf {
        self.dir.join(format!("{}.db", self.name))
    }

    fn validate(&self) -> Result<()> {
        if self.url.is_some() {
            return Ok(());
        }
        if self.name.trim().is_empty() {
            return Err(Error::Config("Database name must not be empty".to_string()));
        }
        if self.name.contains(['/', '\\']) {
            return Err(Error::Config(format!(
                "Database name must not contain path separators: {}",
                self.name
            )));
        }
        Ok(())
    }
}

/// Fully resolved service configuration
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceConfig {
    pub host: String,
    pub port: u16,
    pub database: DatabaseConfig,
    pub log_level: String,
    pub log_file: Option<PathBuf>,
}

impl ServiceConfig {
    /// Merge overrides, config file and defaults (in that priority order)
    pub fn resolve(
        overrides: ConfigOverrides,
        file: TomlConfig,
        defaults: CompiledDefaults,
    ) -> Result<Self> {
        let database = DatabaseConfig {
            url: overrides.database_url.or(file.database_url),
            dir: overrides.db_dir.or(file.db_dir).unwrap_or(defaults.db_dir),
            name: overrides.db_name.or(file.db_name).unwrap_or(defaults.db_name),
        };
        database.validate()?;

        Ok(Self {
            host: overrides.host.or(file.host).unwrap_or(defaults.host),
            port: overrides.port.or(file.port).unwrap_or(defaults.port),
            database,
            log_level: overrides
                .log_level
                .or(file.logging.level)
                .unwrap_or(defaults.log_level),
            log_file: overrides.log_file.or(file.logging.file),
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
