use anyhow::{Context, Result};
use config::{builder::DefaultState, Config, ConfigBuilder, Environment, File};
use serde::Deserialize;

/// Optional config file, looked up in the working directory.
const CONFIG_FILE: &str = "familiekalender";

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub port: u16,
    /// Postgres connection string; without it events live in memory.
    pub database_url: Option<String>,
    pub db_pool_size: usize,
    pub frontend_dir: String,
    /// Comma separated list; unset means permissive CORS.
    pub cors_allowed_origins: Option<String>,
}

impl AppConfig {
    /// Defaults, then `familiekalender.toml`, then environment variables
    /// (`PORT`, `DATABASE_URL`, `DB_POOL_SIZE`, `FRONTEND_DIR`,
    /// `CORS_ALLOWED_ORIGINS`).
    pub fn load() -> Result<Self> {
        let builder = Self::defaults()?
            .add_source(File::with_name(CONFIG_FILE).required(false))
            .add_source(Environment::default().try_parsing(true));
        Self::from_builder(builder)
    }

    fn defaults() -> Result<ConfigBuilder<DefaultState>> {
        Config::builder()
            .set_default("port", 8080)?
            .set_default("db_pool_size", 10)?
            .set_default("frontend_dir", "frontend/dist")
            .context("Failed to set configuration defaults")
    }

    fn from_builder(builder: ConfigBuilder<DefaultState>) -> Result<Self> {
        let config: AppConfig = builder
            .build()
            .context("Failed to read configuration")?
            .try_deserialize()
            .context("Invalid configuration")?;
        Ok(config.normalized())
    }

    fn normalized(mut self) -> Self {
        self.database_url = self.database_url.filter(|url| !url.trim().is_empty());
        self
    }

    /// Parsed `cors_allowed_origins`, empty entries dropped.
    pub fn cors_origins(&self) -> Option<Vec<String>> {
        self.cors_allowed_origins.as_ref().map(|origins| {
            origins
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::from_builder(AppConfig::defaults().unwrap()).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.db_pool_size, 10);
        assert_eq!(config.frontend_dir, "frontend/dist");
        assert!(config.database_url.is_none());
        assert!(config.cors_origins().is_none());
    }

    #[test]
    fn test_overrides_and_blank_database_url() {
        let builder = AppConfig::defaults()
            .unwrap()
            .set_override("port", 3000)
            .unwrap()
            .set_override("database_url", "  ")
            .unwrap()
            .set_override("cors_allowed_origins", "http://a.local, ,http://b.local")
            .unwrap();
        let config = AppConfig::from_builder(builder).unwrap();
        assert_eq!(config.port, 3000);
        assert!(config.database_url.is_none());
        assert_eq!(
            config.cors_origins().unwrap(),
            vec!["http://a.local".to_string(), "http://b.local".to_string()]
        );
    }
}
