use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context};
use serde::Deserialize;

const DEFAULT_ENV: &str = "local";
const ENV_VAR_NAME: &str = "BOOKSTORE_ENV";
const CONFIG_DIR_ENV: &str = "BOOKSTORE_CONFIG_DIR";
const ENV_PREFIX: &str = "BOOKSTORE";

/// Deployment environment the application is running in.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Local,
    Staging,
    Production,
}

impl Environment {
    fn parse(value: &str) -> anyhow::Result<Self> {
        match value {
            "local" => Ok(Environment::Local),
            "staging" => Ok(Environment::Staging),
            "production" => Ok(Environment::Production),
            other => Err(anyhow!(
                "unsupported environment '{}'; expected local/staging/production",
                other
            )),
        }
    }
}

/// Top-level configuration structure loaded from layered sources.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Settings {
    #[serde(default)]
    pub environment: Environment,
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub telemetry: TelemetrySettings,
    #[serde(default)]
    pub graphql: GraphqlSettings,
    #[serde(default)]
    pub store: StoreSettings,
}

impl Settings {
    /// Load configuration by layering `.env`, base file, and environment overlay.
    pub fn load() -> anyhow::Result<Self> {
        // Allow missing `.env` files without failing.
        let _ = dotenvy::dotenv();

        let environment = std::env::var(ENV_VAR_NAME).unwrap_or_else(|_| DEFAULT_ENV.to_string());
        let config_dir = match std::env::var(CONFIG_DIR_ENV) {
            Ok(dir) => PathBuf::from(dir),
            Err(_) => std::env::current_dir()
                .with_context(|| "unable to resolve current directory")?
                .join("config"),
        };

        Self::load_from(&config_dir, &environment)
    }

    /// Load `base.toml` and `{environment}.toml` from `config_dir`, then apply
    /// `BOOKSTORE_<SECTION>__<KEY>` environment overrides.
    pub fn load_from(config_dir: &Path, environment: &str) -> anyhow::Result<Self> {
        let parsed_environment = Environment::parse(environment)?;

        let base_path = config_dir.join("base.toml");
        let environment_path = config_dir.join(format!("{}.toml", environment));

        let builder = config::Config::builder()
            .add_source(config::File::from(base_path).required(false))
            .add_source(config::File::from(environment_path).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__"),
            );

        let cfg = builder
            .build()
            .with_context(|| "failed to build configuration")?;

        let mut settings: Settings = cfg
            .try_deserialize()
            .with_context(|| "failed to deserialize configuration")?;

        settings.environment = parsed_environment;

        Ok(settings)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "ServerSettings::default_host")]
    pub host: String,
    #[serde(default = "ServerSettings::default_port")]
    pub port: u16,
    #[serde(default = "ServerSettings::default_request_timeout_ms")]
    pub request_timeout_ms: u64,
}

impl ServerSettings {
    fn default_host() -> String {
        "0.0.0.0".to_string()
    }

    fn default_port() -> u16 {
        8080
    }

    fn default_request_timeout_ms() -> u64 {
        15000
    }
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: Self::default_host(),
            port: Self::default_port(),
            request_timeout_ms: Self::default_request_timeout_ms(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct TelemetrySettings {
    #[serde(default = "TelemetrySettings::default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub log_format: LogFormat,
}

impl TelemetrySettings {
    fn default_log_level() -> String {
        "info".to_string()
    }
}

impl Default for TelemetrySettings {
    fn default() -> Self {
        Self {
            log_level: Self::default_log_level(),
            log_format: LogFormat::Pretty,
        }
    }
}

#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// GraphQL endpoint settings.
#[derive(Debug, Clone, Deserialize)]
pub struct GraphqlSettings {
    /// Path serving both queries and mutations.
    #[serde(default = "GraphqlSettings::default_path")]
    pub path: String,
    /// Serve the GraphiQL playground on `GET {path}`.
    #[serde(default = "GraphqlSettings::default_playground")]
    pub playground: bool,
}

impl GraphqlSettings {
    fn default_path() -> String {
        "/graphql".to_string()
    }

    fn default_playground() -> bool {
        true
    }
}

impl Default for GraphqlSettings {
    fn default() -> Self {
        Self {
            path: Self::default_path(),
            playground: Self::default_playground(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct StoreSettings {
    /// JSON file holding an array of book records loaded at startup.
    #[serde(default)]
    pub seed_path: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "bookstore-settings-{}-{}",
            name,
            std::process::id()
        ));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn default_environment_is_local() {
        let settings = Settings::default();
        assert_eq!(settings.environment, Environment::Local);
    }

    #[test]
    fn default_graphql_path() {
        let settings = Settings::default();
        assert_eq!(settings.graphql.path, "/graphql");
        assert!(settings.graphql.playground);
        assert!(settings.store.seed_path.is_none());
    }

    #[test]
    fn environment_file_overlays_base() {
        let dir = scratch_dir("overlay");
        fs::write(
            dir.join("base.toml"),
            "[server]\nport = 9000\n[telemetry]\nlog_level = \"debug\"\n",
        )
        .unwrap();
        fs::write(
            dir.join("staging.toml"),
            "[server]\nport = 9100\n[store]\nseed_path = \"seed/books.json\"\n",
        )
        .unwrap();

        let settings = Settings::load_from(&dir, "staging").unwrap();

        assert_eq!(settings.environment, Environment::Staging);
        assert_eq!(settings.server.port, 9100);
        assert_eq!(settings.server.host, "0.0.0.0");
        assert_eq!(settings.telemetry.log_level, "debug");
        assert_eq!(
            settings.store.seed_path.as_deref(),
            Some(Path::new("seed/books.json"))
        );

        fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn missing_files_fall_back_to_defaults() {
        let dir = scratch_dir("empty");
        let settings = Settings::load_from(&dir, "production").unwrap();
        assert_eq!(settings.environment, Environment::Production);
        assert_eq!(settings.server.request_timeout_ms, 15000);
        fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn unknown_environment_is_rejected() {
        let dir = scratch_dir("unknown");
        let err = Settings::load_from(&dir, "qa").unwrap_err();
        assert!(err.to_string().contains("unsupported environment 'qa'"));
        fs::remove_dir_all(dir).ok();
    }
}
