use anyhow::Context;
use config::builder::DefaultState;
use config::{ConfigBuilder, ConfigError};
use serde::Deserialize;
use std::net::SocketAddr;

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub server: ServerSettings,
    pub inference: InferenceSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    pub bind: String,
}

impl ServerSettings {
    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        self.bind
            .parse()
            .with_context(|| format!("invalid bind address '{}'", self.bind))
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct InferenceSettings {
    #[serde(default)]
    pub endpoints: Vec<String>,
    pub max_attempts: usize,
    pub timeout_secs: u64,
}

fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    config::Config::builder()
        .set_default("server.bind", "0.0.0.0:8107")?
        .set_default("inference.max_attempts", 3)?
        .set_default("inference.timeout_secs", 60)
}

/// Defaults, then `config/server.*` if present, then
/// `CHART_DIGITIZER_*` variables (`__` separates sections, endpoints are
/// comma separated).
pub fn load_server_config() -> anyhow::Result<ServerConfig> {
    let settings = defaults()?
        .add_source(config::File::with_name("config/server").required(false))
        .add_source(
            config::Environment::with_prefix("CHART_DIGITIZER")
                .prefix_separator("_")
                .separator("__")
                .list_separator(",")
                .with_list_parse_key("inference.endpoints")
                .try_parsing(true),
        )
        .build()?;

    Ok(settings.try_deserialize()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::{File, FileFormat};

    #[test]
    fn test_defaults() {
        let config: ServerConfig = defaults().unwrap().build().unwrap().try_deserialize().unwrap();
        assert_eq!(config.server.bind, "0.0.0.0:8107");
        assert_eq!(config.server.socket_addr().unwrap().port(), 8107);
        assert!(config.inference.endpoints.is_empty());
        assert_eq!(config.inference.max_attempts, 3);
        assert_eq!(config.inference.timeout_secs, 60);
    }

    #[test]
    fn test_file_overrides_defaults() {
        let toml = r#"
            [server]
            bind = "127.0.0.1:9000"

            [inference]
            endpoints = ["http://10.0.0.1:8000/chart", "http://10.0.0.2:8000/chart"]
            max_attempts = 2
        "#;
        let config: ServerConfig = defaults()
            .unwrap()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.server.bind, "127.0.0.1:9000");
        assert_eq!(config.inference.endpoints.len(), 2);
        assert_eq!(config.inference.max_attempts, 2);
        assert_eq!(config.inference.timeout_secs, 60);
    }

    #[test]
    fn test_bad_bind_address() {
        let settings = ServerSettings {
            bind: "localhost".to_string(),
        };
        assert!(settings.socket_addr().is_err());
    }
}
