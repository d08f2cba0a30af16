use std::path::Path;

#[derive(Debug, serde::Deserialize, Clone)]
#[serde(default)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub logging_config: String,
    /// Register the four built-in categories when the server starts.
    pub builtin_categories: bool,
    /// Fixed seed for reproducible draws and access codes.
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            host: "0.0.0.0".into(),
            port: 3000,
            logging_config: "debug,hyper=error,mio=debug,tower_http=debug,axum::rejection=trace".into(),
            builtin_categories: true,
            seed: None,
        }
    }
}

pub const CONFIG_ENV_VAR: &str = "SKATE_CONTEST_SERVER_CONFIG";

pub(crate) fn read_config_inner(path: &Path) -> Result<Config, anyhow::Error> {
    let config = std::fs::read_to_string(path)?;
    let config = serde_yaml::from_str::<Config>(&config)?;
    Ok(config)
}

pub fn read_config(path: Option<&Path>) -> Config {
    let Some(path) = path else {
        return Config::default();
    };
    match read_config_inner(path) {
        Ok(config) => config,
        Err(e) => {
            //Print to stderr, since logging is set up in the config
            eprintln!("Warning: Failed to read config from {}: {}", path.display(), e);
            Config::default()
        }
    }
}

#[cfg(test)]
mod test {
    use super::Config;

    #[test]
    fn test_missing_fields_use_defaults() {
        let config: Config = serde_yaml::from_str("port: 8080\nseed: 12\n").unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.seed, Some(12));
        assert_eq!(config.host, "0.0.0.0");
        assert!(config.builtin_categories);
    }

    #[test]
    fn test_unreadable_config_falls_back_to_default() {
        let config = super::read_config(Some(std::path::Path::new("/does/not/exist.yaml")));
        assert_eq!(config.port, Config::default().port);
    }
}
