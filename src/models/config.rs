//! Configuration model loaded from external sources.

use serde::Deserialize;

const DEFAULT_HISTORY_LIMIT: usize = 5;

fn default_history_limit() -> usize {
    DEFAULT_HISTORY_LIMIT
}

fn default_seed_fixtures() -> bool {
    true
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
/// Settings shared by the services and the command line front end.
pub struct AppConfig {
    /// Maximum number of completed appointments shown as client history.
    #[serde(default = "default_history_limit")]
    pub history_limit: usize,
    /// Whether the store starts with the bundled demo data.
    #[serde(default = "default_seed_fixtures")]
    pub seed_fixtures: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            history_limit: DEFAULT_HISTORY_LIMIT,
            seed_fixtures: true,
        }
    }
}

impl AppConfig {
    /// Layers `config/default`, the `APP_ENV` profile file and `APP_*`
    /// environment variables.
    pub fn load(app_env: &str) -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{app_env}")).required(false))
            .add_source(config::Environment::with_prefix("APP"))
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_keys_fall_back_to_defaults() {
        let config = config::Config::builder()
            .add_source(config::File::from_str(
                "history_limit: 3",
                config::FileFormat::Yaml,
            ))
            .build()
            .unwrap()
            .try_deserialize::<AppConfig>()
            .unwrap();

        assert_eq!(config.history_limit, 3);
        assert!(config.seed_fixtures);
    }
}
