use serde::Deserialize;

const DEFAULT_CONFIG_PATH: &str = "config/splitledger.toml";

/// Runtime settings: TOML file, then `SPLITLEDGER_*` environment
/// variables, then command-line overrides, in that precedence order.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub base_url: String,
    pub user_id: i64,
    pub user_name: String,
    pub level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8000".to_string(),
            user_id: 0,
            user_name: "You".to_string(),
            level: "info".to_string(),
        }
    }
}

pub struct Overrides {
    pub config: Option<String>,
    pub base_url: Option<String>,
    pub user_id: Option<i64>,
    pub user_name: Option<String>,
}

pub fn load(overrides: Overrides) -> Result<AppConfig, config::ConfigError> {
    let config_path = overrides.config.as_deref().unwrap_or(DEFAULT_CONFIG_PATH);
    let mut builder = config::Config::builder();
    builder = builder.add_source(config::File::with_name(config_path).required(false));
    builder = builder.add_source(config::Environment::with_prefix("SPLITLEDGER"));
    let mut settings: AppConfig = builder.build()?.try_deserialize()?;

    if let Some(base_url) = overrides.base_url {
        settings.base_url = base_url;
    }
    if let Some(user_id) = overrides.user_id {
        settings.user_id = user_id;
    }
    if let Some(user_name) = overrides.user_name {
        settings.user_name = user_name;
    }

    Ok(settings)
}
