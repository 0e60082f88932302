use shared_types::AppConfig;

const CONFIG_TOML: &str = include_str!("../../../config.toml");

/// Parse the embedded `config.toml`, falling back to defaults if it is broken.
pub fn load_config() -> AppConfig {
    AppConfig::from_toml_str(CONFIG_TOML).unwrap_or_else(|err| {
        tracing::warn!(error = %err, "using default configuration");
        AppConfig::default()
    })
}
