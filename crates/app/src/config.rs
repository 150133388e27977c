use shared_types::AppConfig;

const BUNDLED_CONFIG: &str = include_str!("../../../config.toml");

/// Parse the `config.toml` compiled into the bundle. A malformed file is
/// logged and replaced by defaults so the client still starts.
pub fn load_config() -> AppConfig {
    parse_or_default(BUNDLED_CONFIG)
}

fn parse_or_default(contents: &str) -> AppConfig {
    match AppConfig::from_toml_str(contents) {
        Ok(config) => {
            tracing::debug!(auth = %config.api.auth_base_url, "configuration loaded");
            config
        }
        Err(err) => {
            tracing::warn!(error = %err, "invalid config.toml; using defaults");
            AppConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn bundled_config_parses() {
        assert!(AppConfig::from_toml_str(BUNDLED_CONFIG).is_ok());
        let config = load_config();
        assert_eq!(config.directory.page_size, 10);
        assert_eq!(config.directory.default_specialty.as_deref(), Some("Cardiologia"));
    }

    #[test]
    fn malformed_config_falls_back() {
        assert_eq!(parse_or_default("[api\n"), AppConfig::default());
    }
}
