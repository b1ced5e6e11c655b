//! ConfigStore - Local Configuration Storage

use std::fs;
use std::path::PathBuf;

use crate::domain::config::AppConfig;
use crate::error::{Error, Result};

const CONFIG_FILE: &str = "config.toml";

/// Get the application data directory
pub fn app_data_dir() -> Result<PathBuf> {
    let dir = dirs::data_local_dir()
        .ok_or_else(|| Error::Invalid {
            message: "Could not find local data directory".to_string(),
        })?
        .join("beacon-admin");

    if !dir.exists() {
        fs::create_dir_all(&dir)?;
    }

    Ok(dir)
}

/// Load the application config.
///
/// On first run the default config is written out so there is a file to
/// point at a backend; the app keeps running on sample data meanwhile.
pub fn load_config() -> Result<AppConfig> {
    let path = app_data_dir()?.join(CONFIG_FILE);

    if !path.exists() {
        let config = AppConfig::default();
        save_config(&config)?;
        return Ok(config);
    }

    let content = fs::read_to_string(&path)?;
    let config: AppConfig = toml::from_str(&content)?;
    Ok(config)
}

/// Save the application config
pub fn save_config(config: &AppConfig) -> Result<()> {
    let path = app_data_dir()?.join(CONFIG_FILE);
    let content = toml::to_string_pretty(config)?;
    fs::write(&path, content)?;
    Ok(())
}

/// Directory CSV exports are written to: Downloads if available,
/// otherwise the app data directory.
pub fn export_dir() -> Result<PathBuf> {
    if let Some(dir) = dirs::download_dir() {
        return Ok(dir);
    }
    app_data_dir()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::domain::config::ApiConfig;

    #[test]
    fn config_round_trips_through_toml() {
        let config = AppConfig {
            api: Some(ApiConfig {
                base_url: "https://example.supabase.co".to_string(),
                api_key: "key".to_string(),
            }),
            page_size: Some(50),
        };

        let text = toml::to_string_pretty(&config).expect("serializes");
        let parsed: AppConfig = toml::from_str(&text).expect("parses back");
        assert_eq!(parsed.page_size(), 50);
        let api = parsed.api.expect("api section survives");
        assert_eq!(api.base_url, "https://example.supabase.co");
        assert_eq!(api.api_key, "key");
    }

    #[test]
    fn default_config_serializes_without_an_api_section() {
        let text = toml::to_string_pretty(&AppConfig::default()).expect("serializes");
        let parsed: AppConfig = toml::from_str(&text).expect("parses back");
        assert!(parsed.api.is_none());
        assert_eq!(parsed.page_size(), crate::constants::DEFAULT_PAGE_SIZE);
    }
}
