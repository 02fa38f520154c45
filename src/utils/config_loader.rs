use crate::core::models::ConfigOverrides;
use crate::utils::{Logger, PackError, Result};
use std::path::Path;

pub const CONFIG_FILE_NAME: &str = "fable-pack.config.json";

/// Loads `fable-pack.config.json` and layers CLI values on top
pub struct ConfigLoader;

impl ConfigLoader {
    /// `Ok(None)` when the project has no config file
    pub async fn load_from_file(root: &Path) -> Result<Option<ConfigOverrides>> {
        let config_path = root.join(CONFIG_FILE_NAME);

        if !tokio::fs::try_exists(&config_path).await? {
            Logger::debug(&format!("No {} found, using defaults", CONFIG_FILE_NAME));
            return Ok(None);
        }

        let content = tokio::fs::read_to_string(&config_path).await?;

        let config: ConfigOverrides = serde_json::from_str(&content).map_err(|e| {
            PackError::config_in_file(
                format!("Failed to parse {}: {}", CONFIG_FILE_NAME, e),
                config_path.clone(),
            )
        })?;

        Logger::config_loaded(&config_path.display().to_string());
        Ok(Some(config))
    }

    /// CLI values win over file values, file values over built-in defaults
    pub fn merge_with_cli(file_config: Option<ConfigOverrides>, cli: ConfigOverrides) -> ConfigOverrides {
        let base = file_config.unwrap_or_default();

        ConfigOverrides {
            dev_server_host: cli.dev_server_host.or(base.dev_server_host),
            dev_server_port: cli.dev_server_port.or(base.dev_server_port),
            https: cli.https.or(base.https),
            public_path: cli.public_path.or(base.public_path),
            output_dir: cli.output_dir.or(base.output_dir),
            port_variable: cli.port_variable.or(base.port_variable),
            default_api_port: cli.default_api_port.or(base.default_api_port),
        }
    }

    /// Example config file showing every supported key at its default
    pub fn generate_example() -> Result<String> {
        let example = ConfigOverrides {
            dev_server_host: Some("0.0.0.0".to_string()),
            dev_server_port: Some(8080),
            https: Some(true),
            public_path: Some("/public".to_string()),
            output_dir: Some("public".to_string()),
            port_variable: Some("SUAVE_FABLE_PORT".to_string()),
            default_api_port: Some("8085".to_string()),
        };
        Ok(serde_json::to_string_pretty(&example)?)
    }
}
