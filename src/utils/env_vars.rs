use crate::core::models::BuildMode;
use crate::utils::{Logger, Result};
use std::collections::HashMap;
use std::path::Path;

/// Variables collected from `.env` files, layered under the process environment
pub struct EnvVarsManager {
    variables: HashMap<String, String>,
}

impl EnvVarsManager {
    pub fn new() -> Self {
        Self {
            variables: HashMap::new(),
        }
    }

    /// Load `.env` files for `mode` from `root`
    pub async fn load_from_files(root: &Path, mode: BuildMode) -> Result<Self> {
        let mut manager = Self::new();

        // Later files override earlier ones:
        // .env < .env.local < .env.{mode} < .env.{mode}.local
        let env_files = [
            root.join(".env"),
            root.join(".env.local"),
            root.join(format!(".env.{}", mode)),
            root.join(format!(".env.{}.local", mode)),
        ];

        for env_file in &env_files {
            if tokio::fs::try_exists(env_file).await? {
                manager.load_env_file(env_file).await?;
            }
        }

        Ok(manager)
    }

    async fn load_env_file(&mut self, path: &Path) -> Result<()> {
        let content = tokio::fs::read_to_string(path).await?;
        let mut loaded = 0;

        for (line_num, line) in content.lines().enumerate() {
            let line = line.trim();

            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            if let Some((key, value)) = parse_env_line(line) {
                self.variables.insert(key, value);
                loaded += 1;
            } else {
                Logger::warn(&format!(
                    "Invalid env line in {} at line {}: {}",
                    path.display(),
                    line_num + 1,
                    line
                ));
            }
        }

        Logger::env_file_loaded(&path.display().to_string(), loaded);
        Ok(())
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.variables.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&String> {
        self.variables.get(key)
    }

    pub fn len(&self) -> usize {
        self.variables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    /// File variables overlaid with `process`; process values win
    pub fn merged_with<I>(self, process: I) -> HashMap<String, String>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut merged = self.variables;
        merged.extend(process);
        merged
    }
}

impl Default for EnvVarsManager {
    fn default() -> Self {
        Self::new()
    }
}

/// `KEY=VALUE`, with optional matching quotes around the value
fn parse_env_line(line: &str) -> Option<(String, String)> {
    let line = line.strip_prefix("export ").unwrap_or(line);
    let (key, value) = line.split_once('=')?;
    let key = key.trim();
    let value = value.trim();

    let first = key.chars().next()?;
    if !(first.is_alphabetic() || first == '_') {
        return None;
    }
    if !key.chars().all(|c| c.is_alphanumeric() || c == '_') {
        return None;
    }

    let value = if value.len() >= 2
        && ((value.starts_with('"') && value.ends_with('"'))
            || (value.starts_with('\'') && value.ends_with('\'')))
    {
        &value[1..value.len() - 1]
    } else {
        value
    };

    Some((key.to_string(), value.to_string()))
}
