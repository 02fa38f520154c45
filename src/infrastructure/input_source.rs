use crate::core::interfaces::InputSource;
use crate::core::models::{BaseDir, BuildInputs, BuildMode, ConfigOverrides};
use crate::utils::{ConfigLoader, EnvVarsManager, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use std::path::PathBuf;

/// Reads inputs from a project directory: argv and environment as
/// captured, `.env` files and `fable-pack.config.json` under the root.
pub struct ProjectInputSource {
    root: PathBuf,
    args: Vec<String>,
    process_env: HashMap<String, String>,
    cli_overrides: ConfigOverrides,
}

impl ProjectInputSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            args: Vec::new(),
            process_env: HashMap::new(),
            cli_overrides: ConfigOverrides::default(),
        }
    }

    /// Capture this process's argv and environment
    pub fn from_process(root: impl Into<PathBuf>) -> Self {
        let args = std::env::args_os()
            .map(|arg| arg.to_string_lossy().into_owned())
            .collect();
        // Non-UTF-8 variables cannot be a port or a path we emit; skip them
        let process_env = std::env::vars_os()
            .filter_map(|(key, value)| Some((key.into_string().ok()?, value.into_string().ok()?)))
            .collect();

        Self {
            args,
            process_env,
            ..Self::new(root)
        }
    }

    pub fn with_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args = args.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_process_env(mut self, env: HashMap<String, String>) -> Self {
        self.process_env = env;
        self
    }

    /// Append `arg` to the captured argv unless it is already there
    pub fn ensure_arg(mut self, arg: &str) -> Self {
        if !self.args.iter().any(|existing| existing == arg) {
            self.args.push(arg.to_string());
        }
        self
    }

    pub fn with_cli_overrides(mut self, overrides: ConfigOverrides) -> Self {
        self.cli_overrides = overrides;
        self
    }

    async fn absolute_root(&self) -> Result<PathBuf> {
        Ok(tokio::fs::canonicalize(&self.root).await?)
    }
}

#[async_trait]
impl InputSource for ProjectInputSource {
    async fn load(&self) -> Result<BuildInputs> {
        let root = self.absolute_root().await?;
        let mode = BuildMode::from_args(&self.args);

        let env_files = EnvVarsManager::load_from_files(&root, mode).await?;
        let env = env_files.merged_with(self.process_env.clone());

        let file_config = ConfigLoader::load_from_file(&root).await?;
        let overrides = ConfigLoader::merge_with_cli(file_config, self.cli_overrides.clone());

        let base_dir = BaseDir::new(root)?;
        if let Some(output_dir) = &overrides.output_dir {
            base_dir.join_within(output_dir)?;
        }

        Ok(BuildInputs::new(base_dir)
            .with_args(self.args.clone())
            .with_env(env)
            .with_overrides(overrides))
    }
}

/// Hands out prebuilt inputs
pub struct StaticInputSource {
    inputs: BuildInputs,
}

impl StaticInputSource {
    pub fn new(inputs: BuildInputs) -> Self {
        Self { inputs }
    }
}

#[async_trait]
impl InputSource for StaticInputSource {
    async fn load(&self) -> Result<BuildInputs> {
        Ok(self.inputs.clone())
    }
}
