use crate::core::plugin::PluginId;
use crate::core::proxy::ProxyRule;
use crate::core::rules::RuleSet;
use crate::utils::{PackError, Result};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::path::{Component, Path, PathBuf};

/// The literal argv flag that selects a production build
pub const PRODUCTION_FLAG: &str = "-p";

/// Environment variable holding the API upstream port
pub const PORT_VARIABLE: &str = "SUAVE_FABLE_PORT";

/// Upstream port used when the environment does not provide one
pub const DEFAULT_API_PORT: &str = "8085";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildMode {
    Production,
    Development,
}

impl BuildMode {
    /// Production iff the literal production flag appears anywhere in argv
    pub fn from_args<S: AsRef<str>>(args: &[S]) -> Self {
        if args.iter().any(|arg| arg.as_ref() == PRODUCTION_FLAG) {
            BuildMode::Production
        } else {
            BuildMode::Development
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            BuildMode::Production => "production",
            BuildMode::Development => "development",
        }
    }

    pub fn is_production(self) -> bool {
        matches!(self, BuildMode::Production)
    }

    pub fn status_line(self) -> String {
        format!("Bundling for {}...", self.as_str())
    }
}

impl fmt::Display for BuildMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Absolute directory every configured path is rooted at
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseDir(PathBuf);

impl BaseDir {
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if !path.is_absolute() {
            return Err(PackError::InvalidBaseDir(path));
        }
        Ok(Self(path))
    }

    pub fn path(&self) -> &Path {
        &self.0
    }

    /// Join a relative path onto the base, dropping `.` segments.
    /// Absolute inputs are returned unchanged.
    pub fn resolve(&self, relative: impl AsRef<Path>) -> PathBuf {
        let relative = relative.as_ref();
        if relative.is_absolute() {
            return relative.to_path_buf();
        }

        let mut resolved = self.0.clone();
        for component in relative.components() {
            match component {
                Component::CurDir => {}
                Component::ParentDir => {
                    resolved.pop();
                }
                other => resolved.push(other.as_os_str()),
            }
        }
        resolved
    }

    /// Join a project-supplied relative path, refusing anything that would
    /// land outside the base: absolute paths, prefixes, or `..` past the root.
    pub fn join_within(&self, relative: &str) -> Result<PathBuf> {
        let mut resolved = self.0.clone();
        let mut depth = 0usize;

        for component in Path::new(relative).components() {
            match component {
                Component::CurDir => {}
                Component::Normal(segment) => {
                    resolved.push(segment);
                    depth += 1;
                }
                Component::ParentDir if depth > 0 => {
                    resolved.pop();
                    depth -= 1;
                }
                Component::ParentDir | Component::RootDir | Component::Prefix(_) => {
                    return Err(PackError::config(format!(
                        "path `{}` must stay inside {}",
                        relative,
                        self.0.display()
                    )));
                }
            }
        }

        Ok(resolved)
    }
}

/// Everything assembly reads from the outside world, captured up front
#[derive(Debug, Clone)]
pub struct BuildInputs {
    pub args: Vec<String>,
    pub env: HashMap<String, String>,
    pub base_dir: BaseDir,
    pub overrides: ConfigOverrides,
}

impl BuildInputs {
    pub fn new(base_dir: BaseDir) -> Self {
        Self {
            args: Vec::new(),
            env: HashMap::new(),
            base_dir,
            overrides: ConfigOverrides::default(),
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

    pub fn with_env(mut self, env: HashMap<String, String>) -> Self {
        self.env = env;
        self
    }

    pub fn with_var(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.insert(key.into(), value.into());
        self
    }

    pub fn with_overrides(mut self, overrides: ConfigOverrides) -> Self {
        self.overrides = overrides;
        self
    }

    pub fn mode(&self) -> BuildMode {
        BuildMode::from_args(&self.args)
    }

    /// The upstream port string, verbatim. No numeric validation happens here.
    pub fn api_port(&self) -> (&str, bool) {
        let variable = self.overrides.port_variable.as_deref().unwrap_or(PORT_VARIABLE);
        match self.env.get(variable) {
            Some(port) => (port.as_str(), true),
            None => (
                self.overrides.default_api_port.as_deref().unwrap_or(DEFAULT_API_PORT),
                false,
            ),
        }
    }
}

/// Values a project may change through its config file or the CLI.
/// `None` keeps the built-in default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dev_server_host: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dev_server_port: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub https: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_dir: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port_variable: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_api_port: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildConfig {
    pub mode: BuildMode,
    pub devtool: String,
    pub entry: BTreeMap<String, PathBuf>,
    pub output: OutputSpec,
    pub resolve: ResolveSpec,
    pub dev_server: DevServerSpec,
    pub module: ModuleSpec,
    pub plugins: Vec<PluginId>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputSpec {
    pub path: PathBuf,
    pub public_path: String,
    pub filename: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolveSpec {
    pub modules: Vec<PathBuf>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ModuleSpec {
    pub rules: RuleSet,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DevServerSpec {
    pub host: String,
    pub port: u16,
    pub https: bool,
    pub proxy: Vec<ProxyRule>,
    pub hot: bool,
    pub inline: bool,
}

impl DevServerSpec {
    /// First proxy rule that claims `request_path`
    pub fn proxy_for(&self, request_path: &str) -> Option<&ProxyRule> {
        self.proxy.iter().find(|rule| rule.matches(request_path))
    }
}
