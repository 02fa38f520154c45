use crate::core::babel::{resolve_babel_options, BabelOptions};
use crate::core::models::*;
use crate::core::plugin::PluginId;
use crate::core::proxy::ProxyRule;
use crate::core::rules::RuleSet;
use crate::utils::Logger;
use std::collections::BTreeMap;

/// Entry points, relative to the base directory
pub const ENTRY_POINTS: [(&str, &str); 2] = [
    ("client", "./src/Client/Client.fsproj"),
    ("sw", "./src/ServiceWorker/ServiceWorker.fsproj"),
];

pub const OUTPUT_DIR: &str = "./public";
pub const PUBLIC_PATH: &str = "/public";
pub const OUTPUT_FILENAME: &str = "[name].js";
pub const NODE_MODULES_DIR: &str = "./node_modules/";
pub const DEVTOOL: &str = "source-map";
pub const DEV_SERVER_HOST: &str = "0.0.0.0";
pub const DEV_SERVER_PORT: u16 = 8080;
pub const API_PROXY_CONTEXT: &str = "/api/*";

/// Preprocessor symbol fable-loader defines outside production
const DEBUG_SYMBOL: &str = "DEBUG";

/// Builds the bundler configuration from captured inputs.
///
/// Assembly is pure apart from the status line it logs: the same
/// `BuildInputs` always give the same `BuildConfig`, and nothing here fails.
#[derive(Debug, Clone, Default)]
pub struct ConfigAssembler {
    babel: BabelOptions,
}

impl ConfigAssembler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_babel_options(mut self, babel: BabelOptions) -> Self {
        self.babel = babel;
        self
    }

    pub fn assemble(&self, inputs: &BuildInputs) -> BuildConfig {
        let mode = inputs.mode();
        Logger::bundling_for(mode);

        let base = &inputs.base_dir;
        let overrides = &inputs.overrides;

        let (port, from_env) = inputs.api_port();
        Logger::upstream_port(port, from_env);

        let node_modules = base.resolve(NODE_MODULES_DIR);
        let babel = resolve_babel_options(&self.babel, &node_modules);

        let entry: BTreeMap<String, std::path::PathBuf> = ENTRY_POINTS
            .iter()
            .map(|(name, path)| (name.to_string(), base.resolve(path)))
            .collect();

        let output = OutputSpec {
            path: output_dir(base, overrides.output_dir.as_deref()),
            public_path: overrides
                .public_path
                .clone()
                .unwrap_or_else(|| PUBLIC_PATH.to_string()),
            filename: OUTPUT_FILENAME.to_string(),
        };

        let dev_server = DevServerSpec {
            host: overrides
                .dev_server_host
                .clone()
                .unwrap_or_else(|| DEV_SERVER_HOST.to_string()),
            port: overrides.dev_server_port.unwrap_or(DEV_SERVER_PORT),
            https: overrides.https.unwrap_or(true),
            proxy: vec![ProxyRule::local(API_PROXY_CONTEXT, port)],
            hot: true,
            inline: true,
        };

        BuildConfig {
            mode,
            devtool: DEVTOOL.to_string(),
            entry,
            output,
            resolve: ResolveSpec {
                modules: vec![node_modules],
            },
            dev_server,
            module: ModuleSpec {
                rules: RuleSet::standard(&babel, defines_for(mode)),
            },
            plugins: PluginId::for_mode(mode),
        }
    }
}

/// Output directory under `base`. Input sources reject escaping overrides;
/// hand-built inputs that still carry one fall back to the default.
fn output_dir(base: &BaseDir, requested: Option<&str>) -> std::path::PathBuf {
    match requested.map(|dir| base.join_within(dir)) {
        Some(Ok(path)) => path,
        Some(Err(e)) => {
            Logger::warn(&format!("{}; using {}", e, OUTPUT_DIR));
            base.resolve(OUTPUT_DIR)
        }
        None => base.resolve(OUTPUT_DIR),
    }
}

fn defines_for(mode: BuildMode) -> Vec<String> {
    match mode {
        BuildMode::Production => Vec::new(),
        BuildMode::Development => vec![DEBUG_SYMBOL.to_string()],
    }
}
