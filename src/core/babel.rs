use serde::ser::SerializeTuple;
use serde::{Serialize, Serializer};
use serde_json::{json, Value};
use std::path::Path;

const PRESET_PREFIX: &str = "babel-preset-";
const PLUGIN_PREFIX: &str = "babel-plugin-";

/// Options handed to babel-loader and to fable-loader's babel pass
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BabelOptions {
    pub presets: Vec<BabelPreset>,
    pub plugins: Vec<String>,
}

/// A preset and its options, serialized as `[name, options]`
#[derive(Debug, Clone, PartialEq)]
pub struct BabelPreset {
    pub name: String,
    pub options: Value,
}

impl Serialize for BabelPreset {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut tuple = serializer.serialize_tuple(2)?;
        tuple.serialize_element(&self.name)?;
        tuple.serialize_element(&self.options)?;
        tuple.end()
    }
}

impl Default for BabelOptions {
    /// `env` targeting the last two browser versions, ES modules left for the bundler
    fn default() -> Self {
        Self {
            presets: vec![BabelPreset {
                name: "env".to_string(),
                options: json!({
                    "targets": { "browsers": ["last 2 versions"] },
                    "modules": false
                }),
            }],
            plugins: vec!["transform-runtime".to_string()],
        }
    }
}

/// Turn short preset/plugin names into package directories under `node_modules`,
/// so babel finds them no matter which file is being compiled.
pub fn resolve_babel_options(options: &BabelOptions, node_modules: &Path) -> BabelOptions {
    BabelOptions {
        presets: options
            .presets
            .iter()
            .map(|preset| BabelPreset {
                name: resolve_package(&preset.name, PRESET_PREFIX, node_modules),
                options: preset.options.clone(),
            })
            .collect(),
        plugins: options
            .plugins
            .iter()
            .map(|plugin| resolve_package(plugin, PLUGIN_PREFIX, node_modules))
            .collect(),
    }
}

fn resolve_package(name: &str, prefix: &str, node_modules: &Path) -> String {
    if Path::new(name).is_absolute() {
        return name.to_string();
    }

    let package = if name.starts_with(prefix) || name.starts_with('@') {
        name.to_string()
    } else {
        format!("{}{}", prefix, name)
    };

    node_modules.join(package).to_string_lossy().into_owned()
}
