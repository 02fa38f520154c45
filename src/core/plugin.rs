// Bundler plugins the configuration asks for.
// These are identifiers only; the bundler owns their behaviour.

use crate::core::models::BuildMode;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PluginId {
    /// Hot module replacement runtime for the dev server
    #[serde(rename = "HotModuleReplacementPlugin")]
    HotModuleReplacement,
    /// Readable module ids in HMR updates and console output
    #[serde(rename = "NamedModulesPlugin")]
    NamedModules,
}

impl PluginId {
    /// Plugins enabled for `mode`. Production builds get none.
    pub fn for_mode(mode: BuildMode) -> Vec<PluginId> {
        match mode {
            BuildMode::Production => Vec::new(),
            BuildMode::Development => vec![PluginId::HotModuleReplacement, PluginId::NamedModules],
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            PluginId::HotModuleReplacement => "HotModuleReplacementPlugin",
            PluginId::NamedModules => "NamedModulesPlugin",
        }
    }
}

impl fmt::Display for PluginId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
