use crate::core::babel::BabelOptions;
use crate::utils::Result;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Serialize, Serializer};

// Pre-compiled patterns for the standard rule table
static FSHARP_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\.fs(x|proj)?$").unwrap());
static SCRIPT_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\.js$").unwrap());
static NODE_MODULES_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"node_modules").unwrap());
static STYLE_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\.s(a|c)ss$").unwrap());
static ASSET_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\.(eot|svg|ttf|woff|woff2|webmanifest)(\?|$)").unwrap());

/// File name template for copied assets
pub const ASSET_NAME_TEMPLATE: &str = "[path][name].[ext]";

/// A regex over resource paths, serialized as its source
#[derive(Debug, Clone)]
pub struct FilePattern(Regex);

impl FilePattern {
    pub fn new(pattern: &str) -> Result<Self> {
        Ok(Self(Regex::new(pattern)?))
    }

    pub fn is_match(&self, resource: &str) -> bool {
        self.0.is_match(resource)
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl From<Regex> for FilePattern {
    fn from(regex: Regex) -> Self {
        Self(regex)
    }
}

impl PartialEq for FilePattern {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Serialize for FilePattern {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum LoaderOptions {
    Fable { babel: BabelOptions, define: Vec<String> },
    Babel(BabelOptions),
    File { name: String },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoaderUse {
    pub loader: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<LoaderOptions>,
}

impl LoaderUse {
    pub fn new(loader: impl Into<String>) -> Self {
        Self {
            loader: loader.into(),
            options: None,
        }
    }

    pub fn with_options(loader: impl Into<String>, options: LoaderOptions) -> Self {
        Self {
            loader: loader.into(),
            options: Some(options),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransformRule {
    pub test: FilePattern,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude: Option<FilePattern>,
    #[serde(rename = "use")]
    pub use_: Vec<LoaderUse>,
}

impl TransformRule {
    pub fn new(test: impl Into<FilePattern>, use_: Vec<LoaderUse>) -> Self {
        Self {
            test: test.into(),
            exclude: None,
            use_,
        }
    }

    pub fn excluding(mut self, exclude: impl Into<FilePattern>) -> Self {
        self.exclude = Some(exclude.into());
        self
    }

    pub fn matches(&self, resource: &str) -> bool {
        self.test.is_match(resource)
            && !self
                .exclude
                .as_ref()
                .is_some_and(|exclude| exclude.is_match(resource))
    }

    /// Loaders in the order they run: last declared runs first
    pub fn application_order(&self) -> impl Iterator<Item = &LoaderUse> {
        self.use_.iter().rev()
    }
}

/// Ordered rule table. The first matching rule owns the file.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct RuleSet(Vec<TransformRule>);

impl RuleSet {
    pub fn new(rules: Vec<TransformRule>) -> Self {
        Self(rules)
    }

    /// F# sources, plain scripts, Sass and static assets
    pub fn standard(babel: &BabelOptions, define: Vec<String>) -> Self {
        Self(vec![
            TransformRule::new(
                FSHARP_PATTERN.clone(),
                vec![LoaderUse::with_options(
                    "fable-loader",
                    LoaderOptions::Fable {
                        babel: babel.clone(),
                        define,
                    },
                )],
            ),
            TransformRule::new(
                SCRIPT_PATTERN.clone(),
                vec![LoaderUse::with_options(
                    "babel-loader",
                    LoaderOptions::Babel(babel.clone()),
                )],
            )
            .excluding(NODE_MODULES_PATTERN.clone()),
            TransformRule::new(
                STYLE_PATTERN.clone(),
                vec![
                    LoaderUse::new("style-loader"),
                    LoaderUse::new("css-loader"),
                    LoaderUse::new("sass-loader"),
                ],
            ),
            TransformRule::new(
                ASSET_PATTERN.clone(),
                vec![LoaderUse::with_options(
                    "file-loader",
                    LoaderOptions::File {
                        name: ASSET_NAME_TEMPLATE.to_string(),
                    },
                )],
            ),
        ])
    }

    pub fn rules(&self) -> &[TransformRule] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn route(&self, resource: &str) -> Option<&TransformRule> {
        self.0.iter().find(|rule| rule.matches(resource))
    }

    pub fn route_index(&self, resource: &str) -> Option<usize> {
        self.0.iter().position(|rule| rule.matches(resource))
    }
}
