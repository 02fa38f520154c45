// fable-pack library: configuration assembly for the bundler
pub mod cli;
pub mod core;
pub mod infrastructure;
pub mod utils;

pub use crate::core::models::{BaseDir, BuildConfig, BuildInputs, BuildMode};
pub use crate::core::services::ConfigAssembler;
pub use crate::utils::{PackError, Result};
