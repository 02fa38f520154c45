// Infrastructure layer - adapters between the outside world and the core
pub mod input_source;

pub use input_source::*;
