// Core domain layer
pub mod babel;
pub mod interfaces;
pub mod models;
pub mod plugin;
pub mod proxy;
pub mod rules;
pub mod services;

pub use interfaces::*;
pub use models::*;
pub use services::*;
