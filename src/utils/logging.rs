use crate::core::models::BuildMode;
use tracing::{debug, info, warn};

pub struct Logger;

impl Logger {
    /// Install the global subscriber. `RUST_LOG` wins over the default filter.
    pub fn init() {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("fable_pack=info"));

        // A second init (tests, embedding) is not an error
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .try_init();
    }

    /// The one status line every assembly emits
    pub fn bundling_for(mode: BuildMode) {
        info!("{}", mode.status_line());
    }

    pub fn config_loaded(path: &str) {
        debug!("📄 Loaded config overrides from {}", path);
    }

    pub fn env_file_loaded(path: &str, count: usize) {
        debug!("🌱 Loaded {} variables from {}", count, path);
    }

    pub fn upstream_port(port: &str, from_env: bool) {
        if from_env {
            debug!("🔌 API upstream port: {} (from environment)", port);
        } else {
            debug!("🔌 API upstream port: {} (default)", port);
        }
    }

    pub fn debug(msg: &str) {
        debug!("{}", msg);
    }

    pub fn warn(msg: &str) {
        warn!("⚠️  {}", msg);
    }
}
