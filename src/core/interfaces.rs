use crate::core::models::BuildInputs;
use crate::utils::Result;
use async_trait::async_trait;

/// Where assembly inputs come from
#[async_trait]
pub trait InputSource: Send + Sync {
    async fn load(&self) -> Result<BuildInputs>;
}
