use crate::utils::error::Result;
use async_trait::async_trait;

/// Whole-file byte storage used for roster persistence.
#[async_trait]
pub trait Storage: Send + Sync {
    async fn read_file(&self, path: &str) -> Result<Vec<u8>>;
    async fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;
}

/// Settings the command shell needs at runtime.
pub trait ConfigProvider: Send + Sync {
    fn data_dir(&self) -> &str;
    fn default_file(&self) -> &str;
    fn show_banner(&self) -> bool;
}
