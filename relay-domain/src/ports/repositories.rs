use async_trait::async_trait;

use crate::entities::PayloadLine;

#[async_trait]
pub trait PayloadRepository: Send + Sync {
    /// Non-blank lines of a JSON-lines file.
    async fn read_payloads(&self, path: &str) -> anyhow::Result<Vec<PayloadLine>>;
    async fn write_payloads(&self, path: &str, payloads: &[Vec<u8>]) -> anyhow::Result<()>;
}
