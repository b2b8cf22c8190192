use std::path::Path;

use async_trait::async_trait;
use tokio::fs;
use tracing::debug;

use relay_domain::{PayloadLine, PayloadRepository};

/// Reads and writes JSON-lines payload files.
pub struct JsonLinesRepository;

impl JsonLinesRepository {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonLinesRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PayloadRepository for JsonLinesRepository {
    async fn read_payloads(&self, path: &str) -> anyhow::Result<Vec<PayloadLine>> {
        let content = fs::read(path).await?;
        let lines: Vec<PayloadLine> = content
            .split(|byte| *byte == b'\n')
            .enumerate()
            .filter(|(_, line)| !line.iter().all(u8::is_ascii_whitespace))
            .map(|(index, line)| PayloadLine {
                line_number: index + 1,
                raw: line.strip_suffix(b"\r").unwrap_or(line).to_vec(),
            })
            .collect();
        debug!("read {} payloads from {}", lines.len(), path);
        Ok(lines)
    }

    async fn write_payloads(&self, path: &str, payloads: &[Vec<u8>]) -> anyhow::Result<()> {
        if let Some(parent) = Path::new(path).parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await?;
            }
        }
        let mut content = Vec::with_capacity(payloads.iter().map(|p| p.len() + 1).sum());
        for payload in payloads {
            content.extend_from_slice(payload);
            content.push(b'\n');
        }
        fs::write(path, content).await?;
        debug!("wrote {} payloads to {}", payloads.len(), path);
        Ok(())
    }
}
