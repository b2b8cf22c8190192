use std::env;
use std::path::Path;

use anyhow::{anyhow, Result};
use serde::Deserialize;
use tokio::fs;
use tracing::warn;

use relay_domain::RuntimeConfig;

use super::validation::validate_server_name;

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct AppConfig {
    pub max_payload_bytes: u64,
    pub allowed_servers: Vec<String>,
    pub output_dir: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            max_payload_bytes: 64 * 1024,
            allowed_servers: Vec::new(),
            output_dir: ".".to_string(),
        }
    }
}

impl AppConfig {
    pub async fn load() -> Result<Self> {
        let path = env::var("RELAY_CONFIG").unwrap_or_else(|_| "./config.toml".to_string());
        Self::load_from(Path::new(&path), |key| env::var(key).ok()).await
    }

    pub async fn load_from(
        file_path: &Path,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self> {
        let base_dir = file_path.parent();
        let mut config = if file_path.exists() {
            let content = fs::read_to_string(file_path).await?;
            toml::from_str::<AppConfig>(&content)
                .map_err(|err| anyhow!("invalid config {}: {}", file_path.display(), err))?
        } else {
            warn!("{} not found, using defaults", file_path.display());
            AppConfig::default()
        };
        config.apply_overrides(lookup);
        config.resolve_paths(base_dir);
        config.normalize();
        config.validate()?;
        Ok(config)
    }

    pub fn normalize(&mut self) {
        self.allowed_servers = normalize_name_list(std::mem::take(&mut self.allowed_servers));
        if self.output_dir.trim().is_empty() {
            self.output_dir = ".".to_string();
        }
    }

    fn resolve_paths(&mut self, base_dir: Option<&Path>) {
        let Some(base) = base_dir else {
            return;
        };
        self.output_dir = resolve_path(base, &self.output_dir);
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_payload_bytes == 0 {
            return Err(anyhow!("max_payload_bytes must be greater than 0"));
        }
        for server in &self.allowed_servers {
            validate_server_name(server).map_err(|err| anyhow!("invalid allowed_servers: {}", err))?;
        }
        Ok(())
    }

    pub fn to_runtime_config(&self) -> RuntimeConfig {
        RuntimeConfig {
            max_payload_bytes: self.max_payload_bytes,
            allowed_servers: self.allowed_servers.clone(),
            output_dir: self.output_dir.clone(),
        }
    }

    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(value) = lookup("RELAY_MAX_PAYLOAD_BYTES") {
            match value.trim().parse() {
                Ok(parsed) => self.max_payload_bytes = parsed,
                Err(err) => warn!(
                    "ignoring RELAY_MAX_PAYLOAD_BYTES '{}': {}, keeping {}",
                    value, err, self.max_payload_bytes
                ),
            }
        }
        if let Some(value) = lookup("RELAY_ALLOWED_SERVERS") {
            self.allowed_servers = parse_env_name_list(&value);
        }
        if let Some(value) = lookup("RELAY_OUTPUT_DIR") {
            self.output_dir = value;
        }
    }
}

fn resolve_path(base: &Path, value: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return trimmed.to_string();
    }
    let path = Path::new(trimmed);
    if path.is_absolute() {
        trimmed.to_string()
    } else {
        base.join(path).to_string_lossy().to_string()
    }
}

fn parse_env_name_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(|item| item.trim())
        .filter(|item| !item.is_empty())
        .map(ToString::to_string)
        .collect()
}

fn normalize_name_list(values: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = values
        .into_iter()
        .map(|item| item.trim().to_string())
        .filter(|item| !item.is_empty())
        .collect();
    out.sort();
    out.dedup();
    out
}
