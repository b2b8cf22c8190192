// Runtime model shared across layers

#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub max_payload_bytes: u64,
    pub allowed_servers: Vec<String>,
    pub output_dir: String,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            max_payload_bytes: 64 * 1024,
            allowed_servers: Vec::new(),
            output_dir: ".".to_string(),
        }
    }
}

/// One non-blank line of a JSON-lines payload file, numbered from 1.
/// Bytes are kept as read; UTF-8 is checked when the line is decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PayloadLine {
    pub line_number: usize,
    pub raw: Vec<u8>,
}
