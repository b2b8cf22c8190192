use anyhow::{anyhow, Result};

pub fn validate_server_name(value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(anyhow!("server name is empty"));
    }
    if value.chars().any(char::is_whitespace) {
        return Err(anyhow!("server name '{}' must not contain whitespace", value));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_names() {
        assert!(validate_server_name("simplyvanilla").is_ok());
        assert!(validate_server_name("smp-2").is_ok());
    }

    #[test]
    fn rejects_blank_or_spaced_names() {
        assert!(validate_server_name("").is_err());
        assert!(validate_server_name("my server").is_err());
    }
}
