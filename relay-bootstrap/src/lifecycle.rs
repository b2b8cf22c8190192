use std::path::Path;

use anyhow::Result;
use tokio::io::AsyncWriteExt;
use tracing::{info, warn};

use relay_application::commands::{migrate_commands, payload_commands};
use relay_application::{AppError, AppState};

use crate::context::AppContext;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunReport {
    pub accepted: usize,
    pub rejected: usize,
}

type LineCommand = fn(&AppState, &[u8]) -> Result<Vec<u8>, AppError>;

pub async fn run_validate(context: &AppContext, file: &str) -> Result<RunReport> {
    let lines = context.payloads.read_payloads(file).await?;
    let mut report = RunReport::default();
    for line in &lines {
        match payload_commands::process_payload(&context.state, &line.raw) {
            Ok(_) => report.accepted += 1,
            Err(err) => {
                warn!("{}:{} rejected: {}", file, line.line_number, err);
                report.rejected += 1;
            }
        }
    }
    info!(
        "validated {}: {} accepted, {} rejected",
        file, report.accepted, report.rejected
    );
    Ok(report)
}

pub async fn run_canonicalize(
    context: &AppContext,
    file: &str,
    output: Option<&str>,
) -> Result<RunReport> {
    transform_file(context, file, output, payload_commands::canonicalize_payload).await
}

pub async fn run_migrate_advancements(
    context: &AppContext,
    file: &str,
    output: Option<&str>,
) -> Result<RunReport> {
    transform_file(
        context,
        file,
        output,
        migrate_commands::migrate_legacy_advancement,
    )
    .await
}

async fn transform_file(
    context: &AppContext,
    file: &str,
    output: Option<&str>,
    command: LineCommand,
) -> Result<RunReport> {
    let lines = context.payloads.read_payloads(file).await?;
    let mut report = RunReport::default();
    let mut out = Vec::with_capacity(lines.len());
    for line in &lines {
        match command(&context.state, &line.raw) {
            Ok(encoded) => {
                out.push(encoded);
                report.accepted += 1;
            }
            Err(err) => {
                warn!("{}:{} skipped: {}", file, line.line_number, err);
                report.rejected += 1;
            }
        }
    }

    match output {
        Some(path) => {
            let target = resolve_output(&context.state.config.output_dir, path);
            context.payloads.write_payloads(&target, &out).await?;
            info!("wrote {} payloads to {}", out.len(), target);
        }
        None => {
            let mut stdout = tokio::io::stdout();
            for payload in &out {
                stdout.write_all(payload).await?;
                stdout.write_all(b"\n").await?;
            }
            stdout.flush().await?;
        }
    }
    Ok(report)
}

fn resolve_output(output_dir: &str, path: &str) -> String {
    let candidate = Path::new(path);
    if candidate.is_absolute() {
        path.to_string()
    } else {
        Path::new(output_dir)
            .join(candidate)
            .to_string_lossy()
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use relay_domain::RecordKind;
    use relay_infrastructure::AppConfig;
    use serde_json::json;

    fn payload_file(dir: &Path, lines: &[String]) -> String {
        let path = dir.join("payloads.jsonl");
        std::fs::write(&path, lines.join("\n")).expect("write payloads");
        path.to_string_lossy().to_string()
    }

    fn context_in(dir: &Path) -> AppContext {
        AppContext::from_config(&AppConfig {
            output_dir: dir.to_string_lossy().to_string(),
            ..AppConfig::default()
        })
    }

    fn death_line(death_type: &str) -> String {
        json!({
            "action": "minecraft_player_death",
            "data": {
                "timestamp": "t",
                "server": "smp",
                "victim": "a",
                "death_message": "a was slain by b",
                "type": death_type,
                "victimUUID": "u1",
                "murderer": "b",
                "murdererUUID": "u2"
            }
        })
        .to_string()
    }

    #[tokio::test]
    async fn validate_counts_good_and_bad_lines() {
        let dir = tempfile::tempdir().expect("tempdir");
        let file = payload_file(
            dir.path(),
            &[death_line("pvp"), death_line("draw"), "{".to_string()],
        );
        let context = context_in(dir.path());

        let report = run_validate(&context, &file).await.expect("validate");
        assert_eq!(
            report,
            RunReport {
                accepted: 1,
                rejected: 2,
            }
        );
        assert_eq!(
            context.state.metrics.accepted(RecordKind::PlayerDeathEvent),
            1
        );
    }

    #[tokio::test]
    async fn non_utf8_line_is_rejected_alone() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("payloads.jsonl");
        let mut content = death_line("pvp").into_bytes();
        content.extend_from_slice(b"\n\xff\xfe\n");
        content.extend_from_slice(death_line("pvp").as_bytes());
        std::fs::write(&path, content).expect("write payloads");
        let file = path.to_string_lossy().to_string();
        let context = context_in(dir.path());

        let report = run_validate(&context, &file).await.expect("validate");
        assert_eq!(
            report,
            RunReport {
                accepted: 2,
                rejected: 1,
            }
        );

        let target = dir.path().join("canonical.jsonl").to_string_lossy().to_string();
        let report = run_canonicalize(&context, &file, Some(target.as_str()))
            .await
            .expect("canonicalize");
        assert_eq!(report.accepted, 2);
        assert_eq!(report.rejected, 1);
        let written = std::fs::read_to_string(&target).expect("output");
        assert_eq!(written.lines().count(), 2);
    }

    #[tokio::test]
    async fn canonicalize_writes_relative_output_under_output_dir() {
        let dir = tempfile::tempdir().expect("tempdir");
        let file = payload_file(dir.path(), &[death_line("pvp"), death_line("pve")]);
        let context = context_in(dir.path());

        let report = run_canonicalize(&context, &file, Some("out/canonical.jsonl"))
            .await
            .expect("canonicalize");
        assert_eq!(report.accepted, 1);
        assert_eq!(report.rejected, 1);

        let written =
            std::fs::read_to_string(dir.path().join("out").join("canonical.jsonl")).expect("output");
        assert_eq!(
            written,
            "{\"action\":\"minecraft_player_death\",\"data\":{\"death_message\":\"a was slain by b\",\"murderer\":\"b\",\"murdererUUID\":\"u2\",\"server\":\"smp\",\"timestamp\":\"t\",\"type\":\"pvp\",\"victim\":\"a\",\"victimUUID\":\"u1\"}}\n"
        );
    }

    #[tokio::test]
    async fn migrate_advancements_converts_legacy_lines() {
        let dir = tempfile::tempdir().expect("tempdir");
        let legacy = json!({
            "username": "steve",
            "advancement": "Stone Age",
            "time": 1_704_067_200_000_i64,
            "mc_server": "smp",
            "uuid": "u1"
        })
        .to_string();
        let file = payload_file(dir.path(), &[legacy]);
        let context = context_in(dir.path());
        let target = dir.path().join("migrated.jsonl").to_string_lossy().to_string();

        let report = run_migrate_advancements(&context, &file, Some(target.as_str()))
            .await
            .expect("migrate");
        assert_eq!(report.accepted, 1);
        let written = std::fs::read_to_string(&target).expect("output");
        assert!(written.contains("\"timestamp\":\"2024-01-01T00:00:00.000Z\""));
        assert!(written.starts_with("{\"action\":\"minecraft_advancement\""));
    }

    #[test]
    fn absolute_output_paths_are_kept() {
        assert_eq!(resolve_output("/data", "/tmp/out.jsonl"), "/tmp/out.jsonl");
        assert_eq!(
            resolve_output("/data", "out.jsonl"),
            Path::new("/data").join("out.jsonl").to_string_lossy()
        );
    }
}
