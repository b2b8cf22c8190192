use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::info;

use relay_bootstrap::{run_canonicalize, run_migrate_advancements, run_validate, AppContext};

#[derive(Parser, Debug)]
#[command(name = "forest-relay")]
#[command(about = "Validate and normalize Minecraft/Discord bridge payloads", long_about = None)]
struct Args {
    /// Path to config file
    #[arg(short, long)]
    config: Option<String>,

    /// Log output format
    #[arg(long, value_enum, default_value_t = LogFormat::Text)]
    log_format: LogFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check every envelope in a JSON-lines file
    Validate { file: String },
    /// Re-encode every accepted envelope in canonical form
    Canonicalize {
        file: String,
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Convert retired advancement records into canonical envelopes
    MigrateAdvancements {
        file: String,
        #[arg(short, long)]
        output: Option<String>,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum LogFormat {
    Text,
    Json,
}

fn init_tracing(format: LogFormat) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    match format {
        LogFormat::Text => builder.init(),
        LogFormat::Json => builder.json().init(),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.log_format);

    if let Some(config) = args.config {
        std::env::set_var("RELAY_CONFIG", config);
    }

    let context = AppContext::new().await?;
    let report = match &args.command {
        Command::Validate { file } => run_validate(&context, file).await?,
        Command::Canonicalize { file, output } => {
            run_canonicalize(&context, file, output.as_deref()).await?
        }
        Command::MigrateAdvancements { file, output } => {
            run_migrate_advancements(&context, file, output.as_deref()).await?
        }
    };
    info!("{}", context.state.metrics.render_summary().trim_end());

    if matches!(args.command, Command::Validate { .. }) && report.rejected > 0 {
        return Err(anyhow!(
            "{} of {} payloads rejected",
            report.rejected,
            report.accepted + report.rejected
        ));
    }
    Ok(())
}
