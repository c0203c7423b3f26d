use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::EnvFilter;

use root_config_core::app::{ConfigPublisher, PublisherConfig};
use root_config_core::ports::SystemClock;

/// Publish the compiled root config bundle under a stable and a cache-busted URL
#[derive(Debug, Parser)]
#[command(name = "root-config", author, version, long_about = None)]
struct Cli {
    /// Project root that relative paths are resolved against
    #[arg(long, value_name = "DIR", default_value = ".")]
    project_root: PathBuf,

    /// TOML publisher configuration
    #[arg(short, long, value_name = "FILE.toml")]
    config: Option<PathBuf>,

    /// Exit with a non-zero status when publishing fails
    #[arg(long)]
    strict: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();

    let cli = Cli::parse();
    match run(&cli).await {
        Ok(true) => ExitCode::SUCCESS,
        // 失敗は publisher がログ済み。--strict のときだけ終了コードに反映する
        Ok(false) if cli.strict => ExitCode::FAILURE,
        Ok(false) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("root_config=info,root_config_core=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}

/// 設定を読み、一度だけ公開する。公開できたら true
async fn run(cli: &Cli) -> anyhow::Result<bool> {
    let config = match &cli.config {
        Some(path) => PublisherConfig::load(path)
            .with_context(|| format!("unable to load publisher config {}", path.display()))?,
        None => PublisherConfig::default(),
    };
    let config = config.resolve(&cli.project_root);

    let publisher = ConfigPublisher::new(config, SystemClock);
    Ok(publisher.publish().await.is_ok())
}
