use anyhow::Context;
use clap::Parser;
use log::info;
use pillminder::Cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .format_timestamp_millis()
        .parse_default_env()
        .try_init();

    let cli = Cli::parse();
    let cwd = std::env::current_dir().context("cwd")?;
    info!("loading layered config (cwd={})", cwd.display());
    let config = cli.resolve_config(cli.config_options(cwd))?;
    pillminder::run(config).await
}
