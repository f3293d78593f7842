use anyhow::Result;
use bridge::{Bridge, Settings, StdoutSink};
use clap::Parser;
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "bridge")]
#[command(about = "Forwards a server-sent-events stream to standard output")]
struct Cli {
    /// URL of the event stream endpoint
    #[arg(long, default_value = "http://localhost:8080/hello")]
    url: String,

    /// Separator appended after each payload
    #[arg(long, default_value = "\n")]
    separator: String,

    /// Enable verbose output
    #[arg(long, short)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    env_logger::Builder::from_default_env()
        .filter_level(log_level)
        .init();

    let settings = Settings::new(&cli.url).with_separator(&cli.separator);
    let _bridge = Bridge::establish(&settings, Arc::new(StdoutSink))?;

    // There is no unsubscribe: the connection lives until the process ends.
    tokio::signal::ctrl_c().await?;

    Ok(())
}
