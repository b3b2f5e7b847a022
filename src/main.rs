use clap::Parser;
use miette::{IntoDiagnostic, Result};
use paygauge::infrastructure::logger;
use paygauge::interfaces::http;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Address to bind the HTTP server to
    #[arg(long, default_value = "127.0.0.1:8080")]
    listen: String,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "paygauge=info,info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logger::init(&cli.log_level);

    http::serve(&cli.listen).await.into_diagnostic()?;

    Ok(())
}
