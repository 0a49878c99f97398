use std::process::ExitCode;

use dotenvy::dotenv;
use faucetscan::bootstrap::{init_tracing, run};
use faucetscan::ServiceConfig;

#[tokio::main]
async fn main() -> ExitCode {
    dotenv().ok();

    let config = ServiceConfig::from_env();
    init_tracing(config.as_ref().is_ok_and(|config| config.json_logs));

    let config = match config {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "Invalid configuration");
            return ExitCode::from(1);
        }
    };

    if let Err(e) = run(config).await {
        tracing::error!("Faucet service error: {e:#}");
        return ExitCode::from(1);
    }
    ExitCode::SUCCESS
}
