use recipe_form::{config::AppConfig, run_server};
use tracing::error;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = AppConfig::from_env();

    if let Err(err) = run_server(config).await {
        error!(error = %err, "recipe form exited");
        std::process::exit(1);
    }
}
