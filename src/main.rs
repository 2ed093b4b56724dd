use anyhow::Result;
use stint::commands::Cli;

fn main() -> Result<()> {
    // `.env` may carry STINT_LOG and RUST_LOG overrides.
    dotenv::dotenv().ok();

    // The message macros route through tracing in debug mode; give them a
    // subscriber only when the user asked for one.
    if std::env::var("STINT_DEBUG").is_ok() || std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
            )
            .init();
    }

    Cli::menu()
}
