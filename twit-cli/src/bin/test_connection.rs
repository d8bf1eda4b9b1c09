//! Connection test binary.
//!
//! Usage: `twit-test-connection [credentials.yml]`

use tracing_subscriber::EnvFilter;

use twit_client::{Credentials, TwitApiClient};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // The report owns stdout; logs go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    twit_cli::load_dotenv();

    let path = twit_cli::resolve_credentials_path(std::env::args().nth(1));
    println!("Loading credentials from: {}", path.display());

    let credentials = match Credentials::load(&path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error loading credentials: {e}");
            eprintln!(
                "Please copy credentials.yml.sample to credentials.yml and update it with your actual credentials."
            );
            return Err(e.into());
        }
    };

    println!("Using APP_ID: {}", credentials.app_id());
    println!("Using APP_KEY: {}", credentials.masked_app_key());
    println!();

    let client = TwitApiClient::new(credentials);
    // Unlocked: runtime worker threads may log while a request is in flight.
    twit_cli::report::run_connection_test(&client, &mut std::io::stdout()).await
}
