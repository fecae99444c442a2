// Advisory CLI Entry Point
//
// Purpose: Score one JSON advisory request and print the JSON response
// Usage: cargo run --bin score_reading -- request.json
//        echo '{"operation": "disease", "humidity": 85}' | cargo run --bin score_reading

use agri_risk_scorer::{Advisor, AdvisorConfig, AdvisoryRequest};
use anyhow::Context;
use std::io::Read;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so stdout stays pure JSON
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "agri_risk_scorer=info,warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Optional config file via ADVISOR_CONFIG
    let config = AdvisorConfig::from_env("ADVISOR_CONFIG")?;
    tracing::debug!(?config, "advisor configuration");

    let input = match std::env::args().nth(1) {
        Some(path) => std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read request file: {}", path))?,
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read request from stdin")?;
            buffer
        }
    };

    let request: AdvisoryRequest =
        serde_json::from_str(&input).context("Failed to parse advisory request")?;
    tracing::info!("Handling request: {:?}", request);

    let advisor = Advisor::new(config);
    let response = advisor.handle(request)?;

    println!("{}", serde_json::to_string_pretty(&response)?);

    Ok(())
}
