//! Main entry point for the lingo demo.

use anyhow::Context;
use lingo_config::{ConfigLoader, I18nConfig};
use lingo_demo::{init_logging, DemoApp, DemoResult};
use std::env;
use tracing::info;

/// Environment variable naming a YAML or TOML config file
const CONFIG_PATH_ENV: &str = "LINGO_CONFIG";

/// Number of times the switch button is pressed
const SWITCHES: usize = 3;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = load_config()
        .await
        .context("Failed to load configuration")?;

    init_logging(&config.logging)?;
    info!("Starting lingo demo");

    let mut app = DemoApp::new(&config);
    let frames = app.run(SWITCHES).await.context("Render loop failed")?;

    for frame in frames {
        println!("{frame}\n");
    }

    Ok(())
}

async fn load_config() -> DemoResult<I18nConfig> {
    let config = match env::var(CONFIG_PATH_ENV) {
        Ok(path) => ConfigLoader::new(path).load().await?,
        Err(_) => ConfigLoader::from_env()?,
    };
    Ok(config)
}
