use clap::Parser;
use pantry_client::utils::logger;
use pantry_client::{ApiClient, ApiError, CliConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    if cli.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    let config = match cli.client_config() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Configuration validation failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };
    tracing::debug!("Using backend at {}", config.normalized_base_url());

    let client = ApiClient::new(&config, cli.token_provider())?;

    match cli.command.execute(&client).await {
        Ok(value) => {
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
        Err(e) => {
            tracing::error!("❌ Request failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());

            let exit_code = match e {
                ApiError::Http { .. } => 2,
                _ => 1,
            };
            std::process::exit(exit_code);
        }
    }

    Ok(())
}
