use crate::api::analytics::DEFAULT_TREND_DAYS;
use crate::api::pantry::DEFAULT_EXPIRING_DAYS;
use crate::auth::{NoToken, StaticToken};
use crate::config::ClientConfig;
use crate::core::{ApiClient, TokenProvider};
use crate::domain::model::DeliveryItem;
use crate::utils::error::{ApiError, Result};
use crate::utils::validation::Validate;
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use serde_json::Value;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Debug, Clone, Parser)]
#[command(name = "pantry-client")]
#[command(about = "Command-line access to the pantry and spending tracker backend")]
pub struct CliConfig {
    /// Backend origin, e.g. http://localhost:8000
    #[arg(long, env = "PANTRY_API_URL")]
    pub base_url: Option<String>,

    /// Bearer token sent with every request
    #[arg(long, env = "PANTRY_API_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    #[arg(long)]
    pub timeout_seconds: Option<u64>,

    /// TOML file with a [client] table
    #[arg(long)]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl CliConfig {
    /// File (or environment) settings with command-line flags on top.
    pub fn client_config(&self) -> Result<ClientConfig> {
        let mut config = match &self.config {
            Some(path) => ClientConfig::from_file(path)?,
            None => ClientConfig::from_env()?,
        };

        if let Some(base_url) = &self.base_url {
            config.base_url = base_url.clone();
        }
        if let Some(timeout) = self.timeout_seconds {
            config.timeout_seconds = Some(timeout);
        }

        config.validate()?;
        Ok(config)
    }

    pub fn token_provider(&self) -> Arc<dyn TokenProvider> {
        match self.token.as_deref() {
            Some(token) if !token.trim().is_empty() => Arc::new(StaticToken::new(token.trim())),
            _ => Arc::new(NoToken),
        }
    }
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Receipt upload and management
    Receipts {
        #[command(subcommand)]
        action: ReceiptsCommand,
    },
    /// Pantry inventory
    Pantry {
        #[command(subcommand)]
        action: PantryCommand,
    },
    /// Delivery vs. home cooking comparisons
    Compare {
        #[command(subcommand)]
        action: CompareCommand,
    },
    /// Spending, calorie, waste and savings analytics
    Analytics {
        #[command(subcommand)]
        action: AnalyticsCommand,
    },
    Notifications {
        #[command(subcommand)]
        action: NotificationsCommand,
    },
    /// Profile of the signed-in user
    Auth {
        #[command(subcommand)]
        action: AuthCommand,
    },
}

/// Arguments taking text accept `@path` to read the value from a file.
#[derive(Debug, Clone, Subcommand)]
pub enum ReceiptsCommand {
    Upload {
        /// Base64-encoded receipt image, or @file containing it
        image_base64: String,
        /// RFC 3339 timestamp, e.g. 2024-05-01T12:00:00Z
        #[arg(long)]
        purchase_date: Option<DateTime<Utc>>,
    },
    List,
    Get {
        receipt_id: String,
    },
    Update {
        receipt_id: String,
        /// JSON object with the fields to change, or @file
        data: String,
    },
    Delete {
        receipt_id: String,
    },
}

#[derive(Debug, Clone, Subcommand)]
pub enum PantryCommand {
    List {
        #[arg(long)]
        category: Option<String>,
    },
    Expiring {
        #[arg(long, default_value_t = DEFAULT_EXPIRING_DAYS)]
        days: u32,
    },
    Add {
        /// JSON object describing the item, or @file
        item: String,
    },
    Update {
        item_id: String,
        data: String,
    },
    Consume {
        item_id: String,
    },
    Delete {
        item_id: String,
    },
}

#[derive(Debug, Clone, Subcommand)]
pub enum CompareCommand {
    Analyze {
        #[arg(long)]
        name: String,
        #[arg(long)]
        restaurant: String,
        #[arg(long)]
        price: f64,
        #[arg(long)]
        calories: Option<f64>,
        /// Base64 photo of the order, or @file
        #[arg(long)]
        image_base64: Option<String>,
    },
    History,
    Get {
        comparison_id: String,
    },
}

#[derive(Debug, Clone, Subcommand)]
pub enum AnalyticsCommand {
    Spending {
        #[arg(long, default_value_t = DEFAULT_TREND_DAYS)]
        days: u32,
    },
    Calories {
        #[arg(long, default_value_t = DEFAULT_TREND_DAYS)]
        days: u32,
    },
    Waste,
    Savings,
    Today,
}

#[derive(Debug, Clone, Subcommand)]
pub enum NotificationsCommand {
    List {
        #[arg(long)]
        unread_only: bool,
    },
    MarkRead {
        notification_id: String,
    },
    RegisterToken {
        expo_push_token: String,
    },
    SendTest,
}

#[derive(Debug, Clone, Subcommand)]
pub enum AuthCommand {
    SetupProfile {
        /// JSON preferences object, or @file
        preferences: String,
    },
    Me,
    UpdateProfile {
        data: String,
    },
}

impl Command {
    pub async fn execute(&self, client: &ApiClient) -> Result<Value> {
        match self {
            Command::Receipts { action } => {
                let api = client.receipts();
                match action {
                    ReceiptsCommand::Upload {
                        image_base64,
                        purchase_date,
                    } => {
                        let image = read_text_arg(image_base64)?;
                        api.upload(image.trim(), *purchase_date).await
                    }
                    ReceiptsCommand::List => api.list().await,
                    ReceiptsCommand::Get { receipt_id } => api.get(receipt_id).await,
                    ReceiptsCommand::Update { receipt_id, data } => {
                        api.update(receipt_id, parse_json_arg(data)?).await
                    }
                    ReceiptsCommand::Delete { receipt_id } => api.delete(receipt_id).await,
                }
            }
            Command::Pantry { action } => {
                let api = client.pantry();
                match action {
                    PantryCommand::List { category } => api.list(category.as_deref()).await,
                    PantryCommand::Expiring { days } => api.expiring(Some(*days)).await,
                    PantryCommand::Add { item } => api.add(parse_json_arg(item)?).await,
                    PantryCommand::Update { item_id, data } => {
                        api.update(item_id, parse_json_arg(data)?).await
                    }
                    PantryCommand::Consume { item_id } => api.consume(item_id).await,
                    PantryCommand::Delete { item_id } => api.delete(item_id).await,
                }
            }
            Command::Compare { action } => {
                let api = client.compare();
                match action {
                    CompareCommand::Analyze {
                        name,
                        restaurant,
                        price,
                        calories,
                        image_base64,
                    } => {
                        let item = DeliveryItem {
                            name: name.clone(),
                            restaurant: restaurant.clone(),
                            price: *price,
                            calories: *calories,
                        };
                        let image = image_base64.as_deref().map(read_text_arg).transpose()?;
                        api.analyze(&item, image.as_deref().map(str::trim)).await
                    }
                    CompareCommand::History => api.history().await,
                    CompareCommand::Get { comparison_id } => api.get(comparison_id).await,
                }
            }
            Command::Analytics { action } => {
                let api = client.analytics();
                match action {
                    AnalyticsCommand::Spending { days } => api.spending(Some(*days)).await,
                    AnalyticsCommand::Calories { days } => api.calories(Some(*days)).await,
                    AnalyticsCommand::Waste => api.waste().await,
                    AnalyticsCommand::Savings => api.savings().await,
                    AnalyticsCommand::Today => api.today().await,
                }
            }
            Command::Notifications { action } => {
                let api = client.notifications();
                match action {
                    NotificationsCommand::List { unread_only } => api.list(*unread_only).await,
                    NotificationsCommand::MarkRead { notification_id } => {
                        api.mark_read(notification_id).await
                    }
                    NotificationsCommand::RegisterToken { expo_push_token } => {
                        api.register_token(expo_push_token).await
                    }
                    NotificationsCommand::SendTest => api.send_test().await,
                }
            }
            Command::Auth { action } => {
                let api = client.auth();
                match action {
                    AuthCommand::SetupProfile { preferences } => {
                        api.setup_profile(parse_json_arg(preferences)?).await
                    }
                    AuthCommand::Me => api.me().await,
                    AuthCommand::UpdateProfile { data } => {
                        api.update_profile(parse_json_arg(data)?).await
                    }
                }
            }
        }
    }
}

fn read_text_arg(raw: &str) -> Result<String> {
    match raw.strip_prefix('@') {
        Some(path) => Ok(std::fs::read_to_string(path)?),
        None => Ok(raw.to_string()),
    }
}

fn parse_json_arg(raw: &str) -> Result<Value> {
    let text = read_text_arg(raw)?;
    serde_json::from_str(&text).map_err(|e| ApiError::InvalidConfigValue {
        field: "json argument".to_string(),
        value: text.clone(),
        reason: e.to_string(),
    })
}
