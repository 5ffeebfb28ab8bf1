use clap::Subcommand;
use serde_json::Value;

use crate::settings::Settings;

#[derive(Debug, Subcommand)]
pub enum SellerCommand {
    /// Seller account information
    Info,
    /// Performance indicators
    Indicators,
}

pub async fn run(command: SellerCommand, settings: &Settings) -> anyhow::Result<Value> {
    let connection = super::connect(settings).await?;
    let seller = connection.seller();
    let result = match command {
        SellerCommand::Info => seller.get_seller_info().await?,
        SellerCommand::Indicators => seller.get_seller_indicators().await?,
    };
    Ok(result)
}
