use clap::Subcommand;
use serde_json::Value;

use crate::settings::Settings;

#[derive(Debug, Subcommand)]
pub enum RelaysCommand {
    /// Parcel shops declared by the seller
    Shops,
    /// Submit an XLSX relay file available at a public URL
    Submit { uri: String },
    /// Integration state of a relay file
    Result { relays_file_id: i64 },
}

pub async fn run(command: RelaysCommand, settings: &Settings) -> anyhow::Result<Value> {
    let connection = super::connect(settings).await?;
    let relays = connection.relays();
    let result = match command {
        RelaysCommand::Shops => relays.get_parcel_shop_list().await?,
        RelaysCommand::Submit { uri } => relays.submit_relays_file(&uri).await?,
        RelaysCommand::Result { relays_file_id } => {
            relays.get_relays_file_submission_result(relays_file_id).await?
        }
    };
    Ok(result)
}
