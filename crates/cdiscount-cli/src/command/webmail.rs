use clap::Subcommand;
use serde_json::Value;

use crate::settings::Settings;

#[derive(Debug, Subcommand)]
pub enum WebMailCommand {
    /// Encrypted address of the customer of an order
    Guid { scopus_id: String },
    /// Encrypted addresses to answer discussions
    Mails {
        #[arg(required = true)]
        discussion_ids: Vec<i64>,
    },
}

pub async fn run(command: WebMailCommand, settings: &Settings) -> anyhow::Result<Value> {
    let connection = super::connect(settings).await?;
    let webmail = connection.webmail();
    let result = match command {
        WebMailCommand::Guid { scopus_id } => {
            webmail.generate_discussion_mail_guid(&scopus_id).await?
        }
        WebMailCommand::Mails { discussion_ids } => {
            webmail.get_discussion_mail_list(&discussion_ids).await?
        }
    };
    Ok(result)
}
