use cdiscount_client::{
    ArrayOf,
    model::{DiscussionFilter, DiscussionStateFilter, OrderClaimFilter},
};
use clap::Subcommand;
use serde_json::Value;

use crate::settings::Settings;

#[derive(Debug, Subcommand)]
pub enum DiscussionsCommand {
    /// Claims opened on orders
    Claims {
        /// Discussion state, repeatable (All, Open, Closed, NotProcessed)
        #[arg(long = "status")]
        statuses: Vec<DiscussionStateFilter>,
        /// Order number, repeatable
        #[arg(long = "order")]
        orders: Vec<String>,
    },
    /// Questions asked on offers
    OfferQuestions {
        #[arg(long = "status")]
        statuses: Vec<DiscussionStateFilter>,
    },
    /// Questions asked on orders
    OrderQuestions {
        #[arg(long = "status")]
        statuses: Vec<DiscussionStateFilter>,
    },
    /// Close discussions
    Close {
        #[arg(required = true)]
        ids: Vec<i64>,
    },
}

fn discussion_filter(statuses: Vec<DiscussionStateFilter>) -> DiscussionFilter {
    if statuses.is_empty() {
        DiscussionFilter::default()
    } else {
        DiscussionFilter::default().with_status(statuses)
    }
}

pub async fn run(command: DiscussionsCommand, settings: &Settings) -> anyhow::Result<Value> {
    let connection = super::connect(settings).await?;
    let discussions = connection.discussions();
    let result = match command {
        DiscussionsCommand::Claims { statuses, orders } => {
            let filter = OrderClaimFilter {
                discussion: discussion_filter(statuses),
                order_number_list: (!orders.is_empty())
                    .then(|| ArrayOf::strings(orders)),
                ..Default::default()
            };
            discussions.get_order_claim_list(&filter).await?
        }
        DiscussionsCommand::OfferQuestions { statuses } => {
            discussions
                .get_offer_question_list(&discussion_filter(statuses))
                .await?
        }
        DiscussionsCommand::OrderQuestions { statuses } => {
            discussions
                .get_order_question_list(&discussion_filter(statuses))
                .await?
        }
        DiscussionsCommand::Close { ids } => discussions.close_discussion_list(&ids).await?,
    };
    Ok(result)
}
