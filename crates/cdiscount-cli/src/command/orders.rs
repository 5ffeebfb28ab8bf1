use cdiscount_client::model::{OrderFilter, OrderState};
use chrono::{DateTime, Utc};
use clap::Subcommand;
use serde_json::Value;

use crate::settings::Settings;

#[derive(Debug, Subcommand)]
pub enum OrdersCommand {
    /// Search orders
    List {
        /// Order state, repeatable (e.g. WaitingForShipmentAcceptation)
        #[arg(long = "state")]
        states: Vec<OrderState>,
        /// Created after this date (RFC 3339)
        #[arg(long)]
        from: Option<DateTime<Utc>>,
        /// Created before this date (RFC 3339)
        #[arg(long)]
        to: Option<DateTime<Utc>>,
        /// Order reference, repeatable; other criteria are ignored when set
        #[arg(long = "reference")]
        references: Vec<String>,
        /// Leave the order lines out of the result
        #[arg(long)]
        no_lines: bool,
        /// Include parcel information
        #[arg(long)]
        parcels: bool,
    },
    /// Carriers and global order settings
    Configuration,
}

pub(crate) fn order_filter(
    states: Vec<OrderState>,
    from: Option<DateTime<Utc>>,
    to: Option<DateTime<Utc>>,
    references: Vec<String>,
    no_lines: bool,
    parcels: bool,
) -> OrderFilter {
    let mut filter = OrderFilter {
        begin_creation_date: from,
        end_creation_date: to,
        fetch_order_lines: Some(!no_lines),
        fetch_parcels: parcels.then_some(true),
        ..Default::default()
    };
    if !states.is_empty() {
        filter = filter.with_states(states);
    }
    if !references.is_empty() {
        filter = filter.with_order_references(references);
    }
    filter
}

pub async fn run(command: OrdersCommand, settings: &Settings) -> anyhow::Result<Value> {
    let connection = super::connect(settings).await?;
    let orders = connection.orders();
    let result = match command {
        OrdersCommand::List {
            states,
            from,
            to,
            references,
            no_lines,
            parcels,
        } => {
            let filter = order_filter(states, from, to, references, no_lines, parcels);
            orders.get_order_list(filter).await?
        }
        OrdersCommand::Configuration => orders.get_global_configuration().await?,
    };
    Ok(result)
}
