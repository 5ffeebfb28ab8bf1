// Discussion filters (claims and questions)

use std::str::FromStr;

use cdiscount_soap::ArrayOf;
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_with::skip_serializing_none;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum DiscussionStateFilter {
    All,
    Open,
    Closed,
    NotProcessed,
}

impl FromStr for DiscussionStateFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "All" => Ok(DiscussionStateFilter::All),
            "Open" => Ok(DiscussionStateFilter::Open),
            "Closed" => Ok(DiscussionStateFilter::Closed),
            "NotProcessed" => Ok(DiscussionStateFilter::NotProcessed),
            _ => Err(format!(
                "Invalid discussion state: {}. Valid values: All, Open, Closed, NotProcessed",
                s
            )),
        }
    }
}

/// Filter for offer and order questions
#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DiscussionFilter {
    pub begin_creation_date: Option<DateTime<Utc>>,
    pub begin_modification_date: Option<DateTime<Utc>>,
    pub end_creation_date: Option<DateTime<Utc>>,
    pub end_modification_date: Option<DateTime<Utc>>,
    #[serde(rename = "ProductEANList")]
    pub product_ean_list: Option<ArrayOf<String>>,
    pub product_seller_reference_list: Option<ArrayOf<String>>,
    pub status_list: Option<ArrayOf<DiscussionStateFilter>>,
}

impl DiscussionFilter {
    pub fn with_status(mut self, states: impl IntoIterator<Item = DiscussionStateFilter>) -> Self {
        self.status_list = Some(ArrayOf::new("DiscussionStateFilter", states));
        self
    }
}

/// Filter for order claims
#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct OrderClaimFilter {
    #[serde(flatten)]
    pub discussion: DiscussionFilter,
    pub only_with_message_from_cds_customer_service: Option<bool>,
    pub order_number_list: Option<ArrayOf<String>>,
}
