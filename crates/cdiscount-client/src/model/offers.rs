// Offer search filters

use std::str::FromStr;

use cdiscount_soap::ArrayOf;
use serde::Serialize;
use serde_with::skip_serializing_none;

/// Filter for `GetOfferList`
#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct OfferFilter {
    pub offer_pool_id: Option<i32>,
    pub seller_product_id_list: Option<ArrayOf<String>>,
}

impl OfferFilter {
    /// Offers matching the given seller references
    pub fn by_seller_product_ids<S: Into<String>>(ids: impl IntoIterator<Item = S>) -> Self {
        Self {
            seller_product_id_list: Some(ArrayOf::strings(ids)),
            ..Default::default()
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum OfferFilterCriterion {
    NewOffersOnly,
    UsedOffersOnly,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum OfferSortOrder {
    ByPriceAscending,
    ByPriceDescending,
    BySoldQuantityDescending,
    ByCreationDateDescending,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum OfferStateFilter {
    WaitingForProductActivation,
    Active,
    Inactive,
    Archived,
    Fulfillment,
}

impl FromStr for OfferStateFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "WaitingForProductActivation" => Ok(Self::WaitingForProductActivation),
            "Active" => Ok(Self::Active),
            "Inactive" => Ok(Self::Inactive),
            "Archived" => Ok(Self::Archived),
            "Fulfillment" => Ok(Self::Fulfillment),
            _ => Err(format!(
                "Invalid offer state: {}. Valid values: WaitingForProductActivation, Active, Inactive, Archived, Fulfillment",
                s
            )),
        }
    }
}

/// Filter for `GetOfferListPaginated`
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct OfferFilterPaginated {
    pub page_number: i32,
    pub offer_filter_criterion: Option<OfferFilterCriterion>,
    pub offer_pool_id: Option<i32>,
    pub offer_sort_order: Option<OfferSortOrder>,
    pub offer_state_filter: Option<OfferStateFilter>,
    pub seller_product_id_list: Option<ArrayOf<String>>,
}

impl OfferFilterPaginated {
    pub fn page(page_number: i32) -> Self {
        Self {
            page_number,
            offer_filter_criterion: None,
            offer_pool_id: None,
            offer_sort_order: None,
            offer_state_filter: None,
            seller_product_id_list: None,
        }
    }
}
