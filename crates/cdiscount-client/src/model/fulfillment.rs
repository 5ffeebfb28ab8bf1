// Fulfillment requests: supply orders, activations, external orders and stock

use cdiscount_soap::ArrayOf;
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;
use serde_with::skip_serializing_none;

/// A product to send to a fulfillment warehouse
#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct FulfilmentProductDescription {
    pub external_supply_order_id: Option<String>,
    pub product_ean: String,
    pub quantity: i32,
    pub seller_product_reference: Option<String>,
    pub warehouse: Option<String>,
    pub warehouse_reception_min_date: Option<DateTime<Utc>>,
}

/// An order line to supply on demand
#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct FulfilmentOrderLineRequest {
    pub order_reference: String,
    pub product_ean: String,
    pub warehouse: Option<String>,
}

/// Filter for `GetFulfilmentSupplyOrderReportList`
#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct SupplyOrderReportRequest {
    pub begin_creation_date: Option<DateTime<Utc>>,
    pub deposit_id_list: Option<ArrayOf<i32>>,
    pub end_creation_date: Option<DateTime<Utc>>,
    pub page_number: Option<i32>,
    pub page_size: Option<i32>,
}

/// Filter for `GetFulfilmentSupplyOrder`
#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct SupplyOrderRequest {
    pub begin_modification_date: Option<DateTime<Utc>>,
    pub end_modification_date: Option<DateTime<Utc>>,
    pub page_number: Option<i32>,
    pub page_size: Option<i32>,
    pub supply_order_number_list: Option<ArrayOf<String>>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum ActivationAction {
    Activation,
    Deactivation,
}

/// A product to activate or deactivate for fulfillment
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ProductActivationData {
    pub action: ActivationAction,
    pub height: Option<f64>,
    pub length: Option<f64>,
    pub product_ean: Option<String>,
    pub seller_product_reference: String,
    pub weight: Option<f64>,
    pub width: Option<f64>,
}

/// Filter for `GetFulfilmentActivationReportList`
#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct FulfilmentActivationReportRequest {
    pub begin_date: Option<DateTime<Utc>>,
    pub deposit_id_list: Option<ArrayOf<i32>>,
    pub end_date: Option<DateTime<Utc>>,
}

/// Filter for `GetFulfilmentOrderListToSupply`
#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct FulfilmentOnDemandOrderLineFilter {
    pub order_reference: Option<String>,
    pub product_ean: Option<String>,
    pub warehouse: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum OfferStateAction {
    Publish,
    Unpublish,
}

/// Puts an offer online or offline
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct OfferStateActionRequest {
    pub action: OfferStateAction,
    pub seller_product_id: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ExternalOrderLine {
    pub product_ean: String,
    pub product_reference: String,
    pub quantity: i32,
}

/// An order taken on another marketplace, to be fulfilled by Cdiscount
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ExternalOrder {
    pub comments: Option<String>,
    /// Marketplace the order comes from (e.g. `FNAC`)
    pub corporation: String,
    /// Customer and shipping address record
    pub customer: Value,
    pub customer_order_number: String,
    pub order_date: DateTime<Utc>,
    pub order_line_list: ArrayOf<ExternalOrderLine>,
    pub shipping_mode: String,
}

impl ExternalOrder {
    pub fn lines(lines: impl IntoIterator<Item = ExternalOrderLine>) -> ArrayOf<ExternalOrderLine> {
        ArrayOf::new("ExternalOrderLine", lines)
    }
}

/// Filter for `GetProductStockList`
#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ProductStockListRequest {
    pub bar_code_list: Option<ArrayOf<String>>,
    pub fulfilment_referencement: Option<String>,
    pub shippable_stock: Option<String>,
    pub sold_out: Option<bool>,
    pub warehouse_list: Option<ArrayOf<String>>,
}
