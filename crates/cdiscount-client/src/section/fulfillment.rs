// Fulfillment by Cdiscount: supply orders, activations, external orders and stock

use base64::{Engine, engine::general_purpose::STANDARD};
use cdiscount_soap::ArrayOf;
use serde::Serialize;
use serde_json::{Value, json};

use crate::{
    connection::Connection,
    error::{ClientError, Result},
    model::{
        ExternalOrder, FulfilmentActivationReportRequest, FulfilmentOnDemandOrderLineFilter,
        FulfilmentOrderLineRequest, FulfilmentProductDescription, OfferStateActionRequest,
        ProductActivationData, ProductStockListRequest, SupplyOrderReportRequest,
        SupplyOrderRequest,
    },
};

pub struct Fulfillment<'a> {
    connection: &'a Connection,
}

impl<'a> Fulfillment<'a> {
    pub(crate) fn new(connection: &'a Connection) -> Self {
        Self { connection }
    }

    async fn request(&self, operation: &str, request: Value) -> Result<Value> {
        self.connection.call(operation, vec![("request", request)]).await
    }

    /// Ask for products to be sent to a fulfillment warehouse
    pub async fn submit_fulfillment_supply_order(
        &self,
        products: Vec<FulfilmentProductDescription>,
    ) -> Result<Value> {
        let products = ArrayOf::new("FulfilmentProductDescription", products);
        self.request(
            "SubmitFulfilmentSupplyOrder",
            json!({ "ProductList": products }),
        )
        .await
    }

    /// Ask for the supply of products for given orders
    pub async fn submit_fulfillment_on_demand_supply_order(
        &self,
        order_lines: Vec<FulfilmentOrderLineRequest>,
    ) -> Result<Value> {
        let order_lines = ArrayOf::new("FulfilmentOrderLineRequest", order_lines);
        self.request(
            "SubmitFulfilmentOnDemandSupplyOrder",
            json!({ "OrderLineList": order_lines }),
        )
        .await
    }

    /// Supply order reports
    pub async fn get_fulfillment_supply_order_report_list(
        &self,
        request: &SupplyOrderReportRequest,
    ) -> Result<Value> {
        self.request(
            "GetFulfilmentSupplyOrderReportList",
            serde_json::to_value(request)?,
        )
        .await
    }

    /// Printable delivery document of a supply order; see [`decode_delivery_document`]
    pub async fn get_fulfillment_delivery_document(&self, deposit_id: i64) -> Result<Value> {
        self.request(
            "GetFulfilmentDeliveryDocument",
            json!({ "DepositId": deposit_id }),
        )
        .await
    }

    /// Supply orders
    pub async fn get_fulfillment_supply_order(
        &self,
        request: &SupplyOrderRequest,
    ) -> Result<Value> {
        self.request("GetFulfilmentSupplyOrder", serde_json::to_value(request)?)
            .await
    }

    /// Ask for products activation or deactivation
    pub async fn submit_fulfillment_activation(
        &self,
        products: Vec<ProductActivationData>,
    ) -> Result<Value> {
        let products = ArrayOf::new("ProductActivationData", products);
        self.request(
            "SubmitFulfilmentActivation",
            json!({ "ProductList": products }),
        )
        .await
    }

    /// Activation reports
    pub async fn get_fulfillment_activation_report_list(
        &self,
        request: &FulfilmentActivationReportRequest,
    ) -> Result<Value> {
        self.request(
            "GetFulfilmentActivationReportList",
            serde_json::to_value(request)?,
        )
        .await
    }

    /// Order lines waiting for supply
    pub async fn get_fulfillment_order_list_to_supply(
        &self,
        filter: &FulfilmentOnDemandOrderLineFilter,
    ) -> Result<Value> {
        self.request(
            "GetFulfilmentOrderListToSupply",
            serde_json::to_value(filter)?,
        )
        .await
    }

    /// Put an offer online or offline
    pub async fn submit_offer_state_action(
        &self,
        request: &OfferStateActionRequest,
    ) -> Result<Value> {
        self.connection
            .call(
                "SubmitOfferStateAction",
                vec![("offerStateRequest", serde_json::to_value(request)?)],
            )
            .await
    }

    /// Create an order taken on another marketplace
    pub async fn create_external_order(&self, order: &ExternalOrder) -> Result<Value> {
        self.request("CreateExternalOrder", json!({ "Order": order }))
            .await
    }

    /// Status of an order created with [`create_external_order`](Self::create_external_order)
    pub async fn get_external_order_status(
        &self,
        corporation: &str,
        customer_order_number: &str,
    ) -> Result<Value> {
        #[derive(Serialize)]
        #[serde(rename_all = "PascalCase")]
        struct Request<'a> {
            corporation: &'a str,
            customer_order_number: &'a str,
        }

        let request = Request {
            corporation,
            customer_order_number,
        };
        self.request("GetExternalOrderStatus", serde_json::to_value(&request)?)
            .await
    }

    /// Stock of the products stored in fulfillment warehouses
    pub async fn get_product_stock_list(&self, request: &ProductStockListRequest) -> Result<Value> {
        self.request("GetProductStockList", serde_json::to_value(request)?)
            .await
    }
}

/// Decode the base64 `PdfDocument` of a delivery document result
pub fn decode_delivery_document(result: &Value) -> Result<Vec<u8>> {
    let document = result
        .get("PdfDocument")
        .and_then(Value::as_str)
        .ok_or_else(|| ClientError::InvalidArgument("result has no PdfDocument".to_string()))?;

    let compact: String = document.split_whitespace().collect();
    STANDARD
        .decode(compact)
        .map_err(|e| ClientError::InvalidArgument(format!("invalid PdfDocument: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_delivery_document() {
        let result = json!({"OperationSuccess": "true", "PdfDocument": "JVBERi0xLjQK"});
        assert_eq!(decode_delivery_document(&result).unwrap(), b"%PDF-1.4\n");
    }

    #[test]
    fn test_decode_delivery_document_with_line_breaks() {
        let result = json!({"PdfDocument": "JVBE\nRi0x\nLjQK"});
        assert_eq!(decode_delivery_document(&result).unwrap(), b"%PDF-1.4\n");
    }

    #[test]
    fn test_decode_delivery_document_missing_or_invalid() {
        assert!(matches!(
            decode_delivery_document(&json!({"PdfDocument": null})),
            Err(ClientError::InvalidArgument(_))
        ));
        assert!(matches!(
            decode_delivery_document(&json!({"PdfDocument": "not base64!"})),
            Err(ClientError::InvalidArgument(_))
        ));
    }
}
