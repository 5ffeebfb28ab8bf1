// Order listing, validation, refunds and parcel claims

use cdiscount_soap::ArrayOf;
use serde::Serialize;
use serde_json::Value;

use crate::{
    connection::Connection,
    error::{ClientError, Result},
    model::{
        Motive, OrderFilter, OrderValidation, ParcelInfos, REFUND_MOTIVES, RefundVoucherRequest,
        ValidateOrder, ValidateOrderListMessage, motive_id,
        orders::{CreateRefundVoucherRequest, RefundInformation},
    },
};

pub struct Orders<'a> {
    connection: &'a Connection,
}

impl<'a> Orders<'a> {
    pub(crate) fn new(connection: &'a Connection) -> Self {
        Self { connection }
    }

    /// Orders matching the filter; order lines are fetched unless the filter says otherwise
    pub async fn get_order_list(&self, filter: OrderFilter) -> Result<Value> {
        let filter = OrderFilter {
            fetch_order_lines: filter.fetch_order_lines.or(Some(true)),
            ..filter
        };
        self.connection
            .call("GetOrderList", vec![("orderFilter", serde_json::to_value(&filter)?)])
            .await
    }

    /// Marketplace settings, such as the carrier list
    pub async fn get_global_configuration(&self) -> Result<Value> {
        self.connection.call("GetGlobalConfiguration", vec![]).await
    }

    /// Build the `ValidateOrderList` message from one flat record per order
    pub fn prepare_validations(
        &self,
        validations: Vec<OrderValidation>,
    ) -> Result<ValidateOrderListMessage> {
        let mut orders = Vec::with_capacity(validations.len());
        for validation in validations {
            if validation.order_number.trim().is_empty() {
                return Err(ClientError::InvalidArgument(
                    "OrderNumber is required to validate an order".to_string(),
                ));
            }
            if let Some(line) = validation
                .order_lines
                .iter()
                .find(|line| line.seller_product_id.trim().is_empty())
            {
                return Err(ClientError::InvalidArgument(format!(
                    "SellerProductId is required on every line of order {} ({:?})",
                    validation.order_number, line
                )));
            }
            orders.push(ValidateOrder::from(validation));
        }
        Ok(ValidateOrderListMessage::new(orders))
    }

    /// Accept, refuse or ship orders
    pub async fn validate_order_list(&self, message: &ValidateOrderListMessage) -> Result<Value> {
        self.connection
            .call(
                "ValidateOrderList",
                vec![("validateOrderListMessage", serde_json::to_value(message)?)],
            )
            .await
    }

    /// Refund shipped order lines or make a commercial gesture
    pub async fn create_refund_voucher(&self, request: &RefundVoucherRequest) -> Result<Value> {
        let gestures = request
            .commercial_gestures
            .iter()
            .map(|gesture| {
                Ok(RefundInformation {
                    amount: gesture.amount,
                    motive_id: resolve_motive(&gesture.motive)?,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let wire = CreateRefundVoucherRequest {
            commercial_gesture_list: ArrayOf::new("RefundInformation", gestures),
            order_number: request.order_number.clone(),
            seller_refund_list: ArrayOf::new(
                "SellerRefundRequest",
                request.seller_refunds.iter().cloned(),
            ),
        };
        self.connection
            .call("CreateRefundVoucher", vec![("request", serde_json::to_value(&wire)?)])
            .await
    }

    /// Ask for an investigation or a delivery certificate on parcels
    pub async fn manage_parcel(
        &self,
        parcel_actions: Option<Vec<ParcelInfos>>,
        scopus_id: Option<&str>,
    ) -> Result<Value> {
        #[derive(Serialize)]
        #[serde(rename_all = "PascalCase")]
        struct ManageParcelRequest<'a> {
            parcel_actions_list: Option<ArrayOf<ParcelInfos>>,
            scopus_id: Option<&'a str>,
        }

        let request = ManageParcelRequest {
            parcel_actions_list: parcel_actions.map(|actions| ArrayOf::new("ParcelInfos", actions)),
            scopus_id,
        };
        self.connection
            .call(
                "ManageParcel",
                vec![("manageParcelRequest", serde_json::to_value(&request)?)],
            )
            .await
    }
}

fn resolve_motive(motive: &Motive) -> Result<i32> {
    match motive {
        Motive::Id(id) => Ok(*id),
        Motive::Label(label) => motive_id(label).ok_or_else(|| {
            let labels: Vec<&str> = REFUND_MOTIVES.iter().map(|(name, _)| *name).collect();
            ClientError::InvalidArgument(format!(
                "unknown motive label {}. Please choose a valid label ({})",
                label,
                labels.join(", ")
            ))
        }),
    }
}
