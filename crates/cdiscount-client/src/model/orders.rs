// Order filters, validations, refunds and parcel actions

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use cdiscount_soap::ArrayOf;
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_with::skip_serializing_none;

/// Order states known to the service (`OrderStateEnum`)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum OrderState {
    CancelledByCustomer,
    WaitingForSellerAcceptation,
    AcceptedBySeller,
    PaymentInProgress,
    WaitingForShipmentAcceptation,
    Shipped,
    RefusedBySeller,
    AutomaticCancellation,
    PaymentRefused,
    ShipmentRefusedBySeller,
    /// Waiting for the fraud check
    #[serde(rename = "None")]
    WaitingForFraudCheck,
    ValidatedFianet,
    RefusedNoShipment,
    AvailableOnStore,
    NonPickedUpByCustomer,
    PickedUp,
    Filled,
}

impl OrderState {
    pub const ALL: [OrderState; 17] = [
        OrderState::CancelledByCustomer,
        OrderState::WaitingForSellerAcceptation,
        OrderState::AcceptedBySeller,
        OrderState::PaymentInProgress,
        OrderState::WaitingForShipmentAcceptation,
        OrderState::Shipped,
        OrderState::RefusedBySeller,
        OrderState::AutomaticCancellation,
        OrderState::PaymentRefused,
        OrderState::ShipmentRefusedBySeller,
        OrderState::WaitingForFraudCheck,
        OrderState::ValidatedFianet,
        OrderState::RefusedNoShipment,
        OrderState::AvailableOnStore,
        OrderState::NonPickedUpByCustomer,
        OrderState::PickedUp,
        OrderState::Filled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderState::CancelledByCustomer => "CancelledByCustomer",
            OrderState::WaitingForSellerAcceptation => "WaitingForSellerAcceptation",
            OrderState::AcceptedBySeller => "AcceptedBySeller",
            OrderState::PaymentInProgress => "PaymentInProgress",
            OrderState::WaitingForShipmentAcceptation => "WaitingForShipmentAcceptation",
            OrderState::Shipped => "Shipped",
            OrderState::RefusedBySeller => "RefusedBySeller",
            OrderState::AutomaticCancellation => "AutomaticCancellation",
            OrderState::PaymentRefused => "PaymentRefused",
            OrderState::ShipmentRefusedBySeller => "ShipmentRefusedBySeller",
            OrderState::WaitingForFraudCheck => "None",
            OrderState::ValidatedFianet => "ValidatedFianet",
            OrderState::RefusedNoShipment => "RefusedNoShipment",
            OrderState::AvailableOnStore => "AvailableOnStore",
            OrderState::NonPickedUpByCustomer => "NonPickedUpByCustomer",
            OrderState::PickedUp => "PickedUp",
            OrderState::Filled => "Filled",
        }
    }
}

impl Display for OrderState {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderState {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OrderState::ALL
            .into_iter()
            .find(|state| state.as_str() == s)
            .ok_or_else(|| {
                let valid: Vec<&str> = OrderState::ALL.iter().map(|s| s.as_str()).collect();
                format!(
                    "Invalid order state: {}. Valid values: {}",
                    s,
                    valid.join(", ")
                )
            })
    }
}

/// Fulfillment channel of an order
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum OrderType {
    /// Marketplace order fulfilled by Cdiscount
    #[serde(rename = "MKPFBC")]
    MarketplaceFulfillment,
    /// External order fulfilled by Cdiscount
    #[serde(rename = "EXTFBC")]
    ExternalFulfillment,
    #[serde(rename = "FBC")]
    Fulfillment,
}

/// Filter for `GetOrderList`
///
/// `OrderReferenceList` cannot be combined with other criteria: when it is set,
/// the service ignores the rest of the filter.
#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct OrderFilter {
    pub begin_creation_date: Option<DateTime<Utc>>,
    pub begin_modification_date: Option<DateTime<Utc>>,
    pub corporation_code: Option<String>,
    pub end_creation_date: Option<DateTime<Utc>>,
    pub end_modification_date: Option<DateTime<Utc>>,
    pub fetch_order_lines: Option<bool>,
    pub fetch_parcels: Option<bool>,
    pub include_external_fbc_sku: Option<bool>,
    pub order_reference_list: Option<ArrayOf<String>>,
    pub order_type: Option<OrderType>,
    /// Seller references, separated by `;` for a multiple search
    pub partner_order_ref: Option<String>,
    pub states: Option<ArrayOf<OrderState>>,
}

impl OrderFilter {
    pub fn with_states(mut self, states: impl IntoIterator<Item = OrderState>) -> Self {
        self.states = Some(ArrayOf::new("OrderStateEnum", states));
        self
    }

    pub fn with_order_references<S: Into<String>>(
        mut self,
        references: impl IntoIterator<Item = S>,
    ) -> Self {
        self.order_reference_list = Some(ArrayOf::strings(references));
        self
    }

    pub fn with_creation_range(mut self, begin: DateTime<Utc>, end: Option<DateTime<Utc>>) -> Self {
        self.begin_creation_date = Some(begin);
        self.end_creation_date = end;
        self
    }
}

/// One order line to accept, refuse or ship
#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct OrderLineValidation {
    pub acceptation_state: Option<String>,
    pub product_condition: Option<String>,
    pub seller_product_id: String,
    pub type_of_return: Option<String>,
}

/// Validation of one order, in the flat form accepted by
/// [`Orders::prepare_validations`](crate::section::Orders::prepare_validations)
#[derive(Clone, Debug, Default, PartialEq)]
pub struct OrderValidation {
    pub carrier_name: Option<String>,
    pub order_number: String,
    pub order_state: Option<OrderState>,
    pub tracking_number: Option<String>,
    pub tracking_url: Option<String>,
    pub order_lines: Vec<OrderLineValidation>,
}

/// `ValidateOrder` as sent on the wire
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ValidateOrder {
    pub carrier_name: Option<String>,
    pub order_line_list: ArrayOf<OrderLineValidation>,
    pub order_number: String,
    pub order_state: Option<OrderState>,
    pub tracking_number: Option<String>,
    pub tracking_url: Option<String>,
}

impl From<OrderValidation> for ValidateOrder {
    fn from(validation: OrderValidation) -> Self {
        Self {
            carrier_name: validation.carrier_name,
            order_line_list: ArrayOf::new("ValidateOrderLine", validation.order_lines),
            order_number: validation.order_number,
            order_state: validation.order_state,
            tracking_number: validation.tracking_number,
            tracking_url: validation.tracking_url,
        }
    }
}

/// Parameter of `ValidateOrderList`
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ValidateOrderListMessage {
    pub order_list: ArrayOf<ValidateOrder>,
}

impl ValidateOrderListMessage {
    pub fn new(orders: impl IntoIterator<Item = ValidateOrder>) -> Self {
        Self {
            order_list: ArrayOf::new("ValidateOrder", orders),
        }
    }

    pub fn orders(&self) -> &[ValidateOrder] {
        self.order_list.items()
    }
}

/// Commercial gesture labels and the motive ids they stand for
pub const REFUND_MOTIVES: &[(&str, i32)] = &[
    ("compensation_on_missing_stock", 131),
    ("product_delivered_damaged", 132),
    ("product_delivered_missing", 132),
    ("error_of_reference", 133),
    ("error_of_color", 133),
    ("error_of_size", 133),
    ("fees_unduly_charged_to_the_customer", 134),
    ("late_delivery", 135),
    ("product_return_fees", 136),
    ("shipping_fees", 137),
    ("warranty_period_passed", 138),
    ("rights_of_withdrawal_passed", 138),
    ("others", 139),
];

/// Motive id for a commercial gesture label
pub fn motive_id(label: &str) -> Option<i32> {
    REFUND_MOTIVES
        .iter()
        .find(|(name, _)| *name == label)
        .map(|(_, id)| *id)
}

/// Motive of a commercial gesture, given as an id or as a label
#[derive(Clone, Debug, PartialEq)]
pub enum Motive {
    Id(i32),
    Label(String),
}

impl From<i32> for Motive {
    fn from(id: i32) -> Self {
        Motive::Id(id)
    }
}

impl From<&str> for Motive {
    fn from(label: &str) -> Self {
        Motive::Label(label.to_string())
    }
}

/// A commercial gesture on an order
#[derive(Clone, Debug, PartialEq)]
pub struct CommercialGesture {
    pub amount: f64,
    pub motive: Motive,
}

/// `RefundInformation` as sent on the wire, with the motive resolved
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct RefundInformation {
    pub amount: f64,
    pub motive_id: i32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum RefundMode {
    Claim,
    Retraction,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum RefundMotive {
    VendorRejection,
    ClientCancellation,
    VendorRejectionAndClientCancellation,
    ClientClaim,
    VendorInitiatedRefund,
    ClientRetraction,
    NoClientWithDrawal,
    ProductStockUnavailable,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct RefundOrderLine {
    pub ean: String,
    pub refund_shipping_charges: bool,
    pub seller_product_id: String,
}

/// Refund of order lines shipped by the seller
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct SellerRefundRequest {
    pub mode: RefundMode,
    pub motive: RefundMotive,
    pub refund_order_line: RefundOrderLine,
}

/// Input of `CreateRefundVoucher`
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RefundVoucherRequest {
    pub order_number: String,
    pub commercial_gestures: Vec<CommercialGesture>,
    pub seller_refunds: Vec<SellerRefundRequest>,
}

/// `CreateRefundVoucherRequest` as sent on the wire
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct CreateRefundVoucherRequest {
    pub commercial_gesture_list: ArrayOf<RefundInformation>,
    pub order_number: String,
    pub seller_refund_list: ArrayOf<SellerRefundRequest>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum ManageParcelAction {
    AskingForInvestigation,
    AskingForDeliveryCertification,
}

/// An action on a parcel
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ParcelInfos {
    pub manage_parcel: ManageParcelAction,
    pub parcel_number: String,
    pub sku: String,
}
