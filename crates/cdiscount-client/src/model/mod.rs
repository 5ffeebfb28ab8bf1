// Request types for the Marketplace API operations

pub mod common;
pub mod discussions;
pub mod fulfillment;
pub mod offers;
pub mod orders;
pub mod products;

pub use common::{PackageFilter, PackageRequest};
pub use discussions::{DiscussionFilter, DiscussionStateFilter, OrderClaimFilter};
pub use fulfillment::{
    ActivationAction, ExternalOrder, ExternalOrderLine, FulfilmentActivationReportRequest,
    FulfilmentOnDemandOrderLineFilter, FulfilmentOrderLineRequest, FulfilmentProductDescription,
    OfferStateAction, OfferStateActionRequest, ProductActivationData, ProductStockListRequest,
    SupplyOrderReportRequest, SupplyOrderRequest,
};
pub use offers::{
    OfferFilter, OfferFilterCriterion, OfferFilterPaginated, OfferSortOrder, OfferStateFilter,
};
pub use orders::{
    CommercialGesture, ManageParcelAction, Motive, OrderFilter, OrderLineValidation, OrderState,
    OrderType, OrderValidation, ParcelInfos, RefundMode, RefundMotive, RefundOrderLine,
    RefundVoucherRequest, SellerRefundRequest, ValidateOrder, ValidateOrderListMessage,
    REFUND_MOTIVES, motive_id,
};
pub use products::{IdentifierType, ModelFilter, ProductFilter};
