// API sections, one per area of the Marketplace API

pub mod discussions;
pub mod fulfillment;
pub mod offers;
pub mod orders;
pub mod products;
pub mod relays;
pub mod seller;
pub mod webmail;

pub use discussions::Discussions;
pub use fulfillment::{Fulfillment, decode_delivery_document};
pub use offers::Offers;
pub use orders::Orders;
pub use products::Products;
pub use relays::Relays;
pub use seller::Seller;
pub use webmail::WebMail;
