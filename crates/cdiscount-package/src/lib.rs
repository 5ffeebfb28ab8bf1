//! Offer and product integration packages
//!
//! Offers and products are pushed to the marketplace as zip packages the
//! service downloads from a public URL. This crate validates the records,
//! renders `Offers.xml` / `Products.xml` and writes the archive.
//!
//! ```no_run
//! use cdiscount_package::{OfferPackage, Package};
//! use serde_json::json;
//!
//! let data = json!({
//!     "OfferCollection": [{"Offer": {"ProductEan": "2009863600561", "SellerProductId": "SKU-A", "Price": 10}}],
//!     "OfferPublicationList": [1, 16],
//! });
//! let path = OfferPackage::new("offers", &data)?.generate("/tmp/offers", true)?;
//! # Ok::<(), cdiscount_package::PackageError>(())
//! ```

pub mod error;
pub mod offer;
pub mod package;
pub mod product;
pub mod validator;

pub use error::{PackageError, Result};
pub use offer::{Offer, OfferPackage, PackageType};
pub use package::{Package, archive_path};
pub use product::{Product, ProductPackage};
