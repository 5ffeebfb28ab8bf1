//! Cdiscount Marketplace API client
//!
//! A thin async client over the Marketplace SOAP web service. A [`Connection`]
//! obtains a session token and exposes one section per API area, each method
//! sending one remote operation and returning the decoded result record.
//!
//! ```no_run
//! # async fn run() -> cdiscount_client::Result<()> {
//! use cdiscount_client::{ClientConfig, Connection, model::OrderFilter, model::OrderState};
//!
//! let connection = Connection::connect(ClientConfig::new("login", "password")).await?;
//! let orders = connection
//!     .orders()
//!     .get_order_list(OrderFilter::default().with_states([OrderState::Shipped]))
//!     .await?;
//! println!("{}", orders);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod connection;
pub mod constants;
pub mod error;
pub mod header;
pub mod model;
pub mod section;

pub use cdiscount_soap::ArrayOf;
pub use config::ClientConfig;
pub use connection::Connection;
pub use error::{ClientError, Result};
pub use header::HeaderMessage;
