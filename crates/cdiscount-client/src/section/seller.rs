// Seller account information and performance indicators

use serde_json::Value;

use crate::{connection::Connection, error::Result};

pub struct Seller<'a> {
    connection: &'a Connection,
}

impl<'a> Seller<'a> {
    pub(crate) fn new(connection: &'a Connection) -> Self {
        Self { connection }
    }

    /// Information of the authenticated seller
    pub async fn get_seller_info(&self) -> Result<Value> {
        self.connection.call("GetSellerInformation", vec![]).await
    }

    /// Seller performance indicators
    pub async fn get_seller_indicators(&self) -> Result<Value> {
        self.connection.call("GetSellerIndicators", vec![]).await
    }
}
