// Offer search and offer package integration

use std::path::{Path, PathBuf};

use cdiscount_package::{OfferPackage, Package};
use serde_json::Value;

use crate::{
    connection::Connection,
    error::Result,
    model::{OfferFilter, OfferFilterPaginated, PackageFilter, PackageRequest},
};

pub struct Offers<'a> {
    connection: &'a Connection,
}

impl<'a> Offers<'a> {
    pub(crate) fn new(connection: &'a Connection) -> Self {
        Self { connection }
    }

    /// Offers matching the filter
    pub async fn get_offer_list(&self, filter: &OfferFilter) -> Result<Value> {
        self.connection
            .call("GetOfferList", vec![("offerFilter", serde_json::to_value(filter)?)])
            .await
    }

    /// One page of offers matching the filter
    pub async fn get_offer_list_paginated(&self, filter: &OfferFilterPaginated) -> Result<Value> {
        self.connection
            .call(
                "GetOfferListPaginated",
                vec![("offerFilter", serde_json::to_value(filter)?)],
            )
            .await
    }

    /// Ask for the integration of the offer package available at `url`
    pub async fn submit_offer_package(&self, url: &str) -> Result<Value> {
        let request = PackageRequest {
            zip_file_full_path: url.to_string(),
        };
        self.connection
            .call(
                "SubmitOfferPackage",
                vec![("offerPackageRequest", serde_json::to_value(&request)?)],
            )
            .await
    }

    /// Progress report of an offer package integration
    pub async fn get_offer_package_submission_result(&self, package_id: i64) -> Result<Value> {
        let filter = PackageFilter { package_id };
        self.connection
            .call(
                "GetOfferPackageSubmissionResult",
                vec![("offerPackageFilter", serde_json::to_value(filter)?)],
            )
            .await
    }

    /// Write the offers of `data` into `<path>.zip`, ready to be uploaded
    pub fn generate_offer_package(
        &self,
        name: &str,
        data: &Value,
        path: impl AsRef<Path>,
        overwrite: bool,
    ) -> Result<PathBuf> {
        let package = OfferPackage::new(name, data)?;
        Ok(package.generate(path, overwrite)?)
    }
}
