// Product catalogue, models and product package integration

use std::path::{Path, PathBuf};

use cdiscount_package::{Package, ProductPackage};
use cdiscount_soap::ArrayOf;
use serde_json::Value;
use tracing::debug;

use crate::{
    connection::Connection,
    error::{ClientError, Result},
    model::{
        IdentifierType, ModelFilter, PackageFilter, PackageRequest, ProductFilter,
        products::IdentifierRequest,
    },
};

pub struct Products<'a> {
    connection: &'a Connection,
}

impl<'a> Products<'a> {
    pub(crate) fn new(connection: &'a Connection) -> Self {
        Self { connection }
    }

    /// Categories opened to the seller
    pub async fn get_allowed_category_tree(&self) -> Result<Value> {
        self.connection.call("GetAllowedCategoryTree", vec![]).await
    }

    /// All marketplace categories, read with the public catalogue account
    pub async fn get_all_allowed_category_tree(&self) -> Result<Value> {
        debug!("Opening catalogue connection for GetAllAllowedCategoryTree");
        let all_data = self.connection.all_data().await?;
        all_data.call("GetAllAllowedCategoryTree", vec![]).await
    }

    /// Products of the reference catalogue in a category
    pub async fn get_product_list(&self, category_code: &str) -> Result<Value> {
        let filter = ProductFilter {
            category_code: category_code.to_string(),
        };
        self.connection
            .call(
                "GetProductList",
                vec![("productFilter", serde_json::to_value(&filter)?)],
            )
            .await
    }

    /// Models allocated to the seller, optionally for one category
    pub async fn get_model_list(&self, category: Option<&str>) -> Result<Value> {
        let filter = match category {
            Some(code) => serde_json::to_value(ModelFilter::category(code))?,
            None => Value::Null,
        };
        self.connection
            .call("GetModelList", vec![("modelFilter", filter)])
            .await
    }

    /// Models opened on the marketplace, read with the public catalogue account
    pub async fn get_all_model_list(&self) -> Result<Value> {
        debug!("Opening catalogue connection for GetAllModelList");
        let all_data = self.connection.all_data().await?;
        all_data.call("GetAllModelList", vec![]).await
    }

    /// Complete list of brands
    pub async fn get_brand_list(&self) -> Result<Value> {
        self.connection.call("GetBrandList", vec![]).await
    }

    /// Ask for the integration of the product package available at `url`
    pub async fn submit_product_package(&self, url: &str) -> Result<Value> {
        let request = PackageRequest {
            zip_file_full_path: url.to_string(),
        };
        self.connection
            .call(
                "SubmitProductPackage",
                vec![("productPackageRequest", serde_json::to_value(&request)?)],
            )
            .await
    }

    /// Progress report of a product package integration
    pub async fn get_product_package_submission_result(&self, package_id: i64) -> Result<Value> {
        let filter = PackageFilter { package_id };
        self.connection
            .call(
                "GetProductPackageSubmissionResult",
                vec![("productPackageFilter", serde_json::to_value(filter)?)],
            )
            .await
    }

    /// Information on the products created by a package
    pub async fn get_product_package_product_matching_file_data(
        &self,
        package_id: i64,
    ) -> Result<Value> {
        let filter = PackageFilter { package_id };
        self.connection
            .call(
                "GetProductPackageProductMatchingFileData",
                vec![("productPackageFilter", serde_json::to_value(filter)?)],
            )
            .await
    }

    /// Details of the products identified by the given EANs
    pub async fn get_product_list_by_identifier<S: Into<String>>(
        &self,
        eans: impl IntoIterator<Item = S>,
    ) -> Result<Value> {
        let values = ArrayOf::strings(eans);
        if values.is_empty() {
            return Err(ClientError::InvalidArgument(
                "at least one EAN is required".to_string(),
            ));
        }

        let request = IdentifierRequest {
            identifier_type: IdentifierType::Ean,
            value_list: values,
        };
        self.connection
            .call(
                "GetProductListByIdentifier",
                vec![("identifierRequest", serde_json::to_value(&request)?)],
            )
            .await
    }

    /// Write the products of `data` into `<path>.zip`, ready to be uploaded
    pub fn generate_product_package(
        &self,
        name: &str,
        data: &Value,
        path: impl AsRef<Path>,
        overwrite: bool,
    ) -> Result<PathBuf> {
        let package = ProductPackage::new(name, data)?;
        Ok(package.generate(path, overwrite)?)
    }
}
