//! Product integration package (`Content/Products.xml`)

use serde_json::Value;
use tracing::debug;

use crate::error::{PackageError, Result};
use crate::offer::{attributes, nested};
use crate::package::{Attributes, Document, Package, XAML_NAMESPACE, capacity};
use crate::validator::{
    PRODUCT, PRODUCT_EAN, PRODUCT_IMAGE, PRODUCT_PACKAGE, scalar_text, unwrap_list,
    unwrap_record,
};

pub const PRODUCT_NAMESPACE: &str = "clr-namespace:Cdiscount.Service.ProductIntegration.Pivot;assembly=Cdiscount.Service.ProductIntegration";

/// A validated product
#[derive(Clone, Debug, PartialEq)]
pub struct Product {
    attributes: Attributes,
    eans: Vec<Attributes>,
    model_properties: Vec<(String, String)>,
    pictures: Vec<Attributes>,
}

impl Product {
    pub fn from_value(value: &Value) -> Result<Self> {
        let map = PRODUCT.validate(value)?;

        let model_properties = match map.get("ModelProperties") {
            Some(properties) => model_properties(properties)?,
            None => Vec::new(),
        };

        Ok(Self {
            attributes: attributes(map, &["EanList", "Pictures", "ModelProperties"])?,
            eans: nested(&PRODUCT_EAN, &map["EanList"])?,
            model_properties,
            pictures: nested(&PRODUCT_IMAGE, &map["Pictures"])?,
        })
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn model_properties(&self) -> &[(String, String)] {
        &self.model_properties
    }

    fn write(&self, doc: &mut Document) -> Result<()> {
        doc.start("Product", &self.attributes)?;
        doc.property("Product.EanList", &self.eans, "ProductEan")?;

        if !self.model_properties.is_empty() {
            doc.start("Product.ModelProperties", &[])?;
            for (key, value) in &self.model_properties {
                doc.text("x:String", &[("x:Key".to_string(), key.clone())], value)?;
            }
            doc.end("Product.ModelProperties")?;
        }

        doc.property("Product.Pictures", &self.pictures, "ProductImage")?;
        doc.end("Product")
    }
}

/// Model properties come either as `{"Genre": ".."}` or as a list of
/// single entry objects, which keeps their order
fn model_properties(value: &Value) -> Result<Vec<(String, String)>> {
    let mut properties = Vec::new();
    let mut push = |map: &serde_json::Map<String, Value>| -> Result<()> {
        for (key, value) in map {
            properties.push((key.clone(), scalar_text(key, value)?));
        }
        Ok(())
    };

    match value {
        Value::Object(map) => push(map)?,
        Value::Array(items) => {
            for item in items {
                let map = item.as_object().ok_or_else(|| {
                    PackageError::validation(format!(
                        "ModelProperties entries must be objects, got {}",
                        item
                    ))
                })?;
                push(map)?;
            }
        }
        Value::Null => {}
        other => {
            return Err(PackageError::validation(format!(
                "ModelProperties must be an object or a list, got {}",
                other
            )));
        }
    }
    Ok(properties)
}

/// The `Products.xml` package
#[derive(Clone, Debug, PartialEq)]
pub struct ProductPackage {
    name: String,
    products: Vec<Product>,
}

impl ProductPackage {
    /// Build a package from its JSON description holding `Products`
    pub fn new(name: &str, data: &Value) -> Result<Self> {
        let map = PRODUCT_PACKAGE.validate(data)?;

        let mut package = Self {
            name: name.to_string(),
            products: Vec::new(),
        };

        let entries = unwrap_list(&map["Products"], "Product")?;
        if entries.is_empty() {
            return Err(PackageError::validation("Products holds no product"));
        }
        for entry in entries {
            package.add(unwrap_record(entry, "Product"))?;
        }

        Ok(package)
    }

    /// Validate and append a product; returns false when it was already present
    pub fn add(&mut self, product: &Value) -> Result<bool> {
        let product = Product::from_value(product)?;
        if self.products.contains(&product) {
            debug!(
                "Skipping duplicate product {}",
                product.attribute("SellerProductId").unwrap_or_default()
            );
            return Ok(false);
        }
        self.products.push(product);
        Ok(true)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }
}

impl Package for ProductPackage {
    const CONTENT: &'static str = "Products.xml";

    fn render(&self) -> Result<String> {
        let mut doc = Document::new()?;

        let root: Attributes = vec![
            ("Name".to_string(), self.name.clone()),
            ("xmlns".to_string(), PRODUCT_NAMESPACE.to_string()),
            ("xmlns:x".to_string(), XAML_NAMESPACE.to_string()),
        ];
        doc.start("ProductPackage", &root)?;
        doc.start("ProductPackage.Products", &[])?;
        doc.start("ProductCollection", &[capacity(self.products.len())])?;
        for product in &self.products {
            product.write(&mut doc)?;
        }
        doc.end("ProductCollection")?;
        doc.end("ProductPackage.Products")?;
        doc.end("ProductPackage")?;

        doc.finish()
    }
}
