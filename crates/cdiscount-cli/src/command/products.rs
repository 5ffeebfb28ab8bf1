use cdiscount_package::ProductPackage;
use clap::Subcommand;
use serde_json::Value;

use super::PackageArgs;
use crate::settings::Settings;

#[derive(Debug, Subcommand)]
pub enum ProductsCommand {
    /// Build a product package from a JSON description
    Package(PackageArgs),
    #[command(flatten)]
    Remote(ProductsRemote),
}

/// Product commands sent to the Marketplace API
#[derive(Debug, Subcommand)]
pub enum ProductsRemote {
    /// Category tree opened to the seller, or the whole tree with --all
    Categories {
        #[arg(long)]
        all: bool,
    },
    /// Brands known to the marketplace
    Brands,
    /// Product models, optionally for one category
    Models {
        #[arg(long)]
        category: Option<String>,
    },
    /// Reference catalogue products of a category
    List { category: String },
    /// Reference catalogue products by EAN
    ByEan {
        #[arg(required = true)]
        eans: Vec<String>,
    },
    /// Ask for the integration of a package available at a public URL
    Submit { url: String },
    /// Integration report of a submitted package
    Result { package_id: i64 },
    /// Products created by a submitted package
    Matching { package_id: i64 },
}

pub async fn run(command: ProductsCommand, settings: &Settings) -> anyhow::Result<Value> {
    let args = match command {
        ProductsCommand::Package(args) => args,
        ProductsCommand::Remote(remote) => return call(remote, settings).await,
    };

    let data = super::read_json(&args.input)?;
    let package = ProductPackage::new(&args.name, &data)?;
    super::write_package(&package, &args)
}

async fn call(command: ProductsRemote, settings: &Settings) -> anyhow::Result<Value> {
    let connection = super::connect(settings).await?;
    let products = connection.products();
    let result = match command {
        ProductsRemote::Categories { all: true } => {
            products.get_all_allowed_category_tree().await?
        }
        ProductsRemote::Categories { all: false } => products.get_allowed_category_tree().await?,
        ProductsRemote::Brands => products.get_brand_list().await?,
        ProductsRemote::Models { category } => {
            products.get_model_list(category.as_deref()).await?
        }
        ProductsRemote::List { category } => products.get_product_list(&category).await?,
        ProductsRemote::ByEan { eans } => products.get_product_list_by_identifier(eans).await?,
        ProductsRemote::Submit { url } => products.submit_product_package(&url).await?,
        ProductsRemote::Result { package_id } => {
            products.get_product_package_submission_result(package_id).await?
        }
        ProductsRemote::Matching { package_id } => {
            products
                .get_product_package_product_matching_file_data(package_id)
                .await?
        }
    };
    Ok(result)
}
