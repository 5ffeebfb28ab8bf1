use cdiscount_client::model::OfferFilter;
use cdiscount_package::OfferPackage;
use clap::Subcommand;
use serde_json::Value;

use super::PackageArgs;
use crate::settings::Settings;

#[derive(Debug, Subcommand)]
pub enum OffersCommand {
    /// Build an offer package from a JSON description
    Package(PackageArgs),
    #[command(flatten)]
    Remote(OffersRemote),
}

/// Offer commands sent to the Marketplace API
#[derive(Debug, Subcommand)]
pub enum OffersRemote {
    /// List offers, optionally restricted to seller product ids
    List {
        #[arg(long = "sku")]
        skus: Vec<String>,
    },
    /// Ask for the integration of a package available at a public URL
    Submit { url: String },
    /// Integration report of a submitted package
    Result { package_id: i64 },
}

pub async fn run(command: OffersCommand, settings: &Settings) -> anyhow::Result<Value> {
    let args = match command {
        OffersCommand::Package(args) => args,
        OffersCommand::Remote(remote) => return call(remote, settings).await,
    };

    let data = super::read_json(&args.input)?;
    let package = OfferPackage::new(&args.name, &data)?;
    super::write_package(&package, &args)
}

async fn call(command: OffersRemote, settings: &Settings) -> anyhow::Result<Value> {
    let connection = super::connect(settings).await?;
    let offers = connection.offers();
    let result = match command {
        OffersRemote::List { skus } if skus.is_empty() => {
            offers.get_offer_list(&OfferFilter::default()).await?
        }
        OffersRemote::List { skus } => {
            offers
                .get_offer_list(&OfferFilter::by_seller_product_ids(skus))
                .await?
        }
        OffersRemote::Submit { url } => offers.submit_offer_package(&url).await?,
        OffersRemote::Result { package_id } => {
            offers.get_offer_package_submission_result(package_id).await?
        }
    };
    Ok(result)
}
