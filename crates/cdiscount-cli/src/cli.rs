//! Command line arguments

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::command::{
    discussions::DiscussionsCommand, offers::OffersCommand, orders::OrdersCommand,
    products::ProductsCommand, relays::RelaysCommand, seller::SellerCommand,
    webmail::WebMailCommand,
};

#[derive(Debug, Parser)]
#[command(name = "cdiscount", version, about = "Cdiscount Marketplace API client")]
pub struct Cli {
    /// Log at debug level
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Settings file, read after conf/cdiscount.yml
    #[arg(short, long, global = true, env = "CDISCOUNT_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Seller account
    #[command(subcommand)]
    Seller(SellerCommand),

    /// Orders, validation and configuration
    #[command(subcommand)]
    Orders(OrdersCommand),

    /// Offers and offer packages
    #[command(subcommand)]
    Offers(OffersCommand),

    /// Catalogue, models and product packages
    #[command(subcommand)]
    Products(ProductsCommand),

    /// Claims and questions
    #[command(subcommand)]
    Discussions(DiscussionsCommand),

    /// Encrypted customer mail addresses
    #[command(subcommand)]
    Webmail(WebMailCommand),

    /// Parcel shops and relay files
    #[command(subcommand)]
    Relays(RelaysCommand),
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["cdiscount", "seller", "info", "-v", "--config", "a.yml"])
            .unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.config, Some(PathBuf::from("a.yml")));
        assert!(matches!(cli.command, Command::Seller(SellerCommand::Info)));
    }

    #[test]
    fn test_missing_subcommand() {
        assert!(Cli::try_parse_from(["cdiscount"]).is_err());
        assert!(Cli::try_parse_from(["cdiscount", "orders"]).is_err());
    }
}
