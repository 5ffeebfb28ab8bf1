use clap::Parser;
use tracing::debug;

use cdiscount_cli::{Cli, Settings, command, startup};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    startup::init_logging(cli.verbose)?;

    let settings = Settings::load(cli.config.as_deref())?;
    debug!("Running {:?}", cli.command);

    let result = command::run(cli.command, &settings).await?;
    println!("{}", serde_json::to_string_pretty(&result)?);

    Ok(())
}
