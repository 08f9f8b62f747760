use std::sync::Arc;

use anyhow::Result;
use clap::Parser;

use stock_data_api::{
    api::{MarketDataProvider, YahooApi},
    config::{Args, Command, Config},
    logger,
    server::{self, AppState},
    services::StockDataService,
};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    let args = Args::parse();
    let config = Config::from_args(&args);
    logger::init(config.log_filter());

    let provider: Arc<dyn MarketDataProvider> = Arc::new(YahooApi::new(config.provider())?);
    let service = StockDataService::new(provider, config.service().clone());

    match args.command.unwrap_or(Command::Serve) {
        Command::Serve => server::run(&config, Arc::new(AppState::new(service))).await,
        Command::Lookup { symbol } => {
            let data = service.fetch(&symbol).await?;
            println!("{}", serde_json::to_string_pretty(&data)?);
            Ok(())
        }
    }
}
