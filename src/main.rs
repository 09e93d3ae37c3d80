//! bitcoin.de Trading API CLI.
//!
//! Thin command-line wrapper over [`BitcoinDeClient`]; every subcommand maps
//! to one API method and prints the raw JSON response.

use anyhow::Result;
use bitcoinde::api::{ApiMethod, BitcoinDeClient, Params};
use bitcoinde::config::Config;
use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use serde_json::Value;
use tracing_subscriber::EnvFilter;

/// bitcoin.de Trading API CLI
#[derive(Parser)]
#[command(name = "bitcoinde")]
#[command(version, about = "Signed requests against the bitcoin.de Trading API")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search the public orderbook
    Orderbook {
        /// Order side (buy|sell)
        #[arg(long)]
        r#type: String,
    },
    /// Compact orderbook snapshot
    OrderbookCompact,
    /// Current exchange rates
    Rates,
    /// Public trade history
    History {
        /// Only trades newer than this trade id
        #[arg(long)]
        since_tid: Option<i64>,
    },
    /// Account master data
    Account,
    /// Account ledger entries
    Ledger {
        /// Ledger entry type filter
        #[arg(long)]
        r#type: Option<String>,
    },
    /// List own orders
    MyOrders,
    /// Details of one own order
    OrderDetails { order_id: String },
    /// List own trades
    MyTrades,
    /// Details of one own trade
    TradeDetails { trade_id: String },
    /// Create a new order
    CreateOrder {
        /// Order side (buy|sell)
        #[arg(long)]
        r#type: String,
        /// Price per coin in EUR
        #[arg(long)]
        price: Decimal,
        /// Maximum amount of coins
        #[arg(long)]
        max_amount: Decimal,
        /// Minimum amount of coins
        #[arg(long)]
        min_amount: Option<Decimal>,
    },
    /// Cancel an own order
    DeleteOrder { order_id: String },
    /// Execute a trade against an existing order
    ExecuteTrade {
        order_id: String,
        /// Trade side (buy|sell)
        #[arg(long)]
        r#type: String,
        /// Amount of coins to trade
        #[arg(long)]
        amount: Decimal,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();

    let cli = Cli::parse();

    let config = Config::load()?;
    config.validate()?;
    let client = BitcoinDeClient::from_config(&config)?;

    let result = run(cli.command, &client).await?;
    println!("{}", serde_json::to_string_pretty(&result)?);

    Ok(())
}

async fn run(command: Commands, client: &BitcoinDeClient) -> Result<Value> {
    let value = match command {
        Commands::Orderbook { r#type } => {
            let params = Params::new().with("type", r#type);
            client.call(ApiMethod::ShowOrderbook, params).await?
        }
        Commands::OrderbookCompact => {
            client
                .call(ApiMethod::ShowOrderbookCompact, Params::new())
                .await?
        }
        Commands::Rates => client.call(ApiMethod::ShowRates, Params::new()).await?,
        Commands::History { since_tid } => {
            let mut params = Params::new();
            if let Some(tid) = since_tid {
                params.insert("since_tid", tid);
            }
            client.call(ApiMethod::ShowPublicTradeHistory, params).await?
        }
        Commands::Account => client.call(ApiMethod::ShowAccountInfo, Params::new()).await?,
        Commands::Ledger { r#type } => {
            let mut params = Params::new();
            if let Some(ledger_type) = r#type {
                params.insert("type", ledger_type);
            }
            client.call(ApiMethod::ShowAccountLedger, params).await?
        }
        Commands::MyOrders => client.call(ApiMethod::ShowMyOrders, Params::new()).await?,
        Commands::OrderDetails { order_id } => {
            let params = Params::new().with("order_id", order_id);
            client.call(ApiMethod::ShowMyOrderDetails, params).await?
        }
        Commands::MyTrades => client.call(ApiMethod::ShowMyTrades, Params::new()).await?,
        Commands::TradeDetails { trade_id } => {
            let params = Params::new().with("trade_id", trade_id);
            client.call(ApiMethod::ShowMyTradeDetails, params).await?
        }
        Commands::CreateOrder {
            r#type,
            price,
            max_amount,
            min_amount,
        } => {
            let mut params = Params::new()
                .with("type", r#type)
                .with("price", price)
                .with("max_amount", max_amount);
            if let Some(min) = min_amount {
                params.insert("min_amount", min);
            }
            client.call(ApiMethod::CreateOrder, params).await?
        }
        Commands::DeleteOrder { order_id } => {
            let params = Params::new().with("order_id", order_id);
            client.call(ApiMethod::DeleteOrder, params).await?
        }
        Commands::ExecuteTrade {
            order_id,
            r#type,
            amount,
        } => {
            let params = Params::new()
                .with("order_id", order_id)
                .with("type", r#type)
                .with("amount", amount);
            client.call(ApiMethod::ExecuteTrade, params).await?
        }
    };

    Ok(value)
}

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("bitcoinde=info")),
        )
        .with_target(true)
        .init();
}
