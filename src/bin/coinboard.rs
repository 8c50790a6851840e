//! coinboard CLI
//!
//! Drives the market-data coordinator against the live quotation API and
//! prints what the dashboard would show.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use coinboard::domain::market::filter_quote;
use coinboard::prelude::*;
use coinboard::shared::fmt;
use rust_decimal::Decimal;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "coinboard")]
#[command(about = "Crypto dashboard market-data coordinator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// REST API base URL
    #[arg(long, env = "UPBIT_API_URL", default_value = DEFAULT_API_URL)]
    base_url: String,

    /// Log filter (e.g. info, debug, coinboard=trace)
    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// Per-request timeout in seconds
    #[arg(long, default_value = "10")]
    timeout: u64,

    /// Retry 429 and 5xx responses with backoff
    #[arg(long)]
    retry: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List KRW markets
    Markets,

    /// Select a coin and load its detail pane
    Select {
        /// Market code (e.g., KRW-BTC)
        code: String,

        /// Display name published with the selection
        #[arg(short, long)]
        name: Option<String>,

        /// Chart interval to switch to afterwards
        /// (days, weeks, months, 1minutes, 5minutes, 10minutes)
        #[arg(short, long)]
        interval: Option<String>,
    },

    /// Present prices for several markets
    Tickers {
        /// Market codes
        #[arg(required = true)]
        codes: Vec<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&cli.log_level).context("invalid --log-level")?)
        .with_target(false)
        .init();

    let retry = if cli.retry {
        RetryPolicy::Idempotent
    } else {
        RetryPolicy::None
    };
    let client = UpbitClient::builder()
        .base_url(&cli.base_url)
        .retry_policy(retry)
        .timeout(Duration::from_secs(cli.timeout))
        .build()?;

    let store = CoinStore::new();
    let coordinator = MarketDataCoordinator::new(Arc::new(client), Arc::new(store.clone()));

    match cli.command {
        Commands::Markets => {
            coordinator.load_market_list().await;
            let state = store.snapshot();
            if let Some(e) = &state.market_list.error {
                bail!("market list failed: {e}");
            }

            let krw = filter_quote(&state.market_list.data, "KRW");
            println!("\n{} KRW markets", krw.len());
            println!("{:-<60}", "");
            for m in &krw {
                let warn = match m.warning {
                    MarketWarning::Caution => " [유의]",
                    MarketWarning::None => "",
                };
                println!("{:<12} {:<16} {}{}", m.market, m.korean_name, m.english_name, warn);
            }
        }

        Commands::Tickers { codes } => {
            let codes: Vec<MarketCode> = codes.into_iter().map(MarketCode::from).collect();
            coordinator.load_ticker_list(&codes).await;
            let state = store.snapshot();
            if let Some(e) = &state.ticker_list.error {
                bail!("ticker list failed: {e}");
            }

            println!("\n{:<12} {:>16} {:>10} {:>14}", "Market", "Price", "Change", "Volume 24h");
            println!("{:-<56}", "");
            for t in &state.ticker_list.data {
                println!(
                    "{:<12} {:>16} {:>10} {:>14}",
                    t.market,
                    fmt::price(&t.trade_price),
                    fmt::signed_pct(&t.change_rate, t.change),
                    fmt::compact(&t.acc_trade_price_24h),
                );
            }
        }

        Commands::Select {
            code,
            name,
            interval,
        } => {
            let code = MarketCode::from(code);
            let name = name.unwrap_or_else(|| code.to_string());
            info!("Selecting {} ({})", code, name);

            coordinator.change_selected_coin(&name, &code).await;

            if let Some(interval) = interval {
                let (tx, rx) = mpsc::channel(4);
                let watcher = Watcher::new(coordinator.clone(), Arc::new(store.clone())).spawn(rx);
                tx.send(TriggerEvent::CandleIntervalChanged { interval })
                    .await
                    .context("trigger watcher stopped early")?;
                drop(tx);
                watcher.await.context("trigger watcher panicked")?;
            }

            print_selection(&store.snapshot());
        }
    }

    Ok(())
}

fn print_selection(state: &CoinState) {
    println!("\n{}", state.market_name);
    println!("{:-<60}", "");

    match (&state.selected_coin, &state.selected.error) {
        (Some(t), _) => {
            println!("  Price:      {}", fmt::price(&t.trade_price));
            println!("  Change:     {}", fmt::signed_pct(&t.change_rate, t.change));
            println!(
                "  Day range:  {} ~ {} ({})",
                fmt::price(&t.low_price),
                fmt::price(&t.high_price),
                fmt::price(&t.day_range())
            );
            println!("  Volume 24h: {}", fmt::compact(&t.acc_trade_price_24h));
        }
        (None, Some(e)) => println!("  Price:      unavailable ({e})"),
        (None, None) => println!("  Price:      unavailable"),
    }

    println!("\nRecent trades ({})", state.trade_list.data.len());
    if let Some(e) = &state.trade_list.error {
        println!("  unavailable ({e})");
    }
    for t in state.trade_list.data.trades().iter().take(5) {
        println!(
            "  {} {:<4} {:>16} x {} = {}",
            t.timestamp.format("%H:%M:%S"),
            t.side,
            fmt::price(&t.price),
            t.volume.normalize(),
            fmt::compact(&t.notional())
        );
    }

    println!("\nOrder book");
    match state.selected_orderbook() {
        Some(book) => {
            let show = |v: Option<Decimal>| v.map(|d| fmt::price(&d)).unwrap_or_default();
            println!("  Best ask:   {}", show(book.best_ask()));
            println!("  Best bid:   {}", show(book.best_bid()));
            println!("  Mid:        {}", show(book.mid_price()));
            println!("  Spread:     {}", show(book.spread()));
            if let Some(ratio) = book.bid_ratio() {
                println!("  Bid share:  {}", fmt::signed_pct(&ratio, Change::Even));
            }
        }
        None => match &state.orderbook.error {
            Some(e) => println!("  unavailable ({e})"),
            None => println!("  empty"),
        },
    }

    println!("\nCandles ({})", state.candle_data.data.len());
    if let Some(e) = &state.candle_data.error {
        println!("  unavailable ({e})");
    }
    for c in state.candle_data.data.iter().take(5) {
        println!(
            "  {} {} O {:>14} H {:>14} L {:>14} C {:>14}",
            c.time_kst.format("%Y-%m-%d %H:%M"),
            if c.is_bullish() { "▲" } else { "▼" },
            fmt::price(&c.open),
            fmt::price(&c.high),
            fmt::price(&c.low),
            fmt::price(&c.close),
        );
    }
}
