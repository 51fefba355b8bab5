//! Play through one `first_steps` session: heartbeat, start, poll, stop.
//!
//! Reads the API key from `STOCKFIGHTER_API_KEY` (a `.env` file works too).
//!
//! ```bash
//! cargo run --example level_session
//! ```

use std::time::Duration;

use stockfighter::prelude::*;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    let api_key = std::env::var("STOCKFIGHTER_API_KEY")?;

    let client = StockfighterClient::builder()
        .base_url(DEFAULT_BASE_URL)
        .api_key(&api_key)
        .build()?;

    let heartbeat = client.heartbeats().check().await;
    if !heartbeat.ok {
        println!("Order book API is down: {:?}", heartbeat.error);
        return Ok(());
    }

    let level = client.levels().start(LevelName::FirstSteps).await?;
    println!(
        "Started instance {} on {:?} trading {:?} (account {})",
        level.instance_id, level.venues, level.tickers, level.account
    );

    for _ in 0..3 {
        match client.instances().status(level.instance_id).await {
            Some(status) => println!(
                "Day {}/{} state={} done={}",
                status.trading_day, status.total_days, status.state, status.done
            ),
            None => println!("Status poll missed"),
        }
        tokio::time::sleep(Duration::from_secs(level.seconds_per_trading_day.min(5))).await;
    }

    let stopped = client.instances().stop(level.instance_id).await;
    println!("Stopped instance {}: {}", level.instance_id, stopped);

    Ok(())
}
