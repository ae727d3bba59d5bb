//! Push two readings to a feed
//!
//! ```text
//! COSM_API_KEY=... COSM_FEED=42166 cargo run --example simple
//! ```
//!
//! Without an API key the document is only printed.

use pachube::pachube_eeml::{units, Data, Timestamp};
use pachube::{ClientError, FeedClient};
use time::macros::datetime;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), ClientError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("pachube=info".parse().unwrap()))
        .init();

    let api_key = std::env::var("COSM_API_KEY").ok();
    let feed: u64 = std::env::var("COSM_FEED")
        .ok()
        .and_then(|f| f.parse().ok())
        .unwrap_or(42166);

    let mut client = FeedClient::new(feed, api_key.clone().unwrap_or_default())?;

    let at = Timestamp::from(datetime!(2012-09-12 11:00:00 UTC));
    client.update_batch([
        Data::builder(0)
            .value(3)
            .tag("Temperature")
            .unit(units::celsius())
            .at(at)
            .build()?,
        Data::builder(1)
            .value(4)
            .tag("Humidity")
            .unit(units::relative_humidity())
            .build()?,
    ])?;

    println!("{}", client.get_markup()?);

    if api_key.is_none() {
        tracing::warn!("COSM_API_KEY not set, not sending");
        return Ok(());
    }

    if let Err(e) = client.put() {
        eprintln!("ERROR: put to {} failed: {}", client.url(), e);
    }
    Ok(())
}
