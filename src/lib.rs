//! # Pachube - push EEML feeds over HTTP
//!
//! A [`FeedClient`] owns one EEML document for one feed. Readings are merged
//! into it with [`FeedClient::update`] and the whole document is sent with a
//! single blocking PUT by [`FeedClient::put`].
//!
//! ```rust,no_run
//! use pachube::pachube_eeml::{units, Data, DataPoints};
//! use pachube::{FeedClient, Service};
//!
//! fn example() -> pachube::Result<()> {
//!     let mut client = FeedClient::builder(1234, "API_KEY")
//!         .service(Service::Cosm)
//!         .build()?;
//!
//!     client.update(Data::builder(0).value(21.5).unit(units::celsius()).build()?)?;
//!     client.update(DataPoints::new(1, [(40,), (42,)])?)?;
//!     client.put()
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod resource;
pub mod transport;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use client::{FeedClient, FeedClientBuilder};
pub use config::{Config, Service};
pub use error::{ClientError, Result};
pub use resource::{FeedResource, IntoFeedResource};
pub use transport::http::HttpTransport;
pub use transport::{PutRequest, PutResponse, Transport};

pub use pachube_eeml;
