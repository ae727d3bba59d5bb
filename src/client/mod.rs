//! Feed client: owns one document and pushes it to the service

use std::time::Duration;

use pachube_eeml::namespace::EEML_CONTENT_TYPE;
use pachube_eeml::{Eeml, Environment, Location, Update, create_eeml};
use tracing::{info, warn};

use crate::config::{Config, Service};
use crate::resource::{FeedResource, IntoFeedResource};
use crate::transport::http::HttpTransport;
use crate::transport::{PutRequest, Transport};
use crate::{ClientError, Result};

/// Client for one feed
///
/// Collects readings with [`update`](FeedClient::update) and sends the whole
/// document with [`put`](FeedClient::put). Each `put` is a single attempt.
#[derive(Debug)]
pub struct FeedClient<T: Transport = HttpTransport> {
    resource: FeedResource,
    api_key: String,
    config: Config,
    document: Eeml,
    transport: T,
}

impl FeedClient<HttpTransport> {
    /// Client for `resource` with an empty environment and default config
    pub fn new<R: IntoFeedResource, K: Into<String>>(resource: R, api_key: K) -> Result<Self> {
        Self::builder(resource, api_key).build()
    }

    /// Start configuring a client for `resource`
    pub fn builder<R: IntoFeedResource, K: Into<String>>(
        resource: R,
        api_key: K,
    ) -> FeedClientBuilder<HttpTransport> {
        FeedClientBuilder {
            resource: resource.into_feed_resource(),
            api_key: api_key.into(),
            config: Config::default(),
            environment: None,
            location: None,
            updates: Vec::new(),
            transport: HttpTransport::new(),
        }
    }
}

impl<T: Transport> FeedClient<T> {
    pub fn resource(&self) -> &FeedResource {
        &self.resource
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn document(&self) -> &Eeml {
        &self.document
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Full URL the document is sent to
    pub fn url(&self) -> String {
        format!("{}{}", self.config.base_url(), self.resource.path())
    }

    /// Merge one reading or series into the document
    pub fn update<U: Into<Update>>(&mut self, update: U) -> Result<()> {
        Ok(self.document.update_data(update)?)
    }

    /// Merge several updates, in order
    pub fn update_batch<I, U>(&mut self, updates: I) -> Result<()>
    where
        I: IntoIterator<Item = U>,
        U: Into<Update>,
    {
        Ok(self.document.update_batch(updates)?)
    }

    /// The document as markup, without sending it
    pub fn markup(&self, pretty: bool) -> Result<String> {
        Ok(self.document.to_xml(pretty)?)
    }

    /// The document as indented markup
    pub fn get_markup(&self) -> Result<String> {
        self.markup(true)
    }

    /// Build the request `put` would send
    pub fn request(&self) -> Result<PutRequest> {
        Ok(PutRequest {
            url: self.url(),
            headers: vec![
                (self.config.api_key_header().to_string(), self.api_key.clone()),
                ("Content-Type".to_string(), EEML_CONTENT_TYPE.to_string()),
            ],
            body: self.markup(false)?,
            timeout: Duration::from_secs(self.config.timeout),
        })
    }

    /// Serialize the document and PUT it to the feed
    ///
    /// Any 2xx reply is success. Any other reply fails with a transport
    /// error carrying the service's error message, or the status reason if
    /// the reply has no readable message.
    pub fn put(&self) -> Result<()> {
        let request = self.request()?;
        info!(url = %request.url, bytes = request.body.len(), "updating feed");

        let response = self.transport.put(&request)?;
        if response.is_success() {
            info!(status = response.status, "feed updated");
            return Ok(());
        }

        let message = response.diagnostic();
        warn!(status = response.status, %message, "feed update rejected");
        Err(ClientError::transport(message))
    }
}

/// Builder for [`FeedClient`]
#[derive(Debug)]
pub struct FeedClientBuilder<T: Transport> {
    resource: Result<FeedResource>,
    api_key: String,
    config: Config,
    environment: Option<Environment>,
    location: Option<Location>,
    updates: Vec<Update>,
    transport: T,
}

impl<T: Transport> FeedClientBuilder<T> {
    /// Start from this environment instead of an empty one
    pub fn environment(mut self, environment: Environment) -> Self {
        self.environment = Some(environment);
        self
    }

    /// Set the environment's location
    pub fn location(mut self, location: Location) -> Self {
        self.location = Some(location);
        self
    }

    /// Add an initial reading or series
    pub fn data<U: Into<Update>>(mut self, update: U) -> Self {
        self.updates.push(update.into());
        self
    }

    /// Add several initial readings or series
    pub fn data_batch<I, U>(mut self, updates: I) -> Self
    where
        I: IntoIterator<Item = U>,
        U: Into<Update>,
    {
        self.updates.extend(updates.into_iter().map(Into::into));
        self
    }

    /// Replace the whole configuration
    pub fn config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    pub fn service(mut self, service: Service) -> Self {
        self.config.service = service;
        self
    }

    /// Use HTTPS (the default) or plain HTTP
    pub fn secure(mut self, secure: bool) -> Self {
        self.config.secure = secure;
        self
    }

    /// Request timeout in seconds; `build` rejects zero
    pub fn timeout(mut self, seconds: u64) -> Self {
        self.config.timeout = seconds;
        self
    }

    /// Send somewhere other than the service host
    pub fn host<S: Into<String>>(mut self, host: S) -> Self {
        self.config.host_override = Some(host.into());
        self
    }

    /// Use another transport
    pub fn transport<U: Transport>(self, transport: U) -> FeedClientBuilder<U> {
        FeedClientBuilder {
            resource: self.resource,
            api_key: self.api_key,
            config: self.config,
            environment: self.environment,
            location: self.location,
            updates: self.updates,
            transport,
        }
    }

    /// Fails with a validation error if the resource was malformed or the
    /// timeout is zero
    pub fn build(self) -> Result<FeedClient<T>> {
        let resource = self.resource?;
        self.config.validate()?;
        let document = create_eeml(
            self.environment.unwrap_or_default(),
            self.location,
            self.updates,
        );

        Ok(FeedClient {
            resource,
            api_key: self.api_key,
            config: self.config,
            document,
            transport: self.transport,
        })
    }
}
