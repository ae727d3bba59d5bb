//! Client configuration

use pachube_eeml::EemlError;

use crate::Result;

/// The feed service a client talks to
///
/// Both speak the same v1/v2 feed API and differ only in host and in the
/// header that carries the API key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Service {
    Pachube,
    #[default]
    Cosm,
}

impl Service {
    /// API host name
    pub fn host(&self) -> &'static str {
        match self {
            Service::Pachube => "api.pachube.com",
            Service::Cosm => "api.cosm.com",
        }
    }

    /// Header carrying the API key
    pub fn api_key_header(&self) -> &'static str {
        match self {
            Service::Pachube => "X-PachubeApiKey",
            Service::Cosm => "X-ApiKey",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Service the feed lives on
    pub service: Service,

    /// Use HTTPS
    pub secure: bool,

    /// Timeout in seconds; must be at least 1
    pub timeout: u64,

    /// Send to this host (with optional port) instead of the service host
    pub host_override: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            service: Service::default(),
            secure: true,
            timeout: 10,
            host_override: None,
        }
    }
}

impl Config {
    pub fn with_service(mut self, service: Service) -> Self {
        self.service = service;
        self
    }

    pub fn with_secure(mut self, secure: bool) -> Self {
        self.secure = secure;
        self
    }

    /// Request timeout in whole seconds; zero is rejected by [`Config::validate`]
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    pub fn with_host<S: Into<String>>(mut self, host: S) -> Self {
        self.host_override = Some(host.into());
        self
    }

    /// Check the settings before any request is built
    ///
    /// A zero timeout would expire every request immediately.
    pub fn validate(&self) -> Result<()> {
        if self.timeout == 0 {
            return Err(EemlError::validation("timeout", "must be at least one second").into());
        }
        Ok(())
    }

    /// Effective host
    pub fn host(&self) -> &str {
        self.host_override
            .as_deref()
            .unwrap_or_else(|| self.service.host())
    }

    pub fn api_key_header(&self) -> &'static str {
        self.service.api_key_header()
    }

    /// Scheme and host, e.g. `https://api.cosm.com`
    pub fn base_url(&self) -> String {
        let scheme = if self.secure { "https" } else { "http" };
        format!("{}://{}", scheme, self.host())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.service, Service::Cosm);
        assert!(config.secure);
        assert_eq!(config.timeout, 10);
        assert_eq!(config.base_url(), "https://api.cosm.com");
        assert_eq!(config.api_key_header(), "X-ApiKey");
    }

    #[test]
    fn test_pachube_service() {
        let config = Config::default()
            .with_service(Service::Pachube)
            .with_secure(false);
        assert_eq!(config.base_url(), "http://api.pachube.com");
        assert_eq!(config.api_key_header(), "X-PachubeApiKey");
    }

    #[test]
    fn test_zero_timeout_is_rejected() {
        assert!(Config::default().validate().is_ok());
        assert!(Config::default().with_timeout(1).validate().is_ok());

        let err = Config::default().with_timeout(0).validate().unwrap_err();
        assert!(err.is_validation());
        assert_eq!(
            err.to_string(),
            "Invalid value for field 'timeout': must be at least one second"
        );
    }

    #[test]
    fn test_host_override() {
        let config = Config::default().with_host("127.0.0.1:8080").with_timeout(2);
        assert_eq!(config.host(), "127.0.0.1:8080");
        assert_eq!(config.base_url(), "https://127.0.0.1:8080");
        assert_eq!(config.timeout, 2);
        assert_eq!(config.api_key_header(), "X-ApiKey");
    }
}
