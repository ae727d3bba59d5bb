//! Feed resource addressing
//!
//! A feed is addressed either by its full API path (`/v2/feeds/1234.xml`,
//! `/v1/feeds/1234.xml`) or by its bare numeric id, which expands to the v2
//! path.

use std::fmt;
use std::str::FromStr;

use pachube_eeml::EemlError;

use crate::{ClientError, Result};

/// Validated API path of one feed
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FeedResource {
    path: String,
}

impl FeedResource {
    /// The v2 path of feed `id`
    pub fn from_id(id: u64) -> Self {
        Self {
            path: format!("/v2/feeds/{}.xml", id),
        }
    }

    /// Accept `/v1/feeds/<digits>.xml` or `/v2/feeds/<digits>.xml`
    pub fn parse(path: &str) -> Result<Self> {
        let digits = ["/v1/feeds/", "/v2/feeds/"]
            .iter()
            .find_map(|prefix| path.strip_prefix(*prefix))
            .and_then(|rest| rest.strip_suffix(".xml"));

        match digits {
            Some(digits) if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) => {
                Ok(Self {
                    path: path.to_string(),
                })
            }
            _ => Err(invalid(format!(
                "must be '/v1/feeds/<id>.xml', '/v2/feeds/<id>.xml' or a feed id, got '{}'",
                path
            ))),
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Numeric feed id in the path
    pub fn feed_id(&self) -> Option<u64> {
        self.path
            .rsplit('/')
            .next()
            .and_then(|file| file.strip_suffix(".xml"))
            .and_then(|digits| digits.parse().ok())
    }
}

fn invalid(message: String) -> ClientError {
    EemlError::validation("resource", message).into()
}

impl fmt::Display for FeedResource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path)
    }
}

impl FromStr for FeedResource {
    type Err = ClientError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// Anything a client can be pointed at
pub trait IntoFeedResource {
    fn into_feed_resource(self) -> Result<FeedResource>;
}

impl IntoFeedResource for FeedResource {
    fn into_feed_resource(self) -> Result<FeedResource> {
        Ok(self)
    }
}

impl IntoFeedResource for &str {
    fn into_feed_resource(self) -> Result<FeedResource> {
        FeedResource::parse(self)
    }
}

impl IntoFeedResource for String {
    fn into_feed_resource(self) -> Result<FeedResource> {
        FeedResource::parse(&self)
    }
}

impl IntoFeedResource for u64 {
    fn into_feed_resource(self) -> Result<FeedResource> {
        Ok(FeedResource::from_id(self))
    }
}

impl IntoFeedResource for u32 {
    fn into_feed_resource(self) -> Result<FeedResource> {
        Ok(FeedResource::from_id(self.into()))
    }
}

impl IntoFeedResource for i64 {
    fn into_feed_resource(self) -> Result<FeedResource> {
        u64::try_from(self)
            .map(FeedResource::from_id)
            .map_err(|_| invalid(format!("feed id must be non-negative, got {}", self)))
    }
}

impl IntoFeedResource for i32 {
    fn into_feed_resource(self) -> Result<FeedResource> {
        i64::from(self).into_feed_resource()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_and_id_agree() {
        let by_path = "/v2/feeds/1234.xml".into_feed_resource().unwrap();
        let by_id = 1234i32.into_feed_resource().unwrap();
        assert_eq!(by_path, by_id);
        assert_eq!(by_id.path(), "/v2/feeds/1234.xml");
        assert_eq!(by_id.feed_id(), Some(1234));
    }

    #[test]
    fn test_v1_path() {
        let resource: FeedResource = "/v1/feeds/42166.xml".parse().unwrap();
        assert_eq!(resource.feed_id(), Some(42166));
        assert_eq!(resource.to_string(), "/v1/feeds/42166.xml");
    }

    #[test]
    fn test_rejected_forms() {
        for bad in [
            "12.xml",
            "api.cosm.com/v2/feeds/",
            "/v3/feeds/12.xml",
            "/v2/feeds/.xml",
            "/v2/feeds/12a.xml",
            "/v2/feeds/12.json",
            "/v2/feeds/12.xml/extra",
            "",
        ] {
            let err = bad.into_feed_resource().unwrap_err();
            assert!(err.is_validation(), "{} should be rejected", bad);
        }
    }

    #[test]
    fn test_negative_id_rejected() {
        assert!((-5i32).into_feed_resource().unwrap_err().is_validation());
        assert!((-5i64).into_feed_resource().is_err());
        assert!(0u64.into_feed_resource().is_ok());
        assert!(7u32.into_feed_resource().is_ok());
        assert!(String::from("/v2/feeds/1.xml").into_feed_resource().is_ok());
    }
}
