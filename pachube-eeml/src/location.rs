//! Where an environment lives

use crate::builder::LocationBuilder;
use crate::token::{Disposition, Domain, Exposure};
use crate::value::Scalar;
use crate::xml::Element;
use crate::Result;

/// Physical or virtual placement of an environment
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    pub(crate) domain: String,
    pub(crate) name: Option<String>,
    pub(crate) lat: Option<Scalar>,
    pub(crate) lon: Option<Scalar>,
    pub(crate) ele: Option<Scalar>,
    pub(crate) exposure: Option<String>,
    pub(crate) disposition: Option<String>,
}

impl Location {
    /// A location with only a domain
    pub fn new<S: Into<String>>(domain: S) -> Result<Self> {
        LocationBuilder::new(domain).build()
    }

    /// Start building a location in `domain`
    pub fn builder<S: Into<String>>(domain: S) -> LocationBuilder {
        LocationBuilder::new(domain)
    }

    /// Typed domain; `None` if an unchecked value was let through
    pub fn domain(&self) -> Option<Domain> {
        self.domain.parse().ok()
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn lat(&self) -> Option<&Scalar> {
        self.lat.as_ref()
    }

    pub fn lon(&self) -> Option<&Scalar> {
        self.lon.as_ref()
    }

    pub fn ele(&self) -> Option<&Scalar> {
        self.ele.as_ref()
    }

    pub fn exposure(&self) -> Option<Exposure> {
        self.exposure.as_deref().and_then(|e| e.parse().ok())
    }

    pub fn disposition(&self) -> Option<Disposition> {
        self.disposition.as_deref().and_then(|d| d.parse().ok())
    }

    /// Render as a `<location>` element
    pub fn to_element(&self) -> Element {
        let domain = Some(self.domain.as_str()).filter(|d| !d.is_empty());

        Element::new("location")
            .with_attr_opt(Exposure::FIELD, self.exposure.as_deref())
            .with_attr_opt(Domain::FIELD, domain)
            .with_attr_opt(Disposition::FIELD, self.disposition.as_deref())
            .with_text_child_opt("name", self.name.as_deref())
            .with_text_child_opt("lat", self.lat.as_ref())
            .with_text_child_opt("lon", self.lon.as_ref())
            .with_text_child_opt("ele", self.ele.as_ref())
    }
}
