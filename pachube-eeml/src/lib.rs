//! # Pachube EEML - Extended Environments Markup Language for Rust
//!
//! Build an EEML 0.5.1 document describing an environment, its location and
//! its sensor readings, and render it as XML.
//!
//! ## Quick Start
//!
//! ```rust
//! use pachube_eeml::{units, Data, DataPoints, Eeml, Environment, Location, Result};
//!
//! fn example() -> Result<()> {
//!     let mut env = Environment::builder()
//!         .title("My Room")
//!         .status("live")
//!         .build()?;
//!     env.set_location(Location::builder("physical").name("My Room").exposure("indoor").build()?);
//!
//!     let mut doc = Eeml::new(env);
//!     doc.update_data(Data::builder(0).value(21.5).unit(units::celsius()).build()?)?;
//!     doc.update_data(DataPoints::new(1, [(40,), (42,)])?)?;
//!
//!     println!("{}", doc.to_xml(true)?);
//!     Ok(())
//! }
//! # example().unwrap();
//! ```
//!
//! ## Validation
//!
//! Constructors check field legality with the [`Strict`] policy. Pass
//! [`Permissive`] to a `build_with` / `with_validator` constructor to let any
//! value through.
//!
//! ## Merging readings
//!
//! [`Environment::update_data`] merges by id: a [`Data`] replaces the entry
//! with the same id, a [`DataPoints`] replaces only that entry's series.
//! Entries render in insertion order.

pub mod builder;
pub mod data;
pub mod datapoints;
pub mod document;
pub mod environment;
pub mod error;
pub mod location;
pub mod token;
pub mod unit;
pub mod validation;
pub mod value;
pub mod xml;

// Re-export main types
pub use builder::{DataBuilder, EnvironmentBuilder, LocationBuilder, UnitBuilder};
pub use data::Data;
pub use datapoints::{DataPoint, DataPoints};
pub use document::{create_eeml, Eeml};
pub use environment::{Environment, Update};
pub use error::{EemlError, Result};
pub use location::Location;
pub use token::{Disposition, Domain, Exposure, Status, UnitKind};
pub use unit::{units, Unit};
pub use validation::{Permissive, Strict, Validator};
pub use value::{Scalar, Timestamp, Updated};
pub use xml::Element;

/// Namespace and version constants written on the document root
pub mod namespace {
    /// Schema version
    pub const EEML_SCHEMA_VERSION: &str = "0.5.1";
    /// Default namespace
    pub const EEML_NAMESPACE: &str = "http://www.eeml.org/xsd/0.5.1";
    /// XML Schema instance namespace
    pub const XSI_NAMESPACE: &str = "http://www.w3.org/2001/XMLSchema-instance";
    /// `xsi:schemaLocation` value
    pub const SCHEMA_LOCATION: &str =
        "http://www.eeml.org/xsd/0.5.1 http://www.eeml.org/xsd/0.5.1/0.5.1.xsd";
    /// Media type of an EEML document
    pub const EEML_CONTENT_TYPE: &str = "application/xml";
}
