//! The EEML document root

use tracing::debug;

use crate::environment::{Environment, Update};
use crate::location::Location;
use crate::namespace::{EEML_NAMESPACE, EEML_SCHEMA_VERSION, SCHEMA_LOCATION, XSI_NAMESPACE};
use crate::xml::Element;
use crate::{EemlError, Result};

/// An EEML document wrapping one environment
///
/// A document always starts out holding an environment. It only becomes
/// empty when the environment is moved out with [`Eeml::take_environment`];
/// updating or rendering an empty document is a state error.
#[derive(Debug, Clone, PartialEq)]
pub struct Eeml {
    environment: Option<Environment>,
}

impl Eeml {
    pub fn new(environment: Environment) -> Self {
        Self {
            environment: Some(environment),
        }
    }

    /// Replace the held environment
    pub fn set_environment(&mut self, environment: Environment) {
        self.environment = Some(environment);
    }

    /// Move the environment out, leaving the document empty
    pub fn take_environment(&mut self) -> Option<Environment> {
        self.environment.take()
    }

    pub fn environment(&self) -> Option<&Environment> {
        self.environment.as_ref()
    }

    pub fn environment_mut(&mut self) -> Option<&mut Environment> {
        self.environment.as_mut()
    }

    fn require_environment(&mut self) -> Result<&mut Environment> {
        self.environment
            .as_mut()
            .ok_or_else(|| EemlError::state("document has no environment"))
    }

    /// Merge one update into the environment
    pub fn update_data<U: Into<Update>>(&mut self, update: U) -> Result<()> {
        self.require_environment()?.update_data(update);
        Ok(())
    }

    /// Merge updates in order into the environment
    pub fn update_batch<I, U>(&mut self, updates: I) -> Result<()>
    where
        I: IntoIterator<Item = U>,
        U: Into<Update>,
    {
        self.require_environment()?.update_batch(updates);
        Ok(())
    }

    /// Render the `<eeml>` root with the environment inside
    pub fn to_element(&self) -> Result<Element> {
        let environment = self
            .environment
            .as_ref()
            .ok_or_else(|| EemlError::state("document has no environment"))?;

        Ok(Element::new("eeml")
            .with_attr("xmlns", EEML_NAMESPACE)
            .with_attr("xmlns:xsi", XSI_NAMESPACE)
            .with_attr("xsi:schemaLocation", SCHEMA_LOCATION)
            .with_attr("version", EEML_SCHEMA_VERSION)
            .with_child(environment.to_element()))
    }

    /// Full markup text, with an XML declaration
    pub fn to_xml(&self, pretty: bool) -> Result<String> {
        let xml = self.to_element()?.to_document(pretty)?;
        debug!(bytes = xml.len(), pretty, "serialized eeml document");
        Ok(xml)
    }
}

impl Default for Eeml {
    fn default() -> Self {
        Self::new(Environment::default())
    }
}

/// Assemble a document from an environment, an optional location and the
/// initial readings
pub fn create_eeml<I, U>(mut environment: Environment, location: Option<Location>, updates: I) -> Eeml
where
    I: IntoIterator<Item = U>,
    U: Into<Update>,
{
    if let Some(location) = location {
        environment.set_location(location);
    }
    environment.update_batch(updates);
    Eeml::new(environment)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Data, DataPoints};

    #[test]
    fn test_root_attributes() {
        let el = Eeml::default().to_element().unwrap();
        assert_eq!(el.name(), "eeml");
        assert_eq!(el.attr("xmlns"), Some("http://www.eeml.org/xsd/0.5.1"));
        assert_eq!(el.attr("xmlns:xsi"), Some("http://www.w3.org/2001/XMLSchema-instance"));
        assert_eq!(
            el.attr("xsi:schemaLocation"),
            Some("http://www.eeml.org/xsd/0.5.1 http://www.eeml.org/xsd/0.5.1/0.5.1.xsd")
        );
        assert_eq!(el.attr("version"), Some("0.5.1"));
        assert_eq!(el.children().len(), 1);
        assert_eq!(el.children()[0].name(), "environment");
    }

    #[test]
    fn test_set_environment() {
        let mut doc = Eeml::default();
        let env = Environment::builder().title("Replaced").build().unwrap();
        doc.set_environment(env.clone());
        assert_eq!(doc.environment(), Some(&env));
    }

    #[test]
    fn test_empty_document_is_a_state_error() {
        let mut doc = Eeml::default();
        assert!(doc.take_environment().is_some());

        let err = doc.update_data(Data::new(1, 1).unwrap()).unwrap_err();
        assert!(matches!(err, EemlError::State { .. }));
        assert!(matches!(doc.to_element(), Err(EemlError::State { .. })));
        assert!(doc.to_xml(false).is_err());

        doc.set_environment(Environment::default());
        assert!(doc.update_data(Data::new(1, 1).unwrap()).is_ok());
    }

    #[test]
    fn test_update_delegates() {
        let mut doc = Eeml::default();
        doc.update_batch([Data::new(1, 1).unwrap(), Data::new(2, 2).unwrap()])
            .unwrap();
        doc.update_data(DataPoints::new(2, [(3,)]).unwrap()).unwrap();

        let env = doc.environment().unwrap();
        assert_eq!(env.data_len(), 2);
        assert!(env.data(2).unwrap().datapoints().is_some());
        assert!(doc.environment_mut().is_some());
    }

    #[test]
    fn test_xml_text() {
        let compact = Eeml::default().to_xml(false).unwrap();
        assert!(compact.starts_with(r#"<?xml version="1.0" encoding="UTF-8"?>"#));
        assert!(compact.contains(r#"version="0.5.1""#));
        assert!(compact.ends_with("<environment/></eeml>"));

        let pretty = Eeml::default().to_xml(true).unwrap();
        assert!(pretty.contains("\n  <environment/>"));
    }

    #[test]
    fn test_control_characters_fail_serialization() {
        let env = Environment::builder().title("bad\u{1}title").build().unwrap();
        let err = Eeml::new(env).to_xml(false).unwrap_err();
        assert!(matches!(err, EemlError::Serialization { .. }));

        let mut doc = Eeml::default();
        doc.update_data(Data::new(0, "21\u{0}").unwrap()).unwrap();
        assert!(doc.to_xml(true).is_err());
    }

    #[test]
    fn test_create_eeml() {
        let loc = Location::new("physical").unwrap();
        let doc = create_eeml(
            Environment::default(),
            Some(loc.clone()),
            vec![Data::new(0, 1).unwrap()],
        );
        let env = doc.environment().unwrap();
        assert_eq!(env.location(), Some(&loc));
        assert_eq!(env.data_len(), 1);
    }
}
