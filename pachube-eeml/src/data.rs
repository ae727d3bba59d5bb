//! Data entries: one sensor reading slot

use crate::builder::DataBuilder;
use crate::datapoints::DataPoints;
use crate::unit::Unit;
use crate::value::{Scalar, Timestamp};
use crate::xml::Element;
use crate::Result;

/// A single identified reading
///
/// `value` is the current reading. Entries created only to carry a series
/// have no current reading and render without `<current_value>`.
#[derive(Debug, Clone, PartialEq)]
pub struct Data {
    pub(crate) id: i64,
    pub(crate) value: Option<Scalar>,
    pub(crate) tags: Vec<String>,
    pub(crate) min_value: Option<Scalar>,
    pub(crate) max_value: Option<Scalar>,
    pub(crate) unit: Option<Unit>,
    pub(crate) at: Option<Timestamp>,
    pub(crate) datapoints: Option<DataPoints>,
}

impl Data {
    /// A reading with only an id and a current value
    pub fn new<V: Into<Scalar>>(id: i64, value: V) -> Result<Self> {
        DataBuilder::new(id).value(value).build()
    }

    /// Start building a reading for `id`
    pub fn builder(id: i64) -> DataBuilder {
        DataBuilder::new(id)
    }

    /// An id-only entry holding `datapoints`
    ///
    /// The series was checked when it was built, so no policy runs here.
    pub fn placeholder(datapoints: DataPoints) -> Self {
        Self {
            id: datapoints.id,
            value: None,
            tags: Vec::new(),
            min_value: None,
            max_value: None,
            unit: None,
            at: None,
            datapoints: Some(datapoints),
        }
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn value(&self) -> Option<&Scalar> {
        self.value.as_ref()
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn min_value(&self) -> Option<&Scalar> {
        self.min_value.as_ref()
    }

    pub fn max_value(&self) -> Option<&Scalar> {
        self.max_value.as_ref()
    }

    pub fn unit(&self) -> Option<&Unit> {
        self.unit.as_ref()
    }

    pub fn at(&self) -> Option<Timestamp> {
        self.at
    }

    pub fn datapoints(&self) -> Option<&DataPoints> {
        self.datapoints.as_ref()
    }

    pub(crate) fn set_datapoints(&mut self, datapoints: DataPoints) {
        self.datapoints = Some(datapoints);
    }

    /// Render as a `<data>` element
    pub fn to_element(&self) -> Element {
        let mut el = self
            .tags
            .iter()
            .fold(Element::new("data").with_attr("id", self.id), |el, tag| {
                el.with_child(Element::new("tag").with_text(tag))
            });

        if let Some(value) = &self.value {
            el.push_child(
                Element::new("current_value")
                    .with_attr_opt("minValue", self.min_value.as_ref())
                    .with_attr_opt("maxValue", self.max_value.as_ref())
                    .with_attr_opt("at", self.at.as_ref())
                    .with_text(value),
            );
        }
        if let Some(unit) = &self.unit {
            el.push_child(unit.to_element());
        }
        if let Some(datapoints) = &self.datapoints {
            el.push_child(datapoints.to_element());
        }
        el
    }
}
