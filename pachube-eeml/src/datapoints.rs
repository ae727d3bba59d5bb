//! Time series attached to a data id

use crate::validation::{Strict, Validator};
use crate::value::{Scalar, Timestamp};
use crate::xml::Element;
use crate::Result;

/// One sample of a series
#[derive(Debug, Clone, PartialEq)]
pub struct DataPoint {
    pub value: Scalar,
    pub at: Option<Timestamp>,
}

impl DataPoint {
    /// A sample with no timestamp
    pub fn new<V: Into<Scalar>>(value: V) -> Self {
        Self {
            value: value.into(),
            at: None,
        }
    }

    /// A sample taken at `at`
    pub fn at<V: Into<Scalar>, T: Into<Timestamp>>(value: V, at: T) -> Self {
        Self {
            value: value.into(),
            at: Some(at.into()),
        }
    }

    fn to_element(&self) -> Element {
        Element::new("value")
            .with_attr_opt("at", self.at.as_ref())
            .with_text(&self.value)
    }
}

impl<V: Into<Scalar>> From<(V,)> for DataPoint {
    fn from((value,): (V,)) -> Self {
        DataPoint::new(value)
    }
}

impl<V: Into<Scalar>> From<(V, Timestamp)> for DataPoint {
    fn from((value, at): (V, Timestamp)) -> Self {
        DataPoint::at(value, at)
    }
}

/// An ordered series of samples for the data entry with the same id
///
/// Order is kept exactly as given; nothing is sorted or deduplicated.
#[derive(Debug, Clone, PartialEq)]
pub struct DataPoints {
    pub(crate) id: i64,
    pub(crate) values: Vec<DataPoint>,
}

impl DataPoints {
    /// Build a series, checked with the [`Strict`] policy
    pub fn new<I, P>(id: i64, values: I) -> Result<Self>
    where
        I: IntoIterator<Item = P>,
        P: Into<DataPoint>,
    {
        Self::with_validator(id, values, &Strict)
    }

    /// Build a series, checked with `validator`
    pub fn with_validator<I, P>(id: i64, values: I, validator: &dyn Validator) -> Result<Self>
    where
        I: IntoIterator<Item = P>,
        P: Into<DataPoint>,
    {
        let datapoints = Self {
            id,
            values: values.into_iter().map(Into::into).collect(),
        };
        validator.datapoints(&datapoints)?;
        Ok(datapoints)
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn values(&self) -> &[DataPoint] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Render as `<datapoints>` with one `<value>` per sample
    pub fn to_element(&self) -> Element {
        self.values
            .iter()
            .fold(Element::new("datapoints"), |el, point| el.with_child(point.to_element()))
    }
}
