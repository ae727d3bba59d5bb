//! Builders for EEML entities
//!
//! Each builder collects fields and then runs one validation policy in
//! `build_with`. `build` uses the [`Strict`] policy.

use crate::datapoints::DataPoints;
use crate::validation::{Strict, Validator};
use crate::value::{Scalar, Timestamp, Updated};
use crate::{Data, Environment, Location, Result, Unit};

/// Builder for [`Unit`]
#[derive(Debug)]
pub struct UnitBuilder {
    unit: Unit,
}

impl UnitBuilder {
    /// Start a unit called `name`
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            unit: Unit::new(name),
        }
    }

    /// Set the category (`basicSI`, `derivedSI`, ...)
    pub fn category<S: Into<String>>(mut self, category: S) -> Self {
        self.unit.category = Some(category.into());
        self
    }

    /// Set the symbol
    pub fn symbol<S: Into<String>>(mut self, symbol: S) -> Self {
        self.unit.symbol = Some(symbol.into());
        self
    }

    /// Validate with [`Strict`] and return the unit
    pub fn build(self) -> Result<Unit> {
        self.build_with(&Strict)
    }

    /// Validate with `validator` and return the unit
    pub fn build_with(self, validator: &dyn Validator) -> Result<Unit> {
        validator.unit(&self.unit)?;
        Ok(self.unit)
    }
}

/// Builder for [`Location`]
#[derive(Debug)]
pub struct LocationBuilder {
    location: Location,
}

impl LocationBuilder {
    /// Start a location in `domain` (`physical` or `virtual`)
    pub fn new<S: Into<String>>(domain: S) -> Self {
        Self {
            location: Location {
                domain: domain.into(),
                name: None,
                lat: None,
                lon: None,
                ele: None,
                exposure: None,
                disposition: None,
            },
        }
    }

    /// Set the place name
    pub fn name<S: Into<String>>(mut self, name: S) -> Self {
        self.location.name = Some(name.into());
        self
    }

    /// Set the latitude
    pub fn lat<V: Into<Scalar>>(mut self, lat: V) -> Self {
        self.location.lat = Some(lat.into());
        self
    }

    /// Set the longitude
    pub fn lon<V: Into<Scalar>>(mut self, lon: V) -> Self {
        self.location.lon = Some(lon.into());
        self
    }

    /// Set the elevation
    pub fn ele<V: Into<Scalar>>(mut self, ele: V) -> Self {
        self.location.ele = Some(ele.into());
        self
    }

    /// Set the exposure (`indoor` or `outdoor`)
    pub fn exposure<S: Into<String>>(mut self, exposure: S) -> Self {
        self.location.exposure = Some(exposure.into());
        self
    }

    /// Set the disposition (`fixed` or `mobile`)
    pub fn disposition<S: Into<String>>(mut self, disposition: S) -> Self {
        self.location.disposition = Some(disposition.into());
        self
    }

    /// Validate with [`Strict`] and return the location
    pub fn build(self) -> Result<Location> {
        self.build_with(&Strict)
    }

    /// Validate with `validator` and return the location
    pub fn build_with(self, validator: &dyn Validator) -> Result<Location> {
        validator.location(&self.location)?;
        Ok(self.location)
    }
}

/// Builder for [`Data`]
#[derive(Debug)]
pub struct DataBuilder {
    data: Data,
}

impl DataBuilder {
    /// Start a data entry with id `id`
    pub fn new(id: i64) -> Self {
        Self {
            data: Data {
                id,
                value: None,
                tags: Vec::new(),
                min_value: None,
                max_value: None,
                unit: None,
                at: None,
                datapoints: None,
            },
        }
    }

    /// Set the current value
    pub fn value<V: Into<Scalar>>(mut self, value: V) -> Self {
        self.data.value = Some(value.into());
        self
    }

    /// Append one tag
    pub fn tag<S: Into<String>>(mut self, tag: S) -> Self {
        self.data.tags.push(tag.into());
        self
    }

    /// Append several tags, keeping their order
    pub fn tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.data.tags.extend(tags.into_iter().map(Into::into));
        self
    }

    /// Lowest value the sensor can report
    pub fn min_value<V: Into<Scalar>>(mut self, min: V) -> Self {
        self.data.min_value = Some(min.into());
        self
    }

    /// Highest value the sensor can report
    pub fn max_value<V: Into<Scalar>>(mut self, max: V) -> Self {
        self.data.max_value = Some(max.into());
        self
    }

    /// Set the unit of the current value
    pub fn unit(mut self, unit: Unit) -> Self {
        self.data.unit = Some(unit);
        self
    }

    /// Time the current value was taken
    pub fn at<T: Into<Timestamp>>(mut self, at: T) -> Self {
        self.data.at = Some(at.into());
        self
    }

    /// Attach a series
    pub fn datapoints(mut self, datapoints: DataPoints) -> Self {
        self.data.datapoints = Some(datapoints);
        self
    }

    /// Validate with [`Strict`] and return the data
    pub fn build(self) -> Result<Data> {
        self.build_with(&Strict)
    }

    /// Validate with `validator` and return the data
    pub fn build_with(self, validator: &dyn Validator) -> Result<Data> {
        validator.data(&self.data)?;
        Ok(self.data)
    }
}

/// Builder for [`Environment`]
#[derive(Debug, Default)]
pub struct EnvironmentBuilder {
    env: Environment,
}

impl EnvironmentBuilder {
    /// Start an empty environment
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the title
    pub fn title<S: Into<String>>(mut self, title: S) -> Self {
        self.env.title = Some(title.into());
        self
    }

    /// URL of this environment's feed
    pub fn feed<S: Into<String>>(mut self, feed: S) -> Self {
        self.env.feed = Some(feed.into());
        self
    }

    /// Set the status (`frozen` or `live`)
    pub fn status<S: Into<String>>(mut self, status: S) -> Self {
        self.env.status = Some(status.into());
        self
    }

    /// Free-text description
    pub fn description<S: Into<String>>(mut self, description: S) -> Self {
        self.env.description = Some(description.into());
        self
    }

    /// URL of an icon
    pub fn icon<S: Into<String>>(mut self, icon: S) -> Self {
        self.env.icon = Some(icon.into());
        self
    }

    /// URL of a page about the environment
    pub fn website<S: Into<String>>(mut self, website: S) -> Self {
        self.env.website = Some(website.into());
        self
    }

    /// Contact address
    pub fn email<S: Into<String>>(mut self, email: S) -> Self {
        self.env.email = Some(email.into());
        self
    }

    /// Time of the last update; a timestamp, a date, or preformatted text
    pub fn updated<U: Into<Updated>>(mut self, updated: U) -> Self {
        self.env.updated = Some(updated.into());
        self
    }

    /// URL of whoever created the feed
    pub fn creator<S: Into<String>>(mut self, creator: S) -> Self {
        self.env.creator = Some(creator.into());
        self
    }

    /// Feed id; must not be negative
    pub fn id(mut self, id: i64) -> Self {
        self.env.id = Some(id);
        self
    }

    /// Whether the feed is private
    pub fn private(mut self, private: bool) -> Self {
        self.env.private = Some(private);
        self
    }

    /// Set the location
    pub fn location(mut self, location: Location) -> Self {
        self.env.location = Some(location);
        self
    }

    /// Validate with [`Strict`] and return the environment
    pub fn build(self) -> Result<Environment> {
        self.build_with(&Strict)
    }

    /// Check the environment's own fields with `validator`
    ///
    /// The location was checked when it was built.
    pub fn build_with(self, validator: &dyn Validator) -> Result<Environment> {
        validator.environment(&self.env)?;
        Ok(self.env)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::Permissive;
    use crate::Status;

    #[test]
    fn test_environment_builder_collects_fields() {
        let loc = Location::new("physical").unwrap();
        let env = EnvironmentBuilder::new()
            .title("Kitchen")
            .status(Status::Live)
            .creator("someone")
            .id(42)
            .private(true)
            .location(loc.clone())
            .build()
            .unwrap();

        assert_eq!(env.title(), Some("Kitchen"));
        assert_eq!(env.status(), Some(Status::Live));
        assert_eq!(env.creator(), Some("someone"));
        assert_eq!(env.id(), Some(42));
        assert_eq!(env.private(), Some(true));
        assert_eq!(env.location(), Some(&loc));
    }

    #[test]
    fn test_data_builder_tags_keep_order() {
        let data = DataBuilder::new(1)
            .tag("blush")
            .tags(vec!["redness".to_string(), "embarrasement".to_string()])
            .build()
            .unwrap();
        assert_eq!(data.tags(), ["blush", "redness", "embarrasement"]);
    }

    #[test]
    fn test_permissive_builders() {
        assert!(LocationBuilder::new("foobar").build().is_err());
        assert!(LocationBuilder::new("foobar").build_with(&Permissive).is_ok());
        assert!(UnitBuilder::new("x").category("barbar").build_with(&Permissive).is_ok());
        assert!(EnvironmentBuilder::new().id(-1).build_with(&Permissive).is_ok());
    }
}
