//! The environment: feed metadata, location and the set of readings

use indexmap::IndexMap;
use tracing::debug;

use crate::builder::EnvironmentBuilder;
use crate::data::Data;
use crate::datapoints::DataPoints;
use crate::location::Location;
use crate::token::Status;
use crate::value::Updated;
use crate::xml::Element;

/// A change to the readings of an environment
#[derive(Debug, Clone, PartialEq)]
pub enum Update {
    /// Replace or insert a whole data entry
    Reading(Data),
    /// Replace the series of the entry with the same id
    Series(DataPoints),
}

impl Update {
    /// Id of the entry this update targets
    pub fn id(&self) -> i64 {
        match self {
            Update::Reading(data) => data.id,
            Update::Series(datapoints) => datapoints.id,
        }
    }
}

impl From<Data> for Update {
    fn from(data: Data) -> Self {
        Update::Reading(data)
    }
}

impl From<DataPoints> for Update {
    fn from(datapoints: DataPoints) -> Self {
        Update::Series(datapoints)
    }
}

/// The described environment
///
/// Data entries are keyed by id and rendered in insertion order. Replacing
/// an entry keeps the position of the id it replaces.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Environment {
    pub(crate) title: Option<String>,
    pub(crate) feed: Option<String>,
    pub(crate) status: Option<String>,
    pub(crate) description: Option<String>,
    pub(crate) icon: Option<String>,
    pub(crate) website: Option<String>,
    pub(crate) email: Option<String>,
    pub(crate) updated: Option<Updated>,
    pub(crate) creator: Option<String>,
    pub(crate) id: Option<i64>,
    pub(crate) private: Option<bool>,
    pub(crate) location: Option<Location>,
    pub(crate) data: IndexMap<i64, Data>,
}

impl Environment {
    /// Start building an environment
    pub fn builder() -> EnvironmentBuilder {
        EnvironmentBuilder::new()
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn feed(&self) -> Option<&str> {
        self.feed.as_deref()
    }

    /// Typed status; `None` when absent or not a schema value
    pub fn status(&self) -> Option<Status> {
        self.status.as_deref().and_then(|s| s.parse().ok())
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn icon(&self) -> Option<&str> {
        self.icon.as_deref()
    }

    pub fn website(&self) -> Option<&str> {
        self.website.as_deref()
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    pub fn updated(&self) -> Option<&Updated> {
        self.updated.as_ref()
    }

    pub fn creator(&self) -> Option<&str> {
        self.creator.as_deref()
    }

    pub fn id(&self) -> Option<i64> {
        self.id
    }

    pub fn private(&self) -> Option<bool> {
        self.private
    }

    pub fn location(&self) -> Option<&Location> {
        self.location.as_ref()
    }

    /// Replace the location
    pub fn set_location(&mut self, location: Location) {
        self.location = Some(location);
    }

    /// Entry with `id`
    pub fn data(&self, id: i64) -> Option<&Data> {
        self.data.get(&id)
    }

    /// All entries in output order
    pub fn data_iter(&self) -> impl Iterator<Item = &Data> {
        self.data.values()
    }

    /// Number of data entries
    pub fn data_len(&self) -> usize {
        self.data.len()
    }

    /// Merge one update by id
    ///
    /// A reading replaces the entry with its id or is appended. A series
    /// replaces the datapoints of the entry with its id, keeping the other
    /// fields, or is appended inside an id-only entry.
    pub fn update_data<U: Into<Update>>(&mut self, update: U) {
        match update.into() {
            Update::Reading(data) => {
                debug!(id = data.id, "merging reading");
                self.data.insert(data.id, data);
            }
            Update::Series(datapoints) => {
                debug!(id = datapoints.id, points = datapoints.len(), "merging series");
                match self.data.get_mut(&datapoints.id) {
                    Some(existing) => existing.set_datapoints(datapoints),
                    None => {
                        self.data.insert(datapoints.id, Data::placeholder(datapoints));
                    }
                }
            }
        }
    }

    /// Merge updates in order; later updates win for the same id
    pub fn update_batch<I, U>(&mut self, updates: I)
    where
        I: IntoIterator<Item = U>,
        U: Into<Update>,
    {
        for update in updates {
            self.update_data(update);
        }
    }

    /// Render as an `<environment>` element
    pub fn to_element(&self) -> Element {
        let mut el = Element::new("environment")
            .with_attr_opt("updated", self.updated.as_ref())
            .with_attr_opt("creator", self.creator.as_deref())
            .with_attr_opt("id", self.id)
            .with_text_child_opt("title", self.title.as_deref())
            .with_text_child_opt("feed", self.feed.as_deref())
            .with_text_child_opt(Status::FIELD, self.status.as_deref())
            .with_text_child_opt("description", self.description.as_deref())
            .with_text_child_opt("icon", self.icon.as_deref())
            .with_text_child_opt("website", self.website.as_deref())
            .with_text_child_opt("email", self.email.as_deref())
            .with_text_child_opt("private", self.private);

        if let Some(location) = &self.location {
            el.push_child(location.to_element());
        }
        for data in self.data.values() {
            el.push_child(data.to_element());
        }
        el
    }
}
