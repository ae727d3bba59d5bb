//! Measurement units

use crate::builder::UnitBuilder;
use crate::token::UnitKind;
use crate::xml::Element;

/// A measurement unit such as `Celsius` / `derivedSI` / `°C`
///
/// Immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct Unit {
    pub(crate) name: String,
    pub(crate) category: Option<String>,
    pub(crate) symbol: Option<String>,
}

impl Unit {
    /// A unit with only a name
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            category: None,
            symbol: None,
        }
    }

    /// Start building a unit with a category and symbol
    pub fn builder<S: Into<String>>(name: S) -> UnitBuilder {
        UnitBuilder::new(name)
    }

    pub(crate) fn known(name: &str, kind: UnitKind, symbol: &str) -> Self {
        Self {
            name: name.to_string(),
            category: Some(kind.into()),
            symbol: Some(symbol.to_string()),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Typed category; `None` when absent or not a schema value
    pub fn category(&self) -> Option<UnitKind> {
        self.category.as_deref().and_then(|c| c.parse().ok())
    }

    pub fn symbol(&self) -> Option<&str> {
        self.symbol.as_deref()
    }

    /// Render as `<unit type=".." symbol="..">name</unit>`
    pub fn to_element(&self) -> Element {
        Element::new("unit")
            .with_attr_opt(UnitKind::FIELD, self.category.as_deref())
            .with_attr_opt("symbol", self.symbol.as_deref())
            .with_text(&self.name)
    }
}

/// Units that show up in most feeds
pub mod units {
    use super::Unit;
    use crate::token::UnitKind;

    pub fn celsius() -> Unit {
        Unit::known("Celsius", UnitKind::DerivedSi, "\u{b0}C")
    }

    /// Degree of arc
    pub fn degree() -> Unit {
        Unit::known("Degree", UnitKind::BasicSi, "\u{b0}")
    }

    pub fn fahrenheit() -> Unit {
        Unit::known("Fahrenheit", UnitKind::DerivedSi, "\u{b0}F")
    }

    pub fn hpa() -> Unit {
        Unit::known("hPa", UnitKind::DerivedSi, "hPa")
    }

    pub fn knots() -> Unit {
        Unit::known("Knots", UnitKind::ConversionBased, "kts")
    }

    pub fn relative_humidity() -> Unit {
        Unit::known("Relative Humidity", UnitKind::Derived, "%RH")
    }

    pub fn watt() -> Unit {
        Unit::known("Watt", UnitKind::DerivedSi, "W")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::Permissive;

    #[test]
    fn test_good_unit() {
        let unit = Unit::builder("Celzius")
            .category("basicSI")
            .symbol("C")
            .build()
            .unwrap();

        let expected = Element::new("unit")
            .with_attr("type", "basicSI")
            .with_attr("symbol", "C")
            .with_text("Celzius");
        assert_eq!(unit.to_element(), expected);
        assert_eq!(unit.category(), Some(UnitKind::BasicSi));
    }

    #[test]
    fn test_unit_types() {
        for kind in UnitKind::ALL {
            assert!(Unit::builder("foobar").category(*kind).build().is_ok());
        }
        let err = Unit::builder("foobar").category("barbar").build().unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_name_only_unit() {
        let unit = Unit::new("blushesPerHour");
        let el = unit.to_element();
        assert!(el.attributes().is_empty());
        assert_eq!(el.text(), Some("blushesPerHour"));
    }

    #[test]
    fn test_permissive_unit_category() {
        let unit = Unit::builder("foobar")
            .category("barbar")
            .build_with(&Permissive)
            .unwrap();
        assert_eq!(unit.category(), None);
        assert_eq!(unit.to_element().attr("type"), Some("barbar"));
    }

    #[test]
    fn test_known_units() {
        let c = units::celsius();
        assert_eq!(c.symbol(), Some("°C"));
        assert_eq!(c.category(), Some(UnitKind::DerivedSi));
        assert_eq!(units::relative_humidity().symbol(), Some("%RH"));
        assert_eq!(units::knots().category(), Some(UnitKind::ConversionBased));
        assert_eq!(units::degree().category(), Some(UnitKind::BasicSi));
        assert_eq!(units::watt().name(), "Watt");
        assert_eq!(units::hpa().to_element().text(), Some("hPa"));
        assert_eq!(units::fahrenheit().symbol(), Some("°F"));
    }
}
