//! Enumerated vocabulary of the EEML 0.5.1 schema
//!
//! Entities store these values as the string the caller supplied, so that a
//! [`Permissive`](crate::validation::Permissive) policy can let an unknown
//! token through. The enums here are the typed view of that string.

use std::fmt;
use std::str::FromStr;

use crate::{EemlError, Result};

macro_rules! token {
    (
        $(#[$meta:meta])*
        $name:ident as $field:literal {
            $($(#[$vmeta:meta])* $variant:ident => $text:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($(#[$vmeta])* $variant),+
        }

        impl $name {
            /// Every legal value, in schema order
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Name of the field this token is written under
            pub const FIELD: &'static str = $field;

            /// Schema spelling of this value
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $text),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = EemlError;

            fn from_str(s: &str) -> Result<Self> {
                match s {
                    $($text => Ok($name::$variant),)+
                    _ => Err(unknown_token(Self::FIELD, Self::ALL.iter().map(|t| t.as_str()), s)),
                }
            }
        }

        impl From<$name> for String {
            fn from(token: $name) -> String {
                token.as_str().to_string()
            }
        }
    };
}

fn unknown_token<'a>(field: &str, allowed: impl Iterator<Item = &'a str>, got: &str) -> EemlError {
    let allowed: Vec<String> = allowed.map(|t| format!("'{}'", t)).collect();
    EemlError::validation(
        field,
        format!("must be one of {}, got '{}'", allowed.join(", "), got),
    )
}

token! {
    /// Whether a feed is still being updated
    Status as "status" {
        Frozen => "frozen",
        Live => "live",
    }
}

token! {
    /// Whether a location is a real place
    Domain as "domain" {
        Physical => "physical",
        Virtual => "virtual",
    }
}

token! {
    /// Whether a sensor sits inside or outside
    Exposure as "exposure" {
        Indoor => "indoor",
        Outdoor => "outdoor",
    }
}

token! {
    /// Whether a sensor moves
    Disposition as "disposition" {
        Fixed => "fixed",
        Mobile => "mobile",
    }
}

token! {
    /// Category of a measurement unit
    UnitKind as "type" {
        BasicSi => "basicSI",
        DerivedSi => "derivedSI",
        ConversionBased => "conversionBasedUnits",
        Derived => "derivedUnits",
        ContextDependent => "contextDependentUnits",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_tokens() {
        assert_eq!("frozen".parse::<Status>().unwrap(), Status::Frozen);
        assert_eq!("virtual".parse::<Domain>().unwrap(), Domain::Virtual);
        assert_eq!("outdoor".parse::<Exposure>().unwrap(), Exposure::Outdoor);
        assert_eq!("mobile".parse::<Disposition>().unwrap(), Disposition::Mobile);
        for kind in UnitKind::ALL {
            assert_eq!(kind.as_str().parse::<UnitKind>().unwrap(), *kind);
        }
    }

    #[test]
    fn test_unknown_token_names_field() {
        let err = "foobar".parse::<Status>().unwrap_err();
        assert_eq!(err.field(), Some("status"));
        assert_eq!(
            err.to_string(),
            "Invalid value for field 'status': must be one of 'frozen', 'live', got 'foobar'"
        );

        let err = "barbar".parse::<UnitKind>().unwrap_err();
        assert_eq!(err.field(), Some("type"));
    }

    #[test]
    fn test_tokens_are_case_sensitive() {
        assert!("Live".parse::<Status>().is_err());
        assert!("basicsi".parse::<UnitKind>().is_err());
    }

    #[test]
    fn test_into_string() {
        let s: String = Disposition::Fixed.into();
        assert_eq!(s, "fixed");
        assert_eq!(UnitKind::DerivedSi.to_string(), "derivedSI");
    }
}
