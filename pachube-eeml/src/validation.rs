//! Field-legality policies for EEML entities
//!
//! Every constructor runs exactly one [`Validator`] over the value it is
//! about to return. [`Strict`] enforces the EEML 0.5.1 rules and is what the
//! plain constructors use; [`Permissive`] checks nothing and is opted into by
//! passing it to a `build_with` / `with_validator` constructor. Objects are
//! never re-validated after construction.

use std::str::FromStr;

use crate::token::{Disposition, Domain, Exposure, Status, UnitKind};
use crate::{Data, DataPoints, EemlError, Environment, Location, Result, Unit};

/// A policy run over each entity when it is constructed
pub trait Validator {
    /// Check a unit
    fn unit(&self, unit: &Unit) -> Result<()>;
    /// Check an environment's own fields (not its location or data)
    fn environment(&self, env: &Environment) -> Result<()>;
    /// Check a location
    fn location(&self, loc: &Location) -> Result<()>;
    /// Check a data entry
    fn data(&self, data: &Data) -> Result<()>;
    /// Check a datapoints series
    fn datapoints(&self, datapoints: &DataPoints) -> Result<()>;
}

/// EEML 0.5.1 rules
#[derive(Debug, Clone, Copy, Default)]
pub struct Strict;

/// Accepts everything
#[derive(Debug, Clone, Copy, Default)]
pub struct Permissive;

impl Validator for Strict {
    fn unit(&self, unit: &Unit) -> Result<()> {
        check_token::<UnitKind>(unit.category.as_deref())
    }

    fn environment(&self, env: &Environment) -> Result<()> {
        check_token::<Status>(env.status.as_deref())?;
        check_id(env.id)
    }

    fn location(&self, loc: &Location) -> Result<()> {
        if loc.domain.is_empty() {
            return Err(EemlError::validation(
                Domain::FIELD,
                "is required, must be 'physical' or 'virtual'",
            ));
        }
        check_token::<Domain>(Some(&loc.domain))?;
        check_token::<Exposure>(loc.exposure.as_deref())?;
        check_token::<Disposition>(loc.disposition.as_deref())
    }

    fn data(&self, data: &Data) -> Result<()> {
        check_id(Some(data.id))
    }

    fn datapoints(&self, datapoints: &DataPoints) -> Result<()> {
        check_id(Some(datapoints.id))
    }
}

impl Validator for Permissive {
    fn unit(&self, _unit: &Unit) -> Result<()> {
        Ok(())
    }

    fn environment(&self, _env: &Environment) -> Result<()> {
        Ok(())
    }

    fn location(&self, _loc: &Location) -> Result<()> {
        Ok(())
    }

    fn data(&self, _data: &Data) -> Result<()> {
        Ok(())
    }

    fn datapoints(&self, _datapoints: &DataPoints) -> Result<()> {
        Ok(())
    }
}

fn check_token<T: FromStr<Err = EemlError>>(value: Option<&str>) -> Result<()> {
    match value {
        Some(value) => value.parse::<T>().map(|_| ()),
        None => Ok(()),
    }
}

fn check_id(id: Option<i64>) -> Result<()> {
    match id {
        Some(id) if id < 0 => Err(EemlError::validation(
            "id",
            format!("must be a non-negative integer, got {}", id),
        )),
        _ => Ok(()),
    }
}
