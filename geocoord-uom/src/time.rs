//! Time units (base unit: year) and decimal-year epochs

use chrono::{Datelike, Days, NaiveDate};
use geocoord_core::{Result, UomError};
use crate::dimension::{BuiltinUnit, Dimension, UnitSeed};
use crate::quantity::Quantity;
use crate::unit::Unit;
use crate::{UnitRegistry, UnitSystem};

pub const EPSG_YEAR: &str = "urn:ogc:def:uom:EPSG::1029";
pub const EPSG_SECOND: &str = "urn:ogc:def:uom:EPSG::1040";

/// Seconds in the year unit
const SECONDS_PER_YEAR: f64 = 31_556_925.445;
/// Mean days per year used for decimal-year epochs
const DAYS_PER_YEAR: f64 = 365.25;

/// Time marker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Time {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeUnit {
    Year,
    Second,
}

impl BuiltinUnit for TimeUnit {
    fn name(self) -> &'static str {
        match self {
            TimeUnit::Year => "year",
            TimeUnit::Second => "second",
        }
    }

    fn to_base(self, value: f64) -> f64 {
        match self {
            TimeUnit::Year => value,
            TimeUnit::Second => value / SECONDS_PER_YEAR,
        }
    }
}

impl From<TimeUnit> for Unit<Time> {
    fn from(unit: TimeUnit) -> Self {
        Unit::Builtin(unit)
    }
}

static TIME_SEEDS: [UnitSeed<TimeUnit>; 2] = [
    UnitSeed::new(EPSG_YEAR, "year", "", TimeUnit::Year),
    UnitSeed::new(EPSG_SECOND, "second", "SI base unit for time.", TimeUnit::Second),
];

impl Dimension for Time {
    type Builtin = TimeUnit;
    const NAME: &'static str = "time";
    const BASE: TimeUnit = TimeUnit::Year;

    fn seeds() -> &'static [UnitSeed<TimeUnit>] {
        &TIME_SEEDS
    }

    fn registry(system: &UnitSystem) -> &UnitRegistry<Time> {
        system.time()
    }
}

impl Quantity<Time> {
    /// Decimal-year epoch of a calendar date, rounded to two decimals
    pub fn from_date(date: NaiveDate) -> Self {
        let year = f64::from(date.year()) + f64::from(date.ordinal0()) / DAYS_PER_YEAR;
        Quantity::new((year * 100.0).round() / 100.0, TimeUnit::Year)
    }

    /// Calendar date of a decimal-year epoch.
    ///
    /// The fractional year is rounded to whole days counted from 1 January;
    /// a count past the end of the year rolls into the next one.
    pub fn to_date(&self) -> Result<NaiveDate> {
        let years = self.to_base().value();
        if !years.is_finite() {
            return Err(UomError::InvalidDate(format!("{} is not a finite epoch", years)));
        }

        let whole = years.trunc();
        let year = i32::try_from(whole as i64)
            .map_err(|_| UomError::InvalidDate(format!("year {} out of range", whole)))?;
        let days = ((years - whole) * DAYS_PER_YEAR).round();

        let start = NaiveDate::from_yo_opt(year, 1)
            .ok_or_else(|| UomError::InvalidDate(format!("year {} out of range", year)))?;
        let date = if days >= 0.0 {
            start.checked_add_days(Days::new(days as u64))
        } else {
            start.checked_sub_days(Days::new((-days) as u64))
        };
        date.ok_or_else(|| UomError::InvalidDate(format!("epoch {} out of range", years)))
    }
}
