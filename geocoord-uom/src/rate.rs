//! Rates of change: a quantity per unit of time
//!
//! Time-dependent transformations carry the drift of their translation,
//! rotation and scale parameters as rates. A built-in rate unit names the
//! change unit by identifier and resolves it through the owning dimension's
//! registry each time a rate is made.

use std::fmt;
use geocoord_core::Result;
use crate::angle::{self, Angle};
use crate::dimension::Dimension;
use crate::length::{self, Length};
use crate::quantity::Quantity;
use crate::scale::{self, Scale};
use crate::time::{Time, TimeUnit};
use crate::any::AnyQuantity;
use crate::system::UnitSystem;

pub const EPSG_MILLIMETRES_PER_YEAR: &str = "urn:ogc:def:uom:EPSG::1027";
pub const EPSG_PARTS_PER_BILLION_PER_YEAR: &str = "urn:ogc:def:uom:EPSG::1030";
pub const EPSG_MILLIARC_SECONDS_PER_YEAR: &str = "urn:ogc:def:uom:EPSG::1032";
pub const EPSG_CENTIMETRES_PER_YEAR: &str = "urn:ogc:def:uom:EPSG::1034";
pub const EPSG_METRES_PER_YEAR: &str = "urn:ogc:def:uom:EPSG::1042";

/// A change of `D` over an interval of time
pub struct Rate<D: Dimension> {
    change: Quantity<D>,
    per: Quantity<Time>,
}

impl<D: Dimension> Rate<D> {
    pub fn new(change: Quantity<D>, per: Quantity<Time>) -> Self {
        Rate { change, per }
    }

    /// A change per one year
    pub fn annual(change: Quantity<D>) -> Self {
        Rate::new(change, Quantity::new(1.0, TimeUnit::Year))
    }

    pub fn change(&self) -> &Quantity<D> {
        &self.change
    }

    pub fn per(&self) -> &Quantity<Time> {
        &self.per
    }

    /// Magnitude of the change per interval
    pub fn value(&self) -> f64 {
        self.change.value()
    }

    pub fn unit_name(&self) -> String {
        if self.per.value() == 1.0 {
            format!("{} per {}", self.change.unit_name(), self.per.unit_name())
        } else {
            format!("{} per {}", self.change.unit_name(), self.per)
        }
    }

    /// The change accumulated over one year, in the change's unit
    pub fn per_year(&self) -> Quantity<D> {
        self.change.divide(self.per.to_base().value())
    }

    /// The change accumulated between two epochs
    pub fn over(&self, elapsed: &Quantity<Time>) -> Quantity<D> {
        self.per_year().multiply(elapsed.to_base().value())
    }
}

impl<D: Dimension> Clone for Rate<D> {
    fn clone(&self) -> Self {
        Rate { change: self.change.clone(), per: self.per.clone() }
    }
}

impl<D: Dimension> fmt::Debug for Rate<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rate")
            .field("change", &self.change)
            .field("per", &self.per)
            .finish()
    }
}

impl<D: Dimension> fmt::Display for Rate<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value(), self.unit_name())
    }
}

/// Rates compare by their annual change in base units
impl<D: Dimension> PartialEq for Rate<D> {
    fn eq(&self, other: &Self) -> bool {
        self.per_year() == other.per_year()
    }
}

/// The unit a built-in rate changes in
#[derive(Debug, Clone, Copy)]
pub(crate) enum RateChange {
    Length(&'static str),
    Scale(&'static str),
    Angle(&'static str),
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct RateSeed {
    pub id: &'static str,
    pub name: &'static str,
    pub change: RateChange,
}

pub(crate) static RATE_SEEDS: [RateSeed; 5] = [
    RateSeed {
        id: EPSG_MILLIMETRES_PER_YEAR,
        name: "millimetres per year",
        change: RateChange::Length(length::EPSG_MILLIMETRE),
    },
    RateSeed {
        id: EPSG_PARTS_PER_BILLION_PER_YEAR,
        name: "parts per billion per year",
        change: RateChange::Scale(scale::EPSG_PARTS_PER_BILLION),
    },
    RateSeed {
        id: EPSG_MILLIARC_SECONDS_PER_YEAR,
        name: "milliarc-seconds per year",
        change: RateChange::Angle(angle::EPSG_MILLIARC_SECOND),
    },
    RateSeed {
        id: EPSG_CENTIMETRES_PER_YEAR,
        name: "centimetres per year",
        change: RateChange::Length(length::EPSG_CENTIMETRE),
    },
    RateSeed {
        id: EPSG_METRES_PER_YEAR,
        name: "metres per year",
        change: RateChange::Length(length::EPSG_METRE),
    },
];

impl RateSeed {
    pub(crate) fn make(&self, system: &UnitSystem, value: f64) -> Result<AnyQuantity> {
        let quantity = match self.change {
            RateChange::Length(id) => {
                AnyQuantity::LengthRate(Rate::annual(system.make_unit::<Length>(value, id)?))
            }
            RateChange::Scale(id) => {
                AnyQuantity::ScaleRate(Rate::annual(system.make_unit::<Scale>(value, id)?))
            }
            RateChange::Angle(id) => {
                AnyQuantity::AngleRate(Rate::annual(system.make_unit::<Angle>(value, id)?))
            }
        };
        Ok(quantity)
    }
}

pub(crate) fn find_rate(id: &str) -> Option<&'static RateSeed> {
    RATE_SEEDS.iter().find(|seed| seed.id == id)
}
