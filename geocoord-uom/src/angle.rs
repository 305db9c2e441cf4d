//! Angle units (base unit: radian)
//!
//! Only the units that appear in transformation parameter sets are built in.
//! Sexagesimal DMS is the one non-linear unit in the crate: a value such as
//! `40.1530` encodes 40°15'30" and converts through its own formula rather
//! than a ratio.

use std::f64::consts::PI;
use crate::dimension::{BuiltinUnit, Dimension, UnitSeed};
use crate::unit::Unit;
use crate::{UnitRegistry, UnitSystem};

pub const EPSG_RADIAN: &str = "urn:ogc:def:uom:EPSG::9101";
pub const EPSG_DEGREE: &str = "urn:ogc:def:uom:EPSG::9102";
pub const EPSG_ARC_MINUTE: &str = "urn:ogc:def:uom:EPSG::9103";
pub const EPSG_ARC_SECOND: &str = "urn:ogc:def:uom:EPSG::9104";
pub const EPSG_GRAD: &str = "urn:ogc:def:uom:EPSG::9105";
pub const EPSG_MILLIARC_SECOND: &str = "urn:ogc:def:uom:EPSG::1031";
pub const EPSG_SEXAGESIMAL_DMS: &str = "urn:ogc:def:uom:EPSG::9110";

/// Angle marker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Angle {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AngleUnit {
    Radian,
    Degree,
    ArcMinute,
    ArcSecond,
    Grad,
    MilliarcSecond,
    SexagesimalDms,
}

impl BuiltinUnit for AngleUnit {
    fn name(self) -> &'static str {
        match self {
            AngleUnit::Radian => "radian",
            AngleUnit::Degree => "degree",
            AngleUnit::ArcMinute => "arc-minute",
            AngleUnit::ArcSecond => "arc-second",
            AngleUnit::Grad => "grad",
            AngleUnit::MilliarcSecond => "milliarc-second",
            AngleUnit::SexagesimalDms => "sexagesimal DMS",
        }
    }

    fn to_base(self, value: f64) -> f64 {
        match self {
            AngleUnit::Radian => value,
            AngleUnit::Degree => value * PI / 180.0,
            AngleUnit::ArcMinute => value * PI / 10_800.0,
            AngleUnit::ArcSecond => value * PI / 648_000.0,
            AngleUnit::Grad => value * PI / 200.0,
            AngleUnit::MilliarcSecond => value * PI / 648_000_000.0,
            AngleUnit::SexagesimalDms => dms_to_degrees(value).to_radians(),
        }
    }

    fn from_base(self, base: f64) -> f64 {
        match self {
            AngleUnit::SexagesimalDms => degrees_to_dms(base.to_degrees()),
            linear => base / linear.to_base(1.0),
        }
    }

    fn is_linear(self) -> bool {
        self != AngleUnit::SexagesimalDms
    }
}

impl From<AngleUnit> for Unit<Angle> {
    fn from(unit: AngleUnit) -> Self {
        Unit::Builtin(unit)
    }
}

/// Decode `DDD.MMSSsss` into decimal degrees
fn dms_to_degrees(dms: f64) -> f64 {
    let abs = dms.abs();
    let degrees = abs.trunc();
    let minutes_field = (abs - degrees) * 100.0;
    let mut minutes = minutes_field.trunc();
    let mut seconds = (minutes_field - minutes) * 100.0;
    // `40.15` reads back as 14'99.99...": a seconds field can never reach 100
    if seconds >= 100.0 - 1e-6 {
        minutes += 1.0;
        seconds = 0.0;
    }

    (degrees + minutes / 60.0 + seconds / 3600.0).copysign(dms)
}

/// Encode decimal degrees as `DDD.MMSSsss`.
///
/// Seconds keep their full precision; only a value within float noise of
/// 60" is carried into the minutes.
fn degrees_to_dms(degrees: f64) -> f64 {
    let abs = degrees.abs();
    let mut d = abs.trunc();
    let minutes = (abs - d) * 60.0;
    let mut m = minutes.trunc();
    let mut s = (minutes - m) * 60.0;
    if s >= SECONDS_CARRY {
        s = (s - 60.0).max(0.0);
        m += 1.0;
    }
    if m >= 60.0 {
        m -= 60.0;
        d += 1.0;
    }

    (d + m / 100.0 + s / 10_000.0).copysign(degrees)
}

/// Seconds this close to 60 are a rounding artefact of a whole minute
const SECONDS_CARRY: f64 = 60.0 - 1e-9;

static ANGLE_SEEDS: [UnitSeed<AngleUnit>; 7] = [
    UnitSeed::new(EPSG_RADIAN, "radian", "SI standard unit.", AngleUnit::Radian),
    UnitSeed::new(EPSG_DEGREE, "degree", "= pi/180 radians", AngleUnit::Degree),
    UnitSeed::new(EPSG_ARC_MINUTE, "arc-minute", "1/60th degree = ((pi/180) / 60) radians", AngleUnit::ArcMinute),
    UnitSeed::new(EPSG_ARC_SECOND, "arc-second", "1/60th arc-minute = ((pi/180) / 3600) radians", AngleUnit::ArcSecond),
    UnitSeed::new(EPSG_GRAD, "grad", "=pi/200 radians.", AngleUnit::Grad),
    UnitSeed::new(EPSG_MILLIARC_SECOND, "milliarc-second", "= ((pi/180) / 3600 / 1000) radians", AngleUnit::MilliarcSecond),
    UnitSeed::new(
        EPSG_SEXAGESIMAL_DMS,
        "sexagesimal DMS",
        "Pseudo unit. Format: signed degrees - period - minutes (2 digits) - integer seconds (2 digits) - fraction of seconds (any precision). Must include leading zero in minutes and seconds and exclude decimal point for seconds. Convert to degree using formula.",
        AngleUnit::SexagesimalDms,
    ),
];

impl Dimension for Angle {
    type Builtin = AngleUnit;
    const NAME: &'static str = "angle";
    const BASE: AngleUnit = AngleUnit::Radian;

    fn seeds() -> &'static [UnitSeed<AngleUnit>] {
        &ANGLE_SEEDS
    }

    fn registry(system: &UnitSystem) -> &UnitRegistry<Angle> {
        system.angle()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Quantity;

    #[test]
    fn test_dms_decoding() {
        assert!((dms_to_degrees(40.15) - 40.25).abs() < 1e-12);
        assert!((dms_to_degrees(40.3) - 40.5).abs() < 1e-12);
        assert!((dms_to_degrees(-91.12) + 91.2).abs() < 1e-12);
        // 52°39'27.2531"
        assert!((dms_to_degrees(52.39272531) - (52.0 + 39.0 / 60.0 + 27.2531 / 3600.0)).abs() < 1e-12);
    }

    #[test]
    fn test_dms_encoding() {
        assert!((degrees_to_dms(40.25) - 40.15).abs() < 1e-12);
        assert!((degrees_to_dms(-91.2) + 91.12).abs() < 1e-12);
        assert_eq!(degrees_to_dms(0.0), 0.0);
    }

    #[test]
    fn test_dms_encoding_carries_whole_minutes() {
        // 40.25 after a trip through radians
        assert!((degrees_to_dms(40.249999999999996) - 40.15).abs() < 1e-12);
        assert!((degrees_to_dms(40.999999999999996) - 41.0).abs() < 1e-12);
        assert!((degrees_to_dms(10.749999999999998) - 10.45).abs() < 1e-12);
    }

    #[test]
    fn test_dms_keeps_sub_microarcsecond_detail() {
        // 52.3927 mas is 0.0523927"
        let mas = Quantity::<Angle>::new(52.3927, AngleUnit::MilliarcSecond);
        let dms = AngleUnit::SexagesimalDms.from_base(mas.to_base().value());
        assert!((dms - 0.0523927 / 10_000.0).abs() < 1e-18);

        let back = Quantity::<Angle>::new(dms, AngleUnit::SexagesimalDms).to_base().value();
        let mas_back = AngleUnit::MilliarcSecond.from_base(back);
        assert!((mas_back - 52.3927).abs() < 1e-9);
    }

    #[test]
    fn test_dms_through_radians() {
        let q = Quantity::<Angle>::new(40.15, AngleUnit::SexagesimalDms);
        let base = q.to_base().value();
        assert!((base - 40.25_f64.to_radians()).abs() < 1e-15);
        assert!((AngleUnit::SexagesimalDms.from_base(base) - 40.15).abs() < 1e-9);
    }

    #[test]
    fn test_linearity() {
        assert!(AngleUnit::Degree.is_linear());
        assert!(!AngleUnit::SexagesimalDms.is_linear());
    }

    #[test]
    fn test_arc_seconds() {
        let q = Quantity::<Angle>::new(3600.0, AngleUnit::ArcSecond);
        assert!((q.to_base().value() - PI / 180.0).abs() < 1e-15);

        let mas = Quantity::<Angle>::new(1000.0, AngleUnit::MilliarcSecond);
        let arcsec = Quantity::<Angle>::new(1.0, AngleUnit::ArcSecond);
        assert!((mas.to_base().value() - arcsec.to_base().value()).abs() < 1e-18);
    }

    #[test]
    fn test_mixed_addition_into_dms() {
        // 10°30' + 15' = 10°45'
        let a = Quantity::<Angle>::new(10.30, AngleUnit::SexagesimalDms);
        let b = Quantity::<Angle>::new(15.0, AngleUnit::ArcMinute);
        assert!((a.add(&b).value() - 10.45).abs() < 1e-9);
    }
}
