//! Scale units (base unit: unity)

use crate::dimension::{BuiltinUnit, Dimension, UnitSeed};
use crate::unit::Unit;
use crate::{UnitRegistry, UnitSystem};

pub const EPSG_UNITY: &str = "urn:ogc:def:uom:EPSG::9201";
pub const EPSG_PARTS_PER_MILLION: &str = "urn:ogc:def:uom:EPSG::9202";
pub const EPSG_COEFFICIENT: &str = "urn:ogc:def:uom:EPSG::9203";
pub const EPSG_PARTS_PER_BILLION: &str = "urn:ogc:def:uom:EPSG::1028";

/// Scale (dimensionless ratio) marker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scale {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScaleUnit {
    Unity,
    PartsPerMillion,
    Coefficient,
    PartsPerBillion,
}

impl BuiltinUnit for ScaleUnit {
    fn name(self) -> &'static str {
        match self {
            ScaleUnit::Unity => "unity",
            ScaleUnit::PartsPerMillion => "parts per million",
            ScaleUnit::Coefficient => "coefficient",
            ScaleUnit::PartsPerBillion => "parts per billion",
        }
    }

    fn to_base(self, value: f64) -> f64 {
        match self {
            ScaleUnit::Unity | ScaleUnit::Coefficient => value,
            ScaleUnit::PartsPerMillion => value / 1_000_000.0,
            ScaleUnit::PartsPerBillion => value / 1_000_000_000.0,
        }
    }
}

impl From<ScaleUnit> for Unit<Scale> {
    fn from(unit: ScaleUnit) -> Self {
        Unit::Builtin(unit)
    }
}

static SCALE_SEEDS: [UnitSeed<ScaleUnit>; 4] = [
    UnitSeed::new(EPSG_UNITY, "unity", "", ScaleUnit::Unity),
    UnitSeed::new(EPSG_PARTS_PER_MILLION, "parts per million", "", ScaleUnit::PartsPerMillion),
    UnitSeed::new(
        EPSG_COEFFICIENT,
        "coefficient",
        "Used when parameters are coefficients.  They inherently take the units which depend upon the term to which the coefficient applies.",
        ScaleUnit::Coefficient,
    ),
    UnitSeed::new(EPSG_PARTS_PER_BILLION, "parts per billion", "", ScaleUnit::PartsPerBillion),
];

impl Dimension for Scale {
    type Builtin = ScaleUnit;
    const NAME: &'static str = "scale";
    const BASE: ScaleUnit = ScaleUnit::Unity;

    fn seeds() -> &'static [UnitSeed<ScaleUnit>] {
        &SCALE_SEEDS
    }

    fn registry(system: &UnitSystem) -> &UnitRegistry<Scale> {
        system.scale()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Quantity;

    #[test]
    fn test_coefficient_as_unity() {
        let q = Quantity::<Scale>::new(0.9996, ScaleUnit::Coefficient);
        assert_eq!(q.to_base().value(), 0.9996);
        assert_eq!(q.unit_name(), "coefficient");
    }

    #[test]
    fn test_scale_difference_units() {
        let ppm = Quantity::<Scale>::new(1.5, ScaleUnit::PartsPerMillion);
        let ppb = Quantity::<Scale>::new(1500.0, ScaleUnit::PartsPerBillion);
        assert!((ppm.to_base().value() - ppb.to_base().value()).abs() < 1e-18);
    }

    #[test]
    fn test_coefficient_is_distinct_from_unity() {
        // Same ratio, different unit tags: no same-unit fast path
        let unity: Unit<Scale> = ScaleUnit::Unity.into();
        let coefficient: Unit<Scale> = ScaleUnit::Coefficient.into();
        assert_ne!(unity, coefficient);
        assert_eq!(unity.ratio(), coefficient.ratio());
    }
}
