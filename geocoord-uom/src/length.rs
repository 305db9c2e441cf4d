//! Length units (base unit: metre)

use crate::dimension::{BuiltinUnit, Dimension, UnitSeed};
use crate::unit::Unit;
use crate::{UnitRegistry, UnitSystem};

pub const EPSG_MILLIMETRE: &str = "urn:ogc:def:uom:EPSG::1025";
pub const EPSG_CENTIMETRE: &str = "urn:ogc:def:uom:EPSG::1033";
/// SI base unit for length.
pub const EPSG_METRE: &str = "urn:ogc:def:uom:EPSG::9001";
pub const EPSG_FOOT: &str = "urn:ogc:def:uom:EPSG::9002";
pub const EPSG_US_SURVEY_FOOT: &str = "urn:ogc:def:uom:EPSG::9003";
pub const EPSG_CLARKES_FOOT: &str = "urn:ogc:def:uom:EPSG::9005";
pub const EPSG_GERMAN_LEGAL_METRE: &str = "urn:ogc:def:uom:EPSG::9031";
pub const EPSG_KILOMETRE: &str = "urn:ogc:def:uom:EPSG::9036";
pub const EPSG_CLARKES_YARD: &str = "urn:ogc:def:uom:EPSG::9037";
pub const EPSG_CLARKES_LINK: &str = "urn:ogc:def:uom:EPSG::9039";
pub const EPSG_BRITISH_YARD_SEARS_1922: &str = "urn:ogc:def:uom:EPSG::9040";
pub const EPSG_BRITISH_FOOT_SEARS_1922: &str = "urn:ogc:def:uom:EPSG::9041";
pub const EPSG_BRITISH_CHAIN_SEARS_1922: &str = "urn:ogc:def:uom:EPSG::9042";
pub const EPSG_BRITISH_CHAIN_BENOIT_1895_B: &str = "urn:ogc:def:uom:EPSG::9062";
pub const EPSG_INDIAN_FOOT: &str = "urn:ogc:def:uom:EPSG::9080";
pub const EPSG_INDIAN_YARD: &str = "urn:ogc:def:uom:EPSG::9084";
pub const EPSG_GOLD_COAST_FOOT: &str = "urn:ogc:def:uom:EPSG::9094";
pub const EPSG_BRITISH_FOOT_1936: &str = "urn:ogc:def:uom:EPSG::9095";
/// =1/100 international chain.
pub const EPSG_LINK: &str = "urn:ogc:def:uom:EPSG::9098";
pub const EPSG_BRITISH_CHAIN_SEARS_1922_TRUNCATED: &str = "urn:ogc:def:uom:EPSG::9301";
pub const EPSG_NAUTICAL_MILE: &str = "urn:ogc:def:uom:EPSG::9030";
pub const EPSG_STATUTE_MILE: &str = "urn:ogc:def:uom:EPSG::9093";
pub const EPSG_US_SURVEY_MILE: &str = "urn:ogc:def:uom:EPSG::9035";

/// Sears 1922 British yard-metre ratio (inches per metre), as given by Bomford
const SEARS_1922_INCHES_PER_METRE: f64 = 39.370147;
/// Benoit 1895 B British yard-metre ratio (inches per metre), as given by Bomford
const BENOIT_1895_B_INCHES_PER_METRE: f64 = 39.370113;
/// J.S. Clark's 1865 British yard, in metres
const CLARK_1865_YARD: f64 = 0.9144025;
/// Indian foot in British feet (A.R. Clarke 1865)
const INDIAN_FOOT_RATIO: f64 = 0.99999566;

/// Length dimension marker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Length {}

/// Built-in length units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LengthUnit {
    Millimetre,
    Centimetre,
    Metre,
    Foot,
    UsSurveyFoot,
    ClarkeFoot,
    GermanLegalMetre,
    Kilometre,
    ClarkeYard,
    ClarkeLink,
    BritishYardSears1922,
    BritishFootSears1922,
    BritishChainSears1922,
    BritishChainBenoit1895B,
    IndianFoot,
    IndianYard,
    GoldCoastFoot,
    BritishFoot1936,
    Link,
    BritishChainSears1922Truncated,
    NauticalMile,
    StatuteMile,
    UsSurveyMile,
}

impl LengthUnit {
    /// Metres in one of this unit
    fn metres(self) -> f64 {
        match self {
            LengthUnit::Millimetre => 0.001,
            LengthUnit::Centimetre => 0.01,
            LengthUnit::Metre => 1.0,
            LengthUnit::Foot => 0.3048,
            LengthUnit::UsSurveyFoot => 1200.0 / 3937.0,
            LengthUnit::ClarkeFoot => 0.3047972654,
            LengthUnit::GermanLegalMetre => 1.0000135965,
            LengthUnit::Kilometre => 1000.0,
            LengthUnit::ClarkeYard => 0.9143917962,
            LengthUnit::ClarkeLink => 0.201166195164,
            LengthUnit::BritishYardSears1922 => 36.0 / SEARS_1922_INCHES_PER_METRE,
            LengthUnit::BritishFootSears1922 => 12.0 / SEARS_1922_INCHES_PER_METRE,
            LengthUnit::BritishChainSears1922 => 792.0 / SEARS_1922_INCHES_PER_METRE,
            LengthUnit::BritishChainBenoit1895B => 792.0 / BENOIT_1895_B_INCHES_PER_METRE,
            LengthUnit::IndianFoot => CLARK_1865_YARD / 3.0 * INDIAN_FOOT_RATIO,
            LengthUnit::IndianYard => CLARK_1865_YARD * INDIAN_FOOT_RATIO,
            LengthUnit::GoldCoastFoot => 6378300.0 / 20926201.0,
            LengthUnit::BritishFoot1936 => 0.3048007491,
            LengthUnit::Link => 0.201168,
            // 22 truncated Sears yards of 0.914398 m
            LengthUnit::BritishChainSears1922Truncated => 20.116756,
            LengthUnit::NauticalMile => 1852.0,
            LengthUnit::StatuteMile => 1609.344,
            LengthUnit::UsSurveyMile => 1609.35,
        }
    }
}

impl BuiltinUnit for LengthUnit {
    fn name(self) -> &'static str {
        match self {
            LengthUnit::Millimetre => "millimetre",
            LengthUnit::Centimetre => "centimetre",
            LengthUnit::Metre => "metre",
            LengthUnit::Foot => "foot",
            LengthUnit::UsSurveyFoot => "US survey foot",
            LengthUnit::ClarkeFoot => "Clarke's foot",
            LengthUnit::GermanLegalMetre => "German legal metre",
            LengthUnit::Kilometre => "kilometre",
            LengthUnit::ClarkeYard => "Clarke's yard",
            LengthUnit::ClarkeLink => "Clarke's link",
            LengthUnit::BritishYardSears1922 => "British yard (Sears 1922)",
            LengthUnit::BritishFootSears1922 => "British foot (Sears 1922)",
            LengthUnit::BritishChainSears1922 => "British chain (Sears 1922)",
            LengthUnit::BritishChainBenoit1895B => "British chain (Benoit 1895 B)",
            LengthUnit::IndianFoot => "Indian foot",
            LengthUnit::IndianYard => "Indian yard",
            LengthUnit::GoldCoastFoot => "Gold Coast foot",
            LengthUnit::BritishFoot1936 => "British foot (1936)",
            LengthUnit::Link => "link",
            LengthUnit::BritishChainSears1922Truncated => "British chain (Sears 1922 truncated)",
            LengthUnit::NauticalMile => "nautical mile",
            LengthUnit::StatuteMile => "statute mile",
            LengthUnit::UsSurveyMile => "US survey mile",
        }
    }

    fn to_base(self, value: f64) -> f64 {
        value * self.metres()
    }
}

impl From<LengthUnit> for Unit<Length> {
    fn from(unit: LengthUnit) -> Self {
        Unit::Builtin(unit)
    }
}

const SEARS_1922_HELP: &str = "Uses Sear's 1922 British yard-metre ratio as given by Bomford as 39.370147 inches per metre.  Used in East Malaysian and older New Zealand mapping.";
const CLARKE_HELP: &str = "Assumes Clarke's 1865 ratio of 1 British foot = 0.3047972654 French legal metres applies to the international metre.   Used in older Australian, southern African & British West Indian mapping.";
const INDIAN_HELP: &str = "Indian Foot = 0.99999566 British feet (A.R.Clarke 1865).  British yard (= 3 British feet) taken to be J.S.Clark's 1865 value of 0.9144025 metres.";

static LENGTH_SEEDS: [UnitSeed<LengthUnit>; 23] = [
    UnitSeed::new(EPSG_MILLIMETRE, "millimetre", "", LengthUnit::Millimetre),
    UnitSeed::new(EPSG_CENTIMETRE, "centimetre", "", LengthUnit::Centimetre),
    UnitSeed::new(EPSG_METRE, "metre", "SI base unit for length.", LengthUnit::Metre),
    UnitSeed::new(EPSG_FOOT, "foot", "", LengthUnit::Foot),
    UnitSeed::new(EPSG_US_SURVEY_FOOT, "US survey foot", "Used in USA.", LengthUnit::UsSurveyFoot),
    UnitSeed::new(EPSG_CLARKES_FOOT, "Clarke's foot", CLARKE_HELP, LengthUnit::ClarkeFoot),
    UnitSeed::new(EPSG_GERMAN_LEGAL_METRE, "German legal metre", "Used in Namibia.", LengthUnit::GermanLegalMetre),
    UnitSeed::new(EPSG_KILOMETRE, "kilometre", "", LengthUnit::Kilometre),
    UnitSeed::new(
        EPSG_CLARKES_YARD,
        "Clarke's yard",
        "=3 Clarke's feet.  Assumes Clarke's 1865 ratio of 1 British foot = 0.3047972654 French legal metres applies to the international metre.   Used in older Australian, southern African & British West Indian mapping.",
        LengthUnit::ClarkeYard,
    ),
    UnitSeed::new(
        EPSG_CLARKES_LINK,
        "Clarke's link",
        "=1/100 Clarke's chain. Assumes Clarke's 1865 ratio of 1 British foot = 0.3047972654 French legal metres applies to the international metre.   Used in older Australian, southern African & British West Indian mapping.",
        LengthUnit::ClarkeLink,
    ),
    UnitSeed::new(EPSG_BRITISH_YARD_SEARS_1922, "British yard (Sears 1922)", SEARS_1922_HELP, LengthUnit::BritishYardSears1922),
    UnitSeed::new(EPSG_BRITISH_FOOT_SEARS_1922, "British foot (Sears 1922)", SEARS_1922_HELP, LengthUnit::BritishFootSears1922),
    UnitSeed::new(EPSG_BRITISH_CHAIN_SEARS_1922, "British chain (Sears 1922)", SEARS_1922_HELP, LengthUnit::BritishChainSears1922),
    UnitSeed::new(
        EPSG_BRITISH_CHAIN_BENOIT_1895_B,
        "British chain (Benoit 1895 B)",
        "Uses Benoit's 1895 British yard-metre ratio as given by Bomford as 39.370113 inches per metre.  Used in West Malaysian mapping.",
        LengthUnit::BritishChainBenoit1895B,
    ),
    UnitSeed::new(EPSG_INDIAN_FOOT, "Indian foot", INDIAN_HELP, LengthUnit::IndianFoot),
    UnitSeed::new(EPSG_INDIAN_YARD, "Indian yard", INDIAN_HELP, LengthUnit::IndianYard),
    UnitSeed::new(
        EPSG_GOLD_COAST_FOOT,
        "Gold Coast foot",
        "Used in Ghana and some adjacent parts of British west Africa prior to metrication, except for the metrication of projection defining parameters when British foot (Sears 1922) used.",
        LengthUnit::GoldCoastFoot,
    ),
    UnitSeed::new(
        EPSG_BRITISH_FOOT_1936,
        "British foot (1936)",
        "For the 1936 retriangulation OSGB defines the relationship of 10 feet of 1796 to the International metre through the logarithmic relationship (10^0.48401603 exactly). 1 ft = 0.3048007491…m. Also used for metric conversions in Ireland.",
        LengthUnit::BritishFoot1936,
    ),
    UnitSeed::new(EPSG_LINK, "link", "=1/100 international chain.", LengthUnit::Link),
    UnitSeed::new(
        EPSG_BRITISH_CHAIN_SEARS_1922_TRUNCATED,
        "British chain (Sears 1922 truncated)",
        "Uses Sear's 1922 British yard-metre ratio (UoM code 9040) truncated to 6 significant figures; this truncated ratio (0.914398, UoM code 9099) then converted to other imperial units. 1 chSe(T) = 22 ydSe(T). Used in metrication of Malaya RSO grid.",
        LengthUnit::BritishChainSears1922Truncated,
    ),
    UnitSeed::new(EPSG_NAUTICAL_MILE, "Nautical mile", "Exactly 1,852 metres.", LengthUnit::NauticalMile),
    UnitSeed::new(EPSG_STATUTE_MILE, "Statute mile", "5,280 feet.", LengthUnit::StatuteMile),
    UnitSeed::new(
        EPSG_US_SURVEY_MILE,
        "US survey mile",
        "Used in USA primarily for public lands cadastral work.",
        LengthUnit::UsSurveyMile,
    ),
];

impl Dimension for Length {
    type Builtin = LengthUnit;
    const NAME: &'static str = "length";
    const BASE: LengthUnit = LengthUnit::Metre;

    fn seeds() -> &'static [UnitSeed<LengthUnit>] {
        &LENGTH_SEEDS
    }

    fn registry(system: &UnitSystem) -> &UnitRegistry<Length> {
        system.length()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Quantity;

    #[test]
    fn test_seed_ids_are_unique() {
        let mut ids: Vec<&str> = LENGTH_SEEDS.iter().map(|s| s.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), LENGTH_SEEDS.len());
    }

    #[test]
    fn test_base_is_metre() {
        assert_eq!(LengthUnit::Metre.to_base(12.5), 12.5);
        assert_eq!(Length::BASE, LengthUnit::Metre);
    }

    #[test]
    fn test_survey_units() {
        // 1 US survey foot = 1200/3937 m
        let ft = Quantity::<Length>::new(3937.0, LengthUnit::UsSurveyFoot);
        assert!((ft.to_base().value() - 1200.0).abs() < 1e-9);

        let mi = Quantity::<Length>::new(0.0000745644, LengthUnit::UsSurveyMile);
        assert!((mi.to_base().value() - 0.12).abs() < 0.000001);

        let mi = Quantity::<Length>::new(0.0000745645, LengthUnit::StatuteMile);
        assert!((mi.to_base().value() - 0.12).abs() < 0.000001);
    }

    #[test]
    fn test_derived_imperial_units() {
        // Sears chain is 22 Sears yards, Indian yard is 3 Indian feet
        let chain = LengthUnit::BritishChainSears1922.to_base(1.0);
        let yard = LengthUnit::BritishYardSears1922.to_base(1.0);
        assert!((chain - 22.0 * yard).abs() < 1e-9);

        let yard = LengthUnit::IndianYard.to_base(1.0);
        let foot = LengthUnit::IndianFoot.to_base(1.0);
        assert!((yard - 3.0 * foot).abs() < 1e-12);
        assert!((foot - 0.3047995).abs() < 1e-7);
    }

    #[test]
    fn test_unit_names() {
        assert_eq!(LengthUnit::NauticalMile.name(), "nautical mile");
        assert_eq!(LengthUnit::UsSurveyMile.name(), "US survey mile");
        assert_eq!(LengthUnit::StatuteMile.name(), "statute mile");
        assert_eq!(LengthUnit::Kilometre.name(), "kilometre");
    }
}
