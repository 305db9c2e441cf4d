//! Geocoord UOM - typed units of measure for geodetic parameters
//!
//! Quantities are generic over their dimension, so a length can only be
//! combined with another length. Units are resolved from opaque identifiers
//! (`urn:ogc:def:uom:EPSG::9001`) through per-dimension registries that start
//! with the built-in EPSG units and accept custom units at runtime.
//!
//! Dimensions:
//! - Length (metre, foot, US survey foot, nautical mile, ...)
//! - Scale (unity, parts per million, coefficient, ...)
//! - Angle (radian, degree, arc-second, sexagesimal DMS, ...)
//! - Time (year, second)
//! - Rates of the first three per year

mod dimension;
mod unit;
mod quantity;
mod registry;
mod convert;
mod system;
mod any;
pub mod length;
pub mod scale;
pub mod angle;
pub mod time;
pub mod rate;

pub use dimension::{BuiltinUnit, Dimension, UnitSeed};
pub use unit::{CustomUnit, Unit};
pub use quantity::Quantity;
pub use registry::{Resolution, UnitDef, UnitFactory, UnitHelp, UnitInfo, UnitRegistry};
pub use system::UnitSystem;
pub use any::{AnyQuantity, DimensionKind};
pub use length::{Length, LengthUnit};
pub use scale::{Scale, ScaleUnit};
pub use angle::{Angle, AngleUnit};
pub use time::{Time, TimeUnit};
pub use rate::Rate;

pub use geocoord_core::{Result, UnitId, UomError};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{
        AnyQuantity, Angle, Length, Quantity, Rate, Scale, Time, Unit, UnitSystem,
    };
    pub use geocoord_core::prelude::*;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_seed_resolves() {
        let system = UnitSystem::new();
        for id in system.supported_unit_ids::<Length>().keys() {
            assert_eq!(system.make_any(1.0, id.as_str()).unwrap().dimension(), DimensionKind::Length);
        }
        for id in system.supported_unit_ids::<Angle>().keys() {
            assert_eq!(system.make_any(1.0, id.as_str()).unwrap().dimension(), DimensionKind::Angle);
        }
        for id in system.supported_unit_ids::<Scale>().keys() {
            assert_eq!(system.make_any(1.0, id.as_str()).unwrap().dimension(), DimensionKind::Scale);
        }
        for id in system.supported_unit_ids::<Time>().keys() {
            assert_eq!(system.make_any(1.0, id.as_str()).unwrap().dimension(), DimensionKind::Time);
        }
    }

    #[test]
    fn test_identifiers_are_unique_across_dimensions() {
        let system = UnitSystem::new();
        let mut seen = std::collections::HashSet::new();
        let all = system
            .supported_unit_ids::<Length>()
            .into_keys()
            .chain(system.supported_unit_ids::<Scale>().into_keys())
            .chain(system.supported_unit_ids::<Angle>().into_keys())
            .chain(system.supported_unit_ids::<Time>().into_keys())
            .chain(UnitSystem::supported_rate_ids().into_keys());
        for id in all {
            assert!(seen.insert(id.clone()), "duplicate identifier {}", id);
        }
        assert_eq!(seen.len(), 23 + 4 + 7 + 2 + 5);
    }

    #[test]
    fn test_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<UnitSystem>();
        assert_send_sync::<Quantity<Length>>();
        assert_send_sync::<AnyQuantity>();
    }
}
