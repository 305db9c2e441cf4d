//! Unit system - one registry per dimension behind a single handle
//!
//! Every lookup, registration and conversion goes through a `UnitSystem`
//! passed by reference. Two systems never share registrations.

use indexmap::IndexMap;
use geocoord_core::{Result, UnitId, UomError};
use crate::angle::Angle;
use crate::any::AnyQuantity;
use crate::dimension::Dimension;
use crate::length::Length;
use crate::quantity::Quantity;
use crate::rate::{self, RATE_SEEDS};
use crate::registry::{UnitFactory, UnitHelp, UnitRegistry};
use crate::scale::Scale;
use crate::time::Time;

/// The registries of every supported dimension
pub struct UnitSystem {
    length: UnitRegistry<Length>,
    scale: UnitRegistry<Scale>,
    angle: UnitRegistry<Angle>,
    time: UnitRegistry<Time>,
}

impl UnitSystem {
    /// A system seeded with every built-in unit
    pub fn new() -> Self {
        UnitSystem {
            length: UnitRegistry::new(),
            scale: UnitRegistry::new(),
            angle: UnitRegistry::new(),
            time: UnitRegistry::new(),
        }
    }

    /// A system with empty registries
    pub fn empty() -> Self {
        UnitSystem {
            length: UnitRegistry::empty(),
            scale: UnitRegistry::empty(),
            angle: UnitRegistry::empty(),
            time: UnitRegistry::empty(),
        }
    }

    pub fn length(&self) -> &UnitRegistry<Length> {
        &self.length
    }

    pub fn scale(&self) -> &UnitRegistry<Scale> {
        &self.scale
    }

    pub fn angle(&self) -> &UnitRegistry<Angle> {
        &self.angle
    }

    pub fn time(&self) -> &UnitRegistry<Time> {
        &self.time
    }

    /// The registry of dimension `D`
    pub fn registry<D: Dimension>(&self) -> &UnitRegistry<D> {
        D::registry(self)
    }

    pub fn make_unit<D: Dimension>(&self, value: f64, id: &str) -> Result<Quantity<D>> {
        self.registry::<D>().make_unit(value, id)
    }

    pub fn convert<D: Dimension>(&self, quantity: &Quantity<D>, target: &str) -> Result<Quantity<D>> {
        self.registry::<D>().convert(quantity, target)
    }

    pub fn register_custom_unit<D: Dimension>(
        &self,
        id: impl Into<UnitId>,
        name: impl Into<String>,
        factory: impl UnitFactory<D> + 'static,
        help: impl Into<String>,
    ) {
        self.registry::<D>().register(id, name, factory, help);
    }

    pub fn register_linear<D: Dimension>(
        &self,
        id: impl Into<UnitId>,
        name: impl Into<String>,
        factor: f64,
        help: impl Into<String>,
    ) {
        self.registry::<D>().register_linear(id, name, factor, help);
    }

    pub fn supported_unit_ids<D: Dimension>(&self) -> IndexMap<UnitId, String> {
        self.registry::<D>().supported_unit_ids()
    }

    pub fn supported_unit_ids_with_help<D: Dimension>(&self) -> IndexMap<UnitId, UnitHelp> {
        self.registry::<D>().supported_unit_ids_with_help()
    }

    /// Built-in rate identifiers and their display names
    pub fn supported_rate_ids() -> IndexMap<UnitId, String> {
        RATE_SEEDS
            .iter()
            .map(|seed| (UnitId::from(seed.id), seed.name.to_string()))
            .collect()
    }

    /// Build a quantity from an identifier of any dimension.
    ///
    /// Registries are searched in the order length, angle, scale, time; the
    /// rate table comes last. The first registry holding `id` wins.
    pub fn make_any(&self, value: f64, id: &str) -> Result<AnyQuantity> {
        if self.length.contains(id) {
            return self.length.make_unit(value, id).map(AnyQuantity::Length);
        }
        if self.angle.contains(id) {
            return self.angle.make_unit(value, id).map(AnyQuantity::Angle);
        }
        if self.scale.contains(id) {
            return self.scale.make_unit(value, id).map(AnyQuantity::Scale);
        }
        if self.time.contains(id) {
            return self.time.make_unit(value, id).map(AnyQuantity::Time);
        }
        match rate::find_rate(id) {
            Some(seed) => seed.make(self, value),
            None => {
                tracing::trace!(id, "no dimension knows unit");
                Err(UomError::unknown_unit(id))
            }
        }
    }
}

impl Default for UnitSystem {
    fn default() -> Self {
        Self::new()
    }
}
