//! Per-dimension unit registry
//!
//! Maps opaque unit identifiers to unit definitions. Each registry starts
//! from its dimension's built-in seed table and can be extended at runtime;
//! registering an identifier that already exists replaces its definition.

use std::fmt;
use std::sync::Arc;
use indexmap::IndexMap;
use parking_lot::RwLock;
use serde::Serialize;
use geocoord_core::{Result, UnitId, UomError};
use crate::dimension::Dimension;
use crate::quantity::Quantity;
use crate::unit::{CustomUnit, Unit};

/// Builds quantities for a registered custom unit
pub trait UnitFactory<D: Dimension>: Send + Sync {
    fn make(&self, value: f64) -> Quantity<D>;
}

impl<D, F> UnitFactory<D> for F
where
    D: Dimension,
    F: Fn(f64) -> Quantity<D> + Send + Sync,
{
    fn make(&self, value: f64) -> Quantity<D> {
        self(value)
    }
}

/// How an identifier becomes a quantity
pub enum Resolution<D: Dimension> {
    Builtin(D::Builtin),
    Custom(Arc<dyn UnitFactory<D>>),
}

impl<D: Dimension> Clone for Resolution<D> {
    fn clone(&self) -> Self {
        match self {
            Resolution::Builtin(unit) => Resolution::Builtin(*unit),
            Resolution::Custom(factory) => Resolution::Custom(Arc::clone(factory)),
        }
    }
}

/// A registry entry
pub struct UnitDef<D: Dimension> {
    pub name: String,
    pub help: String,
    pub resolution: Resolution<D>,
}

impl<D: Dimension> UnitDef<D> {
    /// Construct a quantity of this unit
    pub fn make(&self, value: f64) -> Quantity<D> {
        match &self.resolution {
            Resolution::Builtin(unit) => Quantity::new(value, Unit::Builtin(*unit)),
            Resolution::Custom(factory) => factory.make(value),
        }
    }

    pub fn is_builtin(&self) -> bool {
        matches!(self.resolution, Resolution::Builtin(_))
    }
}

impl<D: Dimension> Clone for UnitDef<D> {
    fn clone(&self) -> Self {
        UnitDef {
            name: self.name.clone(),
            help: self.help.clone(),
            resolution: self.resolution.clone(),
        }
    }
}

impl<D: Dimension> fmt::Debug for UnitDef<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let resolution = match &self.resolution {
            Resolution::Builtin(unit) => format!("{:?}", unit),
            Resolution::Custom(_) => "custom".to_string(),
        };
        f.debug_struct("UnitDef")
            .field("name", &self.name)
            .field("help", &self.help)
            .field("resolution", &resolution)
            .finish()
    }
}

/// Listing row: identifier, display name and help text
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnitInfo {
    pub id: UnitId,
    pub name: String,
    pub help: String,
}

/// Display name and help text of one unit
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnitHelp {
    pub name: String,
    pub help: String,
}

/// Registry of the units of one dimension
pub struct UnitRegistry<D: Dimension> {
    units: RwLock<IndexMap<UnitId, UnitDef<D>>>,
}

impl<D: Dimension> UnitRegistry<D> {
    /// A registry holding the dimension's built-in units
    pub fn new() -> Self {
        let units = D::seeds()
            .iter()
            .map(|seed| {
                let def = UnitDef {
                    name: seed.name.to_string(),
                    help: seed.help.to_string(),
                    resolution: Resolution::Builtin(seed.unit),
                };
                (UnitId::from(seed.id), def)
            })
            .collect();
        UnitRegistry { units: RwLock::new(units) }
    }

    /// A registry with no units at all
    pub fn empty() -> Self {
        UnitRegistry { units: RwLock::new(IndexMap::new()) }
    }

    /// Get the definition for an identifier (exact match only)
    pub fn lookup(&self, id: &str) -> Result<UnitDef<D>> {
        match self.units.read().get(id) {
            Some(def) => Ok(def.clone()),
            None => {
                tracing::trace!(dimension = D::NAME, id, "unit lookup miss");
                Err(UomError::unknown_unit(id))
            }
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.units.read().contains_key(id)
    }

    /// Register a custom unit, replacing any existing definition.
    ///
    /// The factory is not checked for dimensional consistency. The change is
    /// visible to every later lookup; quantities already built keep the unit
    /// they were built with. Custom units made by one registration compare
    /// equal to each other, whichever `CustomUnit` the factory builds.
    ///
    /// A factory for a non-linear unit must pass the magnitude through
    /// unchanged; conversion into it then uses the unit's own inverse.
    pub fn register(
        &self,
        id: impl Into<UnitId>,
        name: impl Into<String>,
        factory: impl UnitFactory<D> + 'static,
        help: impl Into<String>,
    ) {
        let id = id.into();
        let registration = Arc::new(id.clone());
        let tagged = move |value: f64| factory.make(value).registered_as(&registration);
        self.insert(id, UnitDef {
            name: name.into(),
            help: help.into(),
            resolution: Resolution::Custom(Arc::new(tagged)),
        });
    }

    /// Register a unit worth `factor` base units
    pub fn register_linear(
        &self,
        id: impl Into<UnitId>,
        name: impl Into<String>,
        factor: f64,
        help: impl Into<String>,
    ) {
        let name = name.into();
        let unit = Unit::custom(CustomUnit::linear(name.clone(), factor));
        self.register(id, name, move |value| Quantity::new(value, unit.clone()), help);
    }

    fn insert(&self, id: UnitId, def: UnitDef<D>) {
        let name = def.name.clone();
        let replaced = self.units.write().insert(id.clone(), def);
        match replaced {
            Some(old) => tracing::debug!(
                dimension = D::NAME,
                id = %id,
                name = %name,
                replaced = %old.name,
                "unit definition overwritten"
            ),
            None => tracing::debug!(dimension = D::NAME, id = %id, name = %name, "unit registered"),
        }
    }

    /// Every unit in listing order: built-ins first, then registrations
    pub fn list_all(&self) -> Vec<UnitInfo> {
        self.units
            .read()
            .iter()
            .map(|(id, def)| UnitInfo {
                id: id.clone(),
                name: def.name.clone(),
                help: def.help.clone(),
            })
            .collect()
    }

    /// Identifier to display name, in listing order
    pub fn supported_unit_ids(&self) -> IndexMap<UnitId, String> {
        self.units
            .read()
            .iter()
            .map(|(id, def)| (id.clone(), def.name.clone()))
            .collect()
    }

    /// Identifier to display name and help text, in listing order
    pub fn supported_unit_ids_with_help(&self) -> IndexMap<UnitId, UnitHelp> {
        self.units
            .read()
            .iter()
            .map(|(id, def)| {
                (id.clone(), UnitHelp { name: def.name.clone(), help: def.help.clone() })
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.units.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.read().is_empty()
    }
}

impl<D: Dimension> Default for UnitRegistry<D> {
    fn default() -> Self {
        Self::new()
    }
}
