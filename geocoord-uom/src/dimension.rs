//! Physical dimensions and their built-in units
//!
//! A dimension is a zero-sized marker type (`Length`, `Scale`, ...). It names
//! the enum of units built into the dimension, its base unit, and the seed
//! table its registry starts from. Quantities are generic over the marker, so
//! adding a length to a scale factor does not compile.

use std::fmt::Debug;
use std::hash::Hash;
use crate::{UnitRegistry, UnitSystem};

/// A closed physical dimension with one base unit and one registry
pub trait Dimension: Copy + Debug + Send + Sync + 'static {
    /// The units built into this dimension
    type Builtin: BuiltinUnit;

    /// Lower-case dimension name ("length", "scale", ...)
    const NAME: &'static str;

    /// The canonical unit all conversions route through
    const BASE: Self::Builtin;

    /// Built-in registry entries, in listing order
    fn seeds() -> &'static [UnitSeed<Self::Builtin>];

    /// This dimension's registry within a unit system
    fn registry(system: &UnitSystem) -> &UnitRegistry<Self>;
}

/// A unit variant known at compile time
pub trait BuiltinUnit: Copy + Eq + Hash + Debug + Send + Sync + 'static {
    /// Singular unit name, e.g. "kilometre"
    fn name(self) -> &'static str;

    /// Express `value` of this unit in the dimension's base unit.
    ///
    /// This is the only place unit-specific conversion logic lives.
    fn to_base(self, value: f64) -> f64;

    /// Express a base-unit magnitude in this unit.
    ///
    /// Linear units divide by their conversion ratio, recomputed from
    /// `to_base` on every call. Non-linear units override this.
    fn from_base(self, base: f64) -> f64 {
        base / self.to_base(1.0)
    }

    /// False for units that override `from_base` with a formula
    fn is_linear(self) -> bool {
        true
    }
}

/// One built-in row of a dimension's registry
#[derive(Debug, Clone, Copy)]
pub struct UnitSeed<U> {
    pub id: &'static str,
    pub name: &'static str,
    pub help: &'static str,
    pub unit: U,
}

impl<U> UnitSeed<U> {
    pub const fn new(id: &'static str, name: &'static str, help: &'static str, unit: U) -> Self {
        UnitSeed { id, name, help, unit }
    }
}
