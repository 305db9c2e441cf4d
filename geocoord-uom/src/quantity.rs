//! Quantity type - a magnitude tagged with a unit of its dimension

use std::fmt;
use std::sync::Arc;
use geocoord_core::UnitId;
use crate::dimension::Dimension;
use crate::unit::Unit;

/// An immutable measurement: a 64-bit magnitude in a unit of dimension `D`.
///
/// Every operation returns a new quantity. Quantities of different
/// dimensions are different types and cannot be combined.
pub struct Quantity<D: Dimension> {
    value: f64,
    unit: Unit<D>,
}

impl<D: Dimension> Quantity<D> {
    /// Create a new quantity
    pub fn new(value: f64, unit: impl Into<Unit<D>>) -> Self {
        Quantity { value, unit: unit.into() }
    }

    /// Create a quantity in the dimension's base unit
    pub fn in_base(value: f64) -> Self {
        Quantity { value, unit: Unit::base() }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn unit(&self) -> &Unit<D> {
        &self.unit
    }

    pub fn unit_name(&self) -> &str {
        self.unit.name()
    }

    /// The same quantity, its custom unit tagged with a registration
    pub(crate) fn registered_as(self, registration: &Arc<UnitId>) -> Self {
        Quantity { value: self.value, unit: self.unit.registered(registration) }
    }

    /// Convert to the dimension's base unit
    pub fn to_base(&self) -> Quantity<D> {
        Quantity::in_base(self.unit.to_base(self.value))
    }

    /// Re-express in another unit of the same dimension
    pub fn in_unit(&self, target: &Unit<D>) -> Quantity<D> {
        if self.unit == *target {
            return self.clone();
        }
        let base = self.unit.to_base(self.value);
        Quantity { value: target.from_base(base), unit: target.clone() }
    }

    /// Add two quantities; the result is in this quantity's unit.
    ///
    /// Same-unit operands are summed directly, without a round trip through
    /// the base unit.
    pub fn add(&self, other: &Quantity<D>) -> Quantity<D> {
        if self.unit == other.unit {
            return Quantity { value: self.value + other.value, unit: self.unit.clone() };
        }
        let sum = self.unit.to_base(self.value) + other.unit.to_base(other.value);
        Quantity { value: self.unit.from_base(sum), unit: self.unit.clone() }
    }

    /// Subtract `other`; the result is in this quantity's unit
    pub fn subtract(&self, other: &Quantity<D>) -> Quantity<D> {
        if self.unit == other.unit {
            return Quantity { value: self.value - other.value, unit: self.unit.clone() };
        }
        let difference = self.unit.to_base(self.value) - other.unit.to_base(other.value);
        Quantity { value: self.unit.from_base(difference), unit: self.unit.clone() }
    }

    pub fn multiply(&self, multiplicand: f64) -> Quantity<D> {
        Quantity { value: self.value * multiplicand, unit: self.unit.clone() }
    }

    /// Divide the magnitude by a scalar.
    ///
    /// Division by zero is not trapped: the magnitude becomes infinite (or
    /// NaN for `0 / 0`) following IEEE-754.
    pub fn divide(&self, divisor: f64) -> Quantity<D> {
        Quantity { value: self.value / divisor, unit: self.unit.clone() }
    }
}

impl<D: Dimension> Clone for Quantity<D> {
    fn clone(&self) -> Self {
        Quantity { value: self.value, unit: self.unit.clone() }
    }
}

impl<D: Dimension> fmt::Debug for Quantity<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Quantity")
            .field("dimension", &D::NAME)
            .field("value", &self.value)
            .field("unit", &self.unit)
            .finish()
    }
}

impl<D: Dimension> fmt::Display for Quantity<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.unit.name())
    }
}

impl<D: Dimension> PartialEq for Quantity<D> {
    fn eq(&self, other: &Self) -> bool {
        // Compare base values
        self.unit.to_base(self.value) == other.unit.to_base(other.value)
    }
}
