//! Conversion engine: identifier-driven construction and conversion
//!
//! The target's conversion ratio is derived on every call by building one
//! unit of the target and taking it to base. Nothing is cached, so a
//! re-registered identifier affects the next conversion but never a
//! quantity that already exists.

use geocoord_core::Result;
use crate::dimension::{BuiltinUnit, Dimension};
use crate::quantity::Quantity;
use crate::registry::{Resolution, UnitDef, UnitRegistry};
use crate::unit::Unit;

impl<D: Dimension> UnitRegistry<D> {
    /// Build a quantity of `value` in the unit registered under `id`
    pub fn make_unit(&self, value: f64, id: &str) -> Result<Quantity<D>> {
        Ok(self.lookup(id)?.make(value))
    }

    /// Re-express `quantity` in the unit registered under `target`
    pub fn convert(&self, quantity: &Quantity<D>, target: &str) -> Result<Quantity<D>> {
        let def = self.lookup(target)?;
        let base = quantity.to_base().value();
        Ok(convert_base(&def, base))
    }
}

fn convert_base<D: Dimension>(def: &UnitDef<D>, base: f64) -> Quantity<D> {
    match &def.resolution {
        // built-in units know their own inverse; sexagesimal DMS is not a ratio
        Resolution::Builtin(unit) => Quantity::new(unit.from_base(base), Unit::Builtin(*unit)),
        Resolution::Custom(factory) => {
            let one = factory.make(1.0);
            if one.unit().is_linear() {
                factory.make(base / one.to_base().value())
            } else {
                Quantity::new(one.unit().from_base(base), one.unit().clone())
            }
        }
    }
}
