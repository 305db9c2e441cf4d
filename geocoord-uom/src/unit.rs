//! Unit tags: a built-in variant or a runtime-defined custom unit

use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;
use geocoord_core::UnitId;
use crate::dimension::{BuiltinUnit, Dimension};

/// The unit a quantity is expressed in
pub enum Unit<D: Dimension> {
    /// A unit built into the dimension
    Builtin(D::Builtin),
    /// A unit defined at runtime
    Custom(Arc<CustomUnit<D>>),
}

impl<D: Dimension> Unit<D> {
    /// The dimension's base unit
    pub fn base() -> Self {
        Unit::Builtin(D::BASE)
    }

    /// Wrap a custom definition
    pub fn custom(unit: CustomUnit<D>) -> Self {
        Unit::Custom(Arc::new(unit))
    }

    pub fn name(&self) -> &str {
        match self {
            Unit::Builtin(unit) => unit.name(),
            Unit::Custom(unit) => &unit.name,
        }
    }

    /// Express `value` of this unit in the base unit
    pub fn to_base(&self, value: f64) -> f64 {
        match self {
            Unit::Builtin(unit) => unit.to_base(value),
            Unit::Custom(unit) => (unit.to_base)(value),
        }
    }

    /// Express a base-unit magnitude in this unit
    pub fn from_base(&self, base: f64) -> f64 {
        match self {
            Unit::Builtin(unit) => unit.from_base(base),
            Unit::Custom(unit) => match &unit.from_base {
                Some(from_base) => from_base(base),
                None => base / self.ratio(),
            },
        }
    }

    /// Whether conversion out of base is a division by the ratio
    pub fn is_linear(&self) -> bool {
        match self {
            Unit::Builtin(unit) => unit.is_linear(),
            Unit::Custom(unit) => unit.from_base.is_none(),
        }
    }

    /// Tag a custom unit with the registration that produced it
    pub(crate) fn registered(&self, registration: &Arc<UnitId>) -> Self {
        match self {
            Unit::Custom(unit) if !unit.is_registered_as(registration) => {
                Unit::Custom(Arc::new(CustomUnit {
                    name: unit.name.clone(),
                    to_base: Arc::clone(&unit.to_base),
                    from_base: unit.from_base.clone(),
                    registration: Some(Arc::clone(registration)),
                    _dimension: PhantomData,
                }))
            }
            _ => self.clone(),
        }
    }

    /// Base-unit magnitude of one of this unit
    pub fn ratio(&self) -> f64 {
        self.to_base(1.0)
    }

    pub fn is_base(&self) -> bool {
        matches!(self, Unit::Builtin(unit) if *unit == D::BASE)
    }
}

impl<D: Dimension> Clone for Unit<D> {
    fn clone(&self) -> Self {
        match self {
            Unit::Builtin(unit) => Unit::Builtin(*unit),
            Unit::Custom(unit) => Unit::Custom(Arc::clone(unit)),
        }
    }
}

/// Built-in units compare by variant. Custom units compare by definition:
/// the same `CustomUnit`, or quantities made by the same registration.
impl<D: Dimension> PartialEq for Unit<D> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Unit::Builtin(a), Unit::Builtin(b)) => a == b,
            (Unit::Custom(a), Unit::Custom(b)) => {
                Arc::ptr_eq(a, b)
                    || matches!(
                        (&a.registration, &b.registration),
                        (Some(x), Some(y)) if Arc::ptr_eq(x, y)
                    )
            }
            _ => false,
        }
    }
}

impl<D: Dimension> fmt::Debug for Unit<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Unit::Builtin(unit) => f.debug_tuple("Builtin").field(unit).finish(),
            Unit::Custom(unit) => f.debug_tuple("Custom").field(&unit.name).finish(),
        }
    }
}

impl<D: Dimension> fmt::Display for Unit<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

type Transform = Arc<dyn Fn(f64) -> f64 + Send + Sync>;

/// A unit defined at runtime by its transform into the base unit.
///
/// Linear units are re-expressed out of base by dividing by their ratio;
/// any other unit carries its own inverse.
pub struct CustomUnit<D> {
    name: String,
    to_base: Transform,
    from_base: Option<Transform>,
    registration: Option<Arc<UnitId>>,
    _dimension: PhantomData<fn() -> D>,
}

impl<D: Dimension> CustomUnit<D> {
    /// A unit worth `factor` base units
    pub fn linear(name: impl Into<String>, factor: f64) -> Self {
        CustomUnit {
            name: name.into(),
            to_base: Arc::new(move |value: f64| value * factor),
            from_base: None,
            registration: None,
            _dimension: PhantomData,
        }
    }

    /// A unit with an arbitrary transform and its inverse
    pub fn new(
        name: impl Into<String>,
        to_base: impl Fn(f64) -> f64 + Send + Sync + 'static,
        from_base: impl Fn(f64) -> f64 + Send + Sync + 'static,
    ) -> Self {
        CustomUnit {
            name: name.into(),
            to_base: Arc::new(to_base),
            from_base: Some(Arc::new(from_base)),
            registration: None,
            _dimension: PhantomData,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Identifier of the registration this unit was made by, if any
    pub fn registered_id(&self) -> Option<&UnitId> {
        self.registration.as_deref()
    }

    fn is_registered_as(&self, registration: &Arc<UnitId>) -> bool {
        self.registration.as_ref().map_or(false, |r| Arc::ptr_eq(r, registration))
    }
}
