//! Dimension-erased quantities
//!
//! Parameter records name their unit by identifier only, so the dimension of
//! a value is known once its identifier has been resolved. `AnyQuantity`
//! carries the result until the caller asks for the type it expects.

use std::borrow::Cow;
use std::fmt;
use geocoord_core::{Result, UomError};
use crate::angle::Angle;
use crate::length::Length;
use crate::quantity::Quantity;
use crate::rate::Rate;
use crate::scale::Scale;
use crate::time::Time;

/// What kind of quantity an `AnyQuantity` holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DimensionKind {
    Length,
    Scale,
    Angle,
    Time,
    LengthRate,
    ScaleRate,
    AngleRate,
}

impl DimensionKind {
    pub fn name(self) -> &'static str {
        match self {
            DimensionKind::Length => "length",
            DimensionKind::Scale => "scale",
            DimensionKind::Angle => "angle",
            DimensionKind::Time => "time",
            DimensionKind::LengthRate => "length rate",
            DimensionKind::ScaleRate => "scale rate",
            DimensionKind::AngleRate => "angle rate",
        }
    }
}

impl fmt::Display for DimensionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A quantity of any supported dimension
#[derive(Debug, Clone, PartialEq)]
pub enum AnyQuantity {
    Length(Quantity<Length>),
    Scale(Quantity<Scale>),
    Angle(Quantity<Angle>),
    Time(Quantity<Time>),
    LengthRate(Rate<Length>),
    ScaleRate(Rate<Scale>),
    AngleRate(Rate<Angle>),
}

macro_rules! accessors {
    ($($variant:ident, $ty:ty, $as_fn:ident, $expect_fn:ident;)*) => {
        impl AnyQuantity {
            $(
                pub fn $as_fn(&self) -> Option<&$ty> {
                    match self {
                        AnyQuantity::$variant(q) => Some(q),
                        _ => None,
                    }
                }

                /// Like the `as_` accessor, naming `name` in the mismatch error
                pub fn $expect_fn(&self, name: &str) -> Result<&$ty> {
                    self.$as_fn().ok_or_else(|| {
                        UomError::dimension_mismatch(
                            name,
                            DimensionKind::$variant.name(),
                            self.dimension().name(),
                        )
                    })
                }
            )*
        }

        $(
            impl From<$ty> for AnyQuantity {
                fn from(q: $ty) -> Self {
                    AnyQuantity::$variant(q)
                }
            }
        )*
    };
}

accessors! {
    Length, Quantity<Length>, as_length, expect_length;
    Scale, Quantity<Scale>, as_scale, expect_scale;
    Angle, Quantity<Angle>, as_angle, expect_angle;
    Time, Quantity<Time>, as_time, expect_time;
    LengthRate, Rate<Length>, as_length_rate, expect_length_rate;
    ScaleRate, Rate<Scale>, as_scale_rate, expect_scale_rate;
    AngleRate, Rate<Angle>, as_angle_rate, expect_angle_rate;
}

impl AnyQuantity {
    pub fn dimension(&self) -> DimensionKind {
        match self {
            AnyQuantity::Length(_) => DimensionKind::Length,
            AnyQuantity::Scale(_) => DimensionKind::Scale,
            AnyQuantity::Angle(_) => DimensionKind::Angle,
            AnyQuantity::Time(_) => DimensionKind::Time,
            AnyQuantity::LengthRate(_) => DimensionKind::LengthRate,
            AnyQuantity::ScaleRate(_) => DimensionKind::ScaleRate,
            AnyQuantity::AngleRate(_) => DimensionKind::AngleRate,
        }
    }

    pub fn value(&self) -> f64 {
        match self {
            AnyQuantity::Length(q) => q.value(),
            AnyQuantity::Scale(q) => q.value(),
            AnyQuantity::Angle(q) => q.value(),
            AnyQuantity::Time(q) => q.value(),
            AnyQuantity::LengthRate(r) => r.value(),
            AnyQuantity::ScaleRate(r) => r.value(),
            AnyQuantity::AngleRate(r) => r.value(),
        }
    }

    pub fn unit_name(&self) -> Cow<'_, str> {
        match self {
            AnyQuantity::Length(q) => Cow::Borrowed(q.unit_name()),
            AnyQuantity::Scale(q) => Cow::Borrowed(q.unit_name()),
            AnyQuantity::Angle(q) => Cow::Borrowed(q.unit_name()),
            AnyQuantity::Time(q) => Cow::Borrowed(q.unit_name()),
            AnyQuantity::LengthRate(r) => Cow::Owned(r.unit_name()),
            AnyQuantity::ScaleRate(r) => Cow::Owned(r.unit_name()),
            AnyQuantity::AngleRate(r) => Cow::Owned(r.unit_name()),
        }
    }
}

impl fmt::Display for AnyQuantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value(), self.unit_name())
    }
}
