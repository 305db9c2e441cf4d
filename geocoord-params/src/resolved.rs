//! Resolved parameter sets: every record turned into a typed quantity

use indexmap::IndexMap;
use geocoord_core::{Result, UomError};
use geocoord_uom::{Angle, AnyQuantity, Length, Quantity, Rate, Scale, Time};

/// Parameter name to quantity, in the order of the source record set
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResolvedParams {
    params: IndexMap<String, AnyQuantity>,
}

impl ResolvedParams {
    pub(crate) fn insert(&mut self, name: String, quantity: AnyQuantity) {
        self.params.insert(name, quantity);
    }

    /// The quantity named `name`, of whatever dimension
    pub fn get(&self, name: &str) -> Result<&AnyQuantity> {
        self.params
            .get(name)
            .ok_or_else(|| UomError::missing_parameter(name))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.params.contains_key(name)
    }

    pub fn length(&self, name: &str) -> Result<&Quantity<Length>> {
        self.get(name)?.expect_length(name)
    }

    pub fn scale(&self, name: &str) -> Result<&Quantity<Scale>> {
        self.get(name)?.expect_scale(name)
    }

    pub fn angle(&self, name: &str) -> Result<&Quantity<Angle>> {
        self.get(name)?.expect_angle(name)
    }

    pub fn time(&self, name: &str) -> Result<&Quantity<Time>> {
        self.get(name)?.expect_time(name)
    }

    pub fn length_rate(&self, name: &str) -> Result<&Rate<Length>> {
        self.get(name)?.expect_length_rate(name)
    }

    pub fn scale_rate(&self, name: &str) -> Result<&Rate<Scale>> {
        self.get(name)?.expect_scale_rate(name)
    }

    pub fn angle_rate(&self, name: &str) -> Result<&Rate<Angle>> {
        self.get(name)?.expect_angle_rate(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AnyQuantity)> {
        self.params.iter().map(|(name, q)| (name.as_str(), q))
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }
}
