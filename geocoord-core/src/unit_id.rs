//! Opaque unit-of-measure identifiers

use std::borrow::Borrow;
use std::fmt;
use std::sync::Arc;
use serde::{Deserialize, Serialize};

/// Identifier of a unit-of-measure definition, e.g. `urn:ogc:def:uom:EPSG::9001`.
///
/// The string is never parsed: two identifiers are equal only if they are
/// byte-for-byte identical. Cloning is cheap.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UnitId(Arc<str>);

impl UnitId {
    pub fn new(id: impl AsRef<str>) -> Self {
        UnitId(Arc::from(id.as_ref()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for UnitId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for UnitId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for UnitId {
    fn from(id: &str) -> Self {
        UnitId::new(id)
    }
}

impl From<String> for UnitId {
    fn from(id: String) -> Self {
        UnitId(Arc::from(id))
    }
}

impl fmt::Display for UnitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
