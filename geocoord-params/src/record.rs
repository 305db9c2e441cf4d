//! Raw parameter records, as stored in the parameter data files

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use geocoord_core::Result;
use geocoord_uom::UnitSystem;
use crate::resolved::ResolvedParams;

/// One parameter value and the identifier of its unit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParamRecord {
    pub value: f64,
    pub uom: String,
}

impl ParamRecord {
    pub fn new(value: f64, uom: impl Into<String>) -> Self {
        ParamRecord { value, uom: uom.into() }
    }
}

/// The parameters of one coordinate operation, in file order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParamSet {
    params: IndexMap<String, ParamRecord>,
}

impl ParamSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a parameter set from its JSON object form
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn insert(&mut self, name: impl Into<String>, record: ParamRecord) {
        self.params.insert(name.into(), record);
    }

    pub fn get(&self, name: &str) -> Option<&ParamRecord> {
        self.params.get(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.params.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamRecord)> {
        self.params.iter().map(|(name, record)| (name.as_str(), record))
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Resolve every record against `system`.
    ///
    /// Stops at the first record whose unit identifier no dimension knows.
    pub fn resolve(&self, system: &UnitSystem) -> Result<ResolvedParams> {
        let mut resolved = ResolvedParams::default();
        for (name, record) in &self.params {
            let quantity = system.make_any(record.value, &record.uom)?;
            resolved.insert(name.clone(), quantity);
        }
        Ok(resolved)
    }
}

impl FromIterator<(String, ParamRecord)> for ParamSet {
    fn from_iter<I: IntoIterator<Item = (String, ParamRecord)>>(iter: I) -> Self {
        ParamSet { params: iter.into_iter().collect() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geocoord_core::UomError;
    use geocoord_uom::{length, DimensionKind};

    const HELMERT: &str = r#"{
        "xAxisTranslation": { "value": 1.9, "uom": "urn:ogc:def:uom:EPSG::1033" },
        "xAxisRotation": { "value": 0.0, "uom": "urn:ogc:def:uom:EPSG::1031" },
        "scaleDifference": { "value": 0.0, "uom": "urn:ogc:def:uom:EPSG::1028" },
        "rateOfChangeOfXAxisRotation": { "value": 0.32, "uom": "urn:ogc:def:uom:EPSG::1032" },
        "parameterReferenceEpoch": { "value": 1989.0, "uom": "urn:ogc:def:uom:EPSG::1029" }
    }"#;

    #[test]
    fn test_parse_keeps_order() {
        let set = ParamSet::from_json(HELMERT).unwrap();
        let names: Vec<&str> = set.names().collect();
        assert_eq!(
            names,
            [
                "xAxisTranslation",
                "xAxisRotation",
                "scaleDifference",
                "rateOfChangeOfXAxisRotation",
                "parameterReferenceEpoch"
            ]
        );
        assert_eq!(set.get("xAxisTranslation"), Some(&ParamRecord::new(1.9, "urn:ogc:def:uom:EPSG::1033")));
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert!(ParamSet::from_json(r#"{ "x": { "value": "one", "uom": "u" } }"#).is_err());
        assert!(ParamSet::from_json(r#"{ "x": { "value": 1.0 } }"#).is_err());
        assert!(ParamSet::from_json("[]").is_err());
    }

    #[test]
    fn test_resolve() {
        let system = UnitSystem::new();
        let resolved = ParamSet::from_json(HELMERT).unwrap().resolve(&system).unwrap();

        assert_eq!(resolved.len(), 5);
        let kinds: Vec<DimensionKind> = resolved.iter().map(|(_, q)| q.dimension()).collect();
        assert_eq!(
            kinds,
            [
                DimensionKind::Length,
                DimensionKind::Angle,
                DimensionKind::Scale,
                DimensionKind::AngleRate,
                DimensionKind::Time
            ]
        );
        let tx = resolved.length("xAxisTranslation").unwrap();
        assert!((tx.to_base().value() - 0.019).abs() < 1e-15);
    }

    #[test]
    fn test_resolve_unknown_unit() {
        let mut set = ParamSet::new();
        set.insert("falseEasting", ParamRecord::new(500_000.0, length::EPSG_METRE));
        set.insert("falseNorthing", ParamRecord::new(0.0, "custom:unregistered"));

        let system = UnitSystem::new();
        assert_eq!(
            set.resolve(&system).unwrap_err(),
            UomError::unknown_unit("custom:unregistered")
        );

        system.register_linear::<geocoord_uom::Length>("custom:unregistered", "late unit", 1.0, "");
        assert!(set.resolve(&system).is_ok());
    }

    #[test]
    fn test_serialize_as_object() {
        let set: ParamSet = vec![("k".to_string(), ParamRecord::new(0.9996, "urn:ogc:def:uom:EPSG::9201"))]
            .into_iter()
            .collect();
        let json = serde_json::to_string(&set).unwrap();
        assert_eq!(json, r#"{"k":{"value":0.9996,"uom":"urn:ogc:def:uom:EPSG::9201"}}"#);
    }
}
