//! Geocoord Core - Fundamental types
//!
//! This crate provides the types shared by every geocoord crate:
//! - `UnitId`: opaque unit-of-measure identifiers
//! - `UomError`: structured errors with machine-readable codes

mod error;
mod unit_id;

pub use error::{codes, ErrorReport, Result, UomError};
pub use unit_id::UnitId;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{Result, UnitId, UomError};
    pub use crate::error::codes;
}

#[cfg(test)]
mod tests {
    use super::*;

    mod unit_id_tests {
        use super::*;
        use std::collections::HashMap;

        #[test]
        fn test_opaque_equality() {
            let a = UnitId::from("urn:ogc:def:uom:EPSG::9001");
            let b = UnitId::from("urn:ogc:def:uom:EPSG::9001".to_string());
            assert_eq!(a, b);
            assert_ne!(a, UnitId::from("URN:OGC:DEF:UOM:EPSG::9001"));
            assert_ne!(a, UnitId::from("urn:ogc:def:uom:EPSG::9001 "));
        }

        #[test]
        fn test_lookup_by_str() {
            let mut map = HashMap::new();
            map.insert(UnitId::from("custom:1"), 1);
            assert_eq!(map.get("custom:1"), Some(&1));
            assert_eq!(map.get("custom:2"), None);
        }

        #[test]
        fn test_serde_transparent() {
            let id = UnitId::from("urn:ogc:def:uom:EPSG::9036");
            let json = serde_json::to_string(&id).unwrap();
            assert_eq!(json, "\"urn:ogc:def:uom:EPSG::9036\"");
            let back: UnitId = serde_json::from_str(&json).unwrap();
            assert_eq!(back, id);
        }

        #[test]
        fn test_display() {
            let id = UnitId::from("custom:1");
            assert_eq!(format!("{}", id), "custom:1");
            assert_eq!(id.as_str(), "custom:1");
        }
    }

    mod error_tests {
        use super::*;

        #[test]
        fn test_error_codes() {
            assert_eq!(UomError::unknown_unit("x").code(), codes::UNKNOWN_UNIT);
            assert_eq!(UomError::UnknownOperation { code: 1 }.code(), codes::UNKNOWN_OPERATION);
            assert_eq!(UomError::missing_parameter("falseEasting").code(), codes::MISSING_PARAMETER);
            assert_eq!(UomError::InvalidDate("x".into()).code(), codes::INVALID_DATE);
        }

        #[test]
        fn test_error_display() {
            let err = UomError::unknown_unit("not-a-real-id");
            assert_eq!(err.to_string(), "Unknown unit of measure: not-a-real-id");

            let err = UomError::dimension_mismatch("falseEasting", "length", "angle");
            assert_eq!(err.to_string(), "Parameter 'falseEasting' has dimension angle, expected length");
        }

        #[test]
        fn test_report() {
            let report = UomError::unknown_unit("custom:9").report();
            assert_eq!(report.code, codes::UNKNOWN_UNIT);
            assert!(report.message.contains("custom:9"));
            assert!(report.suggestion.is_some());

            let json = serde_json::to_value(&report).unwrap();
            assert_eq!(json["code"], "UNKNOWN_UNIT");
        }

        #[test]
        fn test_report_skips_empty_suggestion() {
            let report = UomError::missing_parameter("xAxisTranslation").report();
            let json = serde_json::to_string(&report).unwrap();
            assert!(!json.contains("suggestion"));
        }
    }
}
