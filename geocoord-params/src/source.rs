//! Parameter data directory
//!
//! Each coordinate operation's parameters live in `EPSG{code}.json` inside a
//! data directory. The directory is taken from `GEOCOORD_PARAMS_PATH`, falling
//! back to `./params`.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use geocoord_core::{Result, UomError};
use geocoord_uom::UnitSystem;
use crate::record::ParamSet;
use crate::resolved::ResolvedParams;

/// Environment variable naming the parameter data directory
pub const PARAMS_PATH_VAR: &str = "GEOCOORD_PARAMS_PATH";

/// Data directory used when the environment does not name one
pub const DEFAULT_PARAMS_PATH: &str = "./params";

/// A directory of parameter data files
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamSource {
    dir: PathBuf,
}

impl ParamSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        ParamSource { dir: dir.into() }
    }

    /// Use the directory named by `GEOCOORD_PARAMS_PATH`
    pub fn from_env() -> Self {
        Self::from_env_var(PARAMS_PATH_VAR)
    }

    /// Use the directory named by `var`, or the default when unset
    pub fn from_env_var(var: &str) -> Self {
        let dir = env::var(var)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_PARAMS_PATH));
        ParamSource { dir }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the data file for operation `code`
    pub fn path_for(&self, code: u32) -> PathBuf {
        self.dir.join(format!("EPSG{}.json", code))
    }

    pub fn contains(&self, code: u32) -> bool {
        self.path_for(code).is_file()
    }

    /// Read the parameter set of operation `code`
    pub fn load(&self, code: u32) -> Result<ParamSet> {
        let path = self.path_for(code);
        if !path.is_file() {
            return Err(UomError::UnknownOperation { code });
        }

        let shown = path.display().to_string();
        let content = fs::read_to_string(&path).map_err(|e| UomError::param_data(&shown, e))?;
        let set = ParamSet::from_json(&content).map_err(|e| UomError::param_data(&shown, e))?;

        tracing::debug!(code, path = %shown, params = set.len(), "parameter set loaded");
        Ok(set)
    }

    /// Read and resolve the parameter set of operation `code`
    pub fn resolve(&self, code: u32, system: &UnitSystem) -> Result<ResolvedParams> {
        self.load(code)?.resolve(system)
    }

    /// Operation codes with a data file, in ascending order
    pub fn available_operations(&self) -> Vec<u32> {
        let mut codes = Vec::new();
        if let Ok(entries) = fs::read_dir(&self.dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().map_or(false, |e| e == "json") {
                    if let Some(code) = path.file_stem().and_then(|s| s.to_str()).and_then(operation_code) {
                        codes.push(code);
                    }
                }
            }
        }
        codes.sort_unstable();
        codes
    }
}

/// The code of a file stem, only if `load` would open the same file for it
fn operation_code(stem: &str) -> Option<u32> {
    let code: u32 = stem.strip_prefix("EPSG")?.parse().ok()?;
    (format!("EPSG{}", code) == stem).then_some(code)
}

impl Default for ParamSource {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geocoord_core::codes;
    use geocoord_uom::{angle, length, rate, scale, time};

    fn init_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_test_writer()
            .try_init();
    }

    /// A fresh data directory under the system temp dir
    fn fixture_dir(name: &str) -> PathBuf {
        let dir = env::temp_dir().join(format!("geocoord-params-{}-{}", std::process::id(), name));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    fn write_set(dir: &Path, code: u32, body: &str) {
        fs::write(dir.join(format!("EPSG{}.json", code)), body).unwrap();
    }

    fn record(value: f64, uom: &str) -> String {
        format!(r#"{{ "value": {}, "uom": "{}" }}"#, value, uom)
    }

    #[test]
    fn test_load_and_resolve() {
        init_tracing();
        let dir = fixture_dir("resolve");
        let body = format!(
            r#"{{ "xAxisTranslation": {}, "zAxisRotation": {}, "scaleDifference": {}, "rateOfChangeOfXAxisTranslation": {}, "parameterReferenceEpoch": {} }}"#,
            record(-2.1, length::EPSG_CENTIMETRE),
            record(-0.67, angle::EPSG_MILLIARC_SECOND),
            record(0.0, scale::EPSG_PARTS_PER_BILLION),
            record(0.1, rate::EPSG_CENTIMETRES_PER_YEAR),
            record(1989.0, time::EPSG_YEAR),
        );
        write_set(&dir, 7936, &body);

        let source = ParamSource::new(&dir);
        assert!(source.contains(7936));
        let params = source.resolve(7936, &UnitSystem::new()).unwrap();
        assert_eq!(params.len(), 5);
        assert_eq!(params.length("xAxisTranslation").unwrap().value(), -2.1);
        assert_eq!(params.angle("zAxisRotation").unwrap().unit_name(), "milliarc-second");
        assert_eq!(params.length_rate("rateOfChangeOfXAxisTranslation").unwrap().value(), 0.1);
        assert_eq!(params.time("parameterReferenceEpoch").unwrap().value(), 1989.0);

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_unknown_operation() {
        let dir = fixture_dir("unknown");
        let err = ParamSource::new(&dir).load(1234).unwrap_err();
        assert_eq!(err, UomError::UnknownOperation { code: 1234 });
        assert_eq!(err.to_string(), "Unknown coordinate operation: EPSG:1234");
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_invalid_data() {
        let dir = fixture_dir("invalid");
        write_set(&dir, 1, "{ not json");
        let err = ParamSource::new(&dir).load(1).unwrap_err();
        assert_eq!(err.code(), codes::PARAM_DATA);
        assert!(err.to_string().contains("EPSG1.json"));
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_available_operations() {
        let dir = fixture_dir("listing");
        write_set(&dir, 9603, "{}");
        write_set(&dir, 1149, "{}");
        fs::write(dir.join("README.txt"), "not a parameter set").unwrap();
        fs::write(dir.join("EPSGxyz.json"), "{}").unwrap();
        fs::write(dir.join("EPSG09603.json"), "{}").unwrap();
        fs::write(dir.join("EPSG+5.json"), "{}").unwrap();

        let source = ParamSource::new(&dir);
        assert_eq!(source.available_operations(), vec![1149, 9603]);
        for code in source.available_operations() {
            assert!(source.load(code).unwrap().is_empty());
        }
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_missing_directory() {
        let source = ParamSource::new("/nonexistent/geocoord/params");
        assert!(source.available_operations().is_empty());
        assert!(matches!(source.load(9603), Err(UomError::UnknownOperation { code: 9603 })));
    }

    #[test]
    fn test_from_env_var() {
        let var = "GEOCOORD_PARAMS_PATH_TEST_FROM_ENV";
        env::remove_var(var);
        assert_eq!(ParamSource::from_env_var(var).dir(), Path::new(DEFAULT_PARAMS_PATH));

        env::set_var(var, "/data/epsg");
        assert_eq!(ParamSource::from_env_var(var).dir(), Path::new("/data/epsg"));
        env::remove_var(var);
    }

    #[test]
    fn test_operation_code() {
        assert_eq!(operation_code("EPSG9603"), Some(9603));
        assert_eq!(operation_code("EPSG09603"), None);
        assert_eq!(operation_code("EPSG+5"), None);
        assert_eq!(operation_code("9603"), None);
    }

    #[test]
    fn test_path_for() {
        let source = ParamSource::new("/data");
        assert_eq!(source.path_for(1149), PathBuf::from("/data/EPSG1149.json"));
    }
}
