//! Geocoord Params - EPSG-style parameter sets
//!
//! A coordinate operation's parameters are stored as records of a value and
//! a unit identifier. This crate reads them from a data directory and turns
//! each record into a typed quantity through a `UnitSystem`.
//!
//! ```no_run
//! use geocoord_params::ParamSource;
//! use geocoord_uom::UnitSystem;
//!
//! let system = UnitSystem::new();
//! let params = ParamSource::from_env().resolve(7936, &system)?;
//! let tx = params.length("xAxisTranslation")?;
//! println!("{}", tx.to_base());
//! # Ok::<(), geocoord_core::UomError>(())
//! ```

mod record;
mod resolved;
mod source;

pub use record::{ParamRecord, ParamSet};
pub use resolved::ResolvedParams;
pub use source::{ParamSource, DEFAULT_PARAMS_PATH, PARAMS_PATH_VAR};
