//! Bushfire Radiant Heat Core Library
//!
//! Computes incident radiant heat flux at a structure from a bushfire flame
//! front, following the methodology of Midgley & Tan (2006) for determining
//! minimum separation distances between structures and bushfire hazards.
//!
//! ## Calculation Chain
//!
//! For a vegetation community, fire weather and site geometry the model:
//! - derives the head fire rate of spread and flame length (Tables 1-2)
//! - maximises the flame/receiver view factor over the flame angle
//! - attenuates the flame radiation by the atmospheric transmittance
//! - reports the incident flux via the Stefan-Boltzmann law
//!
//! ```
//! use bushfire_hazard_core::{
//!     FireWeather, RadiantHeatModel, SiteGeometry, VegetationClass,
//! };
//!
//! let model = RadiantHeatModel::new(
//!     VegetationClass::forest(),
//!     FireWeather::catastrophic(),
//!     SiteGeometry::flat(),
//! )?;
//! let flux = model.radiant_heat_flux(30.0)?;
//! assert!((flux - 28.7).abs() < 0.1); // kW/m² at 30 m separation
//! # Ok::<(), bushfire_hazard_core::ParameterError>(())
//! ```

pub mod constants;
pub mod flame;
pub mod fuel;
pub mod model;
pub mod site;
pub mod transmittance;
pub mod view;
pub mod weather;

// Re-export the model surface
pub use flame::FlameProperties;
pub use fuel::VegetationClass;
pub use model::{exposure_category, ParameterError, RadiantHeatModel};
pub use site::SiteGeometry;
pub use view::ViewFactor;
pub use weather::FireWeather;
