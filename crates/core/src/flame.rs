//! Flame geometry model for forest and woodland fuels
//!
//! Implements the flame length and rate of spread relations of Midgley & Tan
//! (2006), Tables 1 and 2, plus Byram's fire line intensity.
//!
//! # References
//! - Midgley, S. & Tan, Z. (2006). "A methodology for determining minimum
//!   separation distance between a structure and bushfire hazard." Life In A
//!   Fire-Prone Environment: Translating Science Into Practice, pp. 6-9.
//! - `McArthur`, A.G. (1967). "Fire behaviour in eucalypt forests."
//!   Commonwealth of Australia Forestry and Timber Bureau Leaflet 107.
//! - Byram, G.M. (1959). "Combustion of forest fuels." In: Forest Fire:
//!   Control and Use, pp. 61-89.

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_FLAME_EMISSIVITY, DEFAULT_FLAME_TEMPERATURE, DEFAULT_FLAME_WIDTH, HEAT_OF_COMBUSTION,
    KMH_TO_MS, TONNES_PER_HECTARE_TO_KG_PER_M2,
};
use crate::fuel::VegetationClass;
use crate::site::SiteGeometry;
use crate::weather::FireWeather;

/// Properties of the radiating flame sheet
///
/// Defaults are the methodology's modelling assumptions: a 1200 K flame of
/// emissivity 0.95 spanning a 100 m front.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FlameProperties {
    /// Flame temperature (K)
    pub temperature: f64,

    /// Flame emissivity (dimensionless, 0-1)
    pub emissivity: f64,

    /// Width of the flame front (m)
    pub width: f64,
}

impl Default for FlameProperties {
    fn default() -> Self {
        FlameProperties {
            temperature: DEFAULT_FLAME_TEMPERATURE,
            emissivity: DEFAULT_FLAME_EMISSIVITY,
            width: DEFAULT_FLAME_WIDTH,
        }
    }
}

/// Calculate the head fire rate of spread (km/h)
///
/// Table 2 relation for forest and woodland fuels:
///
/// ```text
/// R = 0.0012 × FDI × w × exp(0.069 × θ)
/// ```
///
/// Where:
/// - **FDI** = `McArthur` fire danger index
/// - **w** = surface fine fuel load (t/ha)
/// - **θ** = site slope (radians, as supplied to the site geometry)
pub fn rate_of_spread(fuel: &VegetationClass, weather: &FireWeather, site: &SiteGeometry) -> f64 {
    0.0012 * weather.fdi * fuel.surface_fuel_load * (0.069 * site.site_slope).exp()
}

/// Calculate the flame length (m)
///
/// Table 1 relation for forest and woodland fuels:
///
/// ```text
/// L_f = (13R + 0.24W) / 2
/// ```
///
/// Where:
/// - **R** = rate of spread (km/h)
/// - **W** = overall fine fuel load (t/ha)
pub fn flame_length(fuel: &VegetationClass, rate_of_spread: f64) -> f64 {
    (13.0 * rate_of_spread + 0.24 * fuel.overall_fuel_load) / 2.0
}

/// Calculate Byram's fire line intensity (kW/m)
///
/// ```text
/// I = H × w × R
/// ```
///
/// with the surface fuel load converted to kg/m² and the rate of spread to
/// m/s. H is the heat of combustion for fine bushland fuels (18,600 kJ/kg).
pub fn fire_line_intensity(fuel: &VegetationClass, rate_of_spread: f64) -> f64 {
    let fuel_load = fuel.surface_fuel_load * TONNES_PER_HECTARE_TO_KG_PER_M2;
    let spread_ms = rate_of_spread * KMH_TO_MS;
    HEAT_OF_COMBUSTION * fuel_load * spread_ms
}
