//! Physical constants and published coefficients for the radiant heat
//! methodology.
//!
//! Values are taken from Midgley & Tan (2006), *A methodology for determining
//! minimum separation distance between a structure and bushfire hazard*.

/// Stefan-Boltzmann constant (kW/(m²·K⁴))
pub const STEFAN_BOLTZMANN_KW: f64 = 5.67e-11;

/// Heat of combustion for fine bushland fuels (kJ/kg)
pub const HEAT_OF_COMBUSTION: f64 = 18_600.0;

/// Default flame temperature (K)
pub const DEFAULT_FLAME_TEMPERATURE: f64 = 1200.0;

/// Default flame emissivity (dimensionless, 0-1)
pub const DEFAULT_FLAME_EMISSIVITY: f64 = 0.95;

/// Default flame front width (m)
pub const DEFAULT_FLAME_WIDTH: f64 = 100.0;

/// Default ambient temperature (K)
pub const DEFAULT_AMBIENT_TEMPERATURE: f64 = 308.0;

/// Default relative humidity (fraction, 0-1)
pub const DEFAULT_RELATIVE_HUMIDITY: f64 = 0.25;

/// Fuel load conversion: tonnes per hectare to kg/m²
pub const TONNES_PER_HECTARE_TO_KG_PER_M2: f64 = 0.1;

/// Speed conversion: km/h to m/s
pub const KMH_TO_MS: f64 = 1.0 / 3.6;

/// Atmospheric transmittance coefficient table (page 6 of the methodology).
///
/// Each row n yields the polynomial coefficient `a_n` of the transmittance
/// series `τ = Σ a_n·pⁿ` (p = path length in metres) when dotted with the
/// driver vector `[1, T_ambient, T_flame, relative_humidity]`.
pub const TRANSMITTANCE_COEFFICIENTS: [[f64; 4]; 5] = [
    [1.486, -2.003e-3, 4.68e-5, -6.052e-2],
    [1.225e-2, -5.900e-5, 1.66e-6, -1.759e-3],
    [-1.489e-4, 6.893e-7, -1.922e-8, 2.092e-5],
    [8.381e-7, -3.283e-9, 1.051e-10, -1.166e-7],
    [-1.685e-9, 7.637e-12, -2.085e-13, 2.350e-10],
];
