//! Radiant heat exposure model
//!
//! Ties fuel, weather, site and flame sheet together into the radiant heat
//! flux calculation of Midgley & Tan (2006):
//!
//! ```text
//! R_d = φ · ε · σ · T⁴ · τ
//! ```
//!
//! Where:
//! - **`R_d`** = radiant heat flux at the receiver (kW/m²)
//! - **φ** = view factor at the maximising flame angle
//! - **ε** = flame emissivity
//! - **σ** = Stefan-Boltzmann constant, 5.67×10⁻¹¹ kW/(m²·K⁴)
//! - **T** = flame temperature (K)
//! - **τ** = atmospheric transmittance over the flame-receiver path

use std::f64::consts::FRAC_PI_2;
use std::fmt;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::constants::STEFAN_BOLTZMANN_KW;
use crate::flame::{self, FlameProperties};
use crate::fuel::VegetationClass;
use crate::site::SiteGeometry;
use crate::transmittance;
use crate::view::{self, ViewFactor};
use crate::weather::FireWeather;

/// Rejected model input
#[derive(Debug, Clone, PartialEq)]
pub enum ParameterError {
    /// Parameter is NaN or infinite
    NonFinite { name: &'static str },
    /// Parameter is finite but outside its physical domain
    OutOfRange {
        name: &'static str,
        value: f64,
        constraint: &'static str,
    },
}

impl fmt::Display for ParameterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParameterError::NonFinite { name } => {
                write!(f, "parameter {name} is not finite")
            }
            ParameterError::OutOfRange {
                name,
                value,
                constraint,
            } => {
                write!(f, "parameter {name} = {value} is out of range: {constraint}")
            }
        }
    }
}

impl std::error::Error for ParameterError {}

fn check(
    name: &'static str,
    value: f64,
    in_range: bool,
    constraint: &'static str,
) -> Result<(), ParameterError> {
    if !value.is_finite() {
        return Err(ParameterError::NonFinite { name });
    }
    if !in_range {
        return Err(ParameterError::OutOfRange {
            name,
            value,
            constraint,
        });
    }
    Ok(())
}

/// Radiant heat model for one hazard scenario
///
/// An immutable record of fuel, weather, site and flame sheet parameters.
/// The flame geometry is derived once at construction; flux queries then only
/// pay for the view factor search and the transmittance polynomial.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadiantHeatModel {
    fuel: VegetationClass,
    weather: FireWeather,
    site: SiteGeometry,
    flame: FlameProperties,
    rate_of_spread: f64,
    flame_length: f64,
    transmittance_coefficients: [f64; 5],
}

impl RadiantHeatModel {
    /// Build a model with the methodology's default flame sheet
    ///
    /// # Errors
    /// Returns [`ParameterError`] when any input is non-finite or outside its
    /// physical domain.
    pub fn new(
        fuel: VegetationClass,
        weather: FireWeather,
        site: SiteGeometry,
    ) -> Result<Self, ParameterError> {
        Self::with_flame_properties(fuel, weather, site, FlameProperties::default())
    }

    /// Build a model with explicit flame sheet properties
    ///
    /// # Errors
    /// Returns [`ParameterError`] when any input is non-finite or outside its
    /// physical domain.
    pub fn with_flame_properties(
        fuel: VegetationClass,
        weather: FireWeather,
        site: SiteGeometry,
        flame: FlameProperties,
    ) -> Result<Self, ParameterError> {
        check(
            "overall_fuel_load",
            fuel.overall_fuel_load,
            fuel.overall_fuel_load > 0.0,
            "must be positive",
        )?;
        check(
            "surface_fuel_load",
            fuel.surface_fuel_load,
            fuel.surface_fuel_load > 0.0,
            "must be positive",
        )?;
        check("fdi", weather.fdi, weather.fdi >= 0.0, "must be non-negative")?;
        check(
            "ambient_temperature",
            weather.ambient_temperature,
            weather.ambient_temperature > 0.0,
            "must be positive Kelvin",
        )?;
        check(
            "relative_humidity",
            weather.relative_humidity,
            (0.0..=1.0).contains(&weather.relative_humidity),
            "must be a fraction in [0, 1]",
        )?;
        check(
            "site_slope",
            site.site_slope,
            site.site_slope.abs() < FRAC_PI_2,
            "must lie strictly between -pi/2 and pi/2 radians",
        )?;
        check(
            "receiver_height",
            site.receiver_height,
            site.receiver_height >= 0.0,
            "must be non-negative",
        )?;
        check(
            "flame_temperature",
            flame.temperature,
            flame.temperature > 0.0,
            "must be positive Kelvin",
        )?;
        check(
            "flame_emissivity",
            flame.emissivity,
            flame.emissivity > 0.0 && flame.emissivity <= 1.0,
            "must lie in (0, 1]",
        )?;
        check(
            "flame_width",
            flame.width,
            flame.width > 0.0,
            "must be positive",
        )?;

        let rate_of_spread = flame::rate_of_spread(&fuel, &weather, &site);
        let flame_length = flame::flame_length(&fuel, rate_of_spread);
        let transmittance_coefficients = transmittance::transmittance_coefficients(
            weather.ambient_temperature,
            flame.temperature,
            weather.relative_humidity,
        );

        debug!(
            "radiant heat model for {}: R={rate_of_spread:.4} km/h, L={flame_length:.2} m",
            fuel.name
        );

        Ok(RadiantHeatModel {
            fuel,
            weather,
            site,
            flame,
            rate_of_spread,
            flame_length,
            transmittance_coefficients,
        })
    }

    pub fn fuel(&self) -> &VegetationClass {
        &self.fuel
    }

    pub fn weather(&self) -> &FireWeather {
        &self.weather
    }

    pub fn site(&self) -> &SiteGeometry {
        &self.site
    }

    pub fn flame(&self) -> &FlameProperties {
        &self.flame
    }

    /// Head fire rate of spread (km/h)
    pub fn rate_of_spread(&self) -> f64 {
        self.rate_of_spread
    }

    /// Flame length (m)
    pub fn flame_length(&self) -> f64 {
        self.flame_length
    }

    /// Byram's fire line intensity (kW/m)
    pub fn fire_line_intensity(&self) -> f64 {
        flame::fire_line_intensity(&self.fuel, self.rate_of_spread)
    }

    /// View factor at the flame angle that maximises it
    ///
    /// # Errors
    /// Returns [`ParameterError`] when the separation distance is non-finite
    /// or not positive.
    pub fn view_factor(&self, separation: f64) -> Result<ViewFactor, ParameterError> {
        check("separation", separation, separation > 0.0, "must be positive")?;
        Ok(view::max_view_factor(
            separation,
            self.flame_length,
            self.flame.width,
            &self.site,
        ))
    }

    /// Atmospheric transmittance for a given flame angle and separation
    pub fn transmittance(&self, flame_angle: f64, separation: f64) -> f64 {
        let path_length = separation - 0.5 * self.flame_length * flame_angle.cos();
        transmittance::transmittance(&self.transmittance_coefficients, path_length)
    }

    /// Incident radiant heat flux at the receiver (kW/m²)
    ///
    /// # Errors
    /// Returns [`ParameterError`] when the separation distance is non-finite
    /// or not positive.
    pub fn radiant_heat_flux(&self, separation: f64) -> Result<f64, ParameterError> {
        let view_factor = self.view_factor(separation)?;
        let tau = self.transmittance(view_factor.flame_angle, separation);

        Ok(view_factor.value
            * self.flame.emissivity
            * STEFAN_BOLTZMANN_KW
            * self.flame.temperature.powi(4)
            * tau)
    }

    /// Radiant heat flux over a batch of separation distances (kW/m²)
    ///
    /// Separation sweeps are embarrassingly parallel, so the batch is
    /// evaluated with rayon; the first invalid distance aborts the sweep.
    ///
    /// # Errors
    /// Returns [`ParameterError`] when any separation distance is non-finite
    /// or not positive.
    pub fn flux_profile(&self, separations: &[f64]) -> Result<Vec<f64>, ParameterError> {
        separations
            .par_iter()
            .map(|&separation| self.radiant_heat_flux(separation))
            .collect()
    }
}

/// Classify a radiant heat flux against the bushfire attack level
/// construction thresholds (kW/m²)
pub fn exposure_category(flux: f64) -> &'static str {
    match flux {
        f if f <= 12.5 => "BAL-12.5",
        f if f <= 19.0 => "BAL-19",
        f if f <= 29.0 => "BAL-29",
        f if f <= 40.0 => "BAL-40",
        _ => "BAL-FZ",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn forest_model() -> RadiantHeatModel {
        RadiantHeatModel::new(
            VegetationClass::forest(),
            FireWeather::catastrophic(),
            SiteGeometry::flat(),
        )
        .unwrap()
    }

    #[test]
    fn test_derived_flame_geometry() {
        let model = forest_model();
        assert_relative_eq!(model.rate_of_spread(), 3.0, max_relative = 1e-12);
        assert_relative_eq!(model.flame_length(), 23.7, max_relative = 1e-12);
        assert_relative_eq!(model.fire_line_intensity(), 38_750.0, max_relative = 1e-9);
    }

    #[test]
    fn test_radiant_heat_flux_reference_value() {
        let model = forest_model();
        let flux = model.radiant_heat_flux(20.0).unwrap();
        assert_relative_eq!(flux, 39.38194868, max_relative = 1e-6);
    }

    #[test]
    fn test_rejects_invalid_separation() {
        let model = forest_model();
        assert!(matches!(
            model.radiant_heat_flux(0.0),
            Err(ParameterError::OutOfRange { name: "separation", .. })
        ));
        assert!(matches!(
            model.radiant_heat_flux(-5.0),
            Err(ParameterError::OutOfRange { name: "separation", .. })
        ));
        assert!(matches!(
            model.radiant_heat_flux(f64::NAN),
            Err(ParameterError::NonFinite { name: "separation" })
        ));
    }

    #[test]
    fn test_rejects_invalid_weather() {
        let result = RadiantHeatModel::new(
            VegetationClass::forest(),
            FireWeather::new(-1.0),
            SiteGeometry::flat(),
        );
        assert!(matches!(
            result,
            Err(ParameterError::OutOfRange { name: "fdi", .. })
        ));

        let mut weather = FireWeather::catastrophic();
        weather.relative_humidity = 1.5;
        let result =
            RadiantHeatModel::new(VegetationClass::forest(), weather, SiteGeometry::flat());
        assert!(matches!(
            result,
            Err(ParameterError::OutOfRange { name: "relative_humidity", .. })
        ));
    }

    #[test]
    fn test_rejects_invalid_site() {
        let steep = SiteGeometry::new(FRAC_PI_2, 0.0);
        let result = RadiantHeatModel::new(
            VegetationClass::forest(),
            FireWeather::catastrophic(),
            steep,
        );
        assert!(matches!(
            result,
            Err(ParameterError::OutOfRange { name: "site_slope", .. })
        ));

        let buried = SiteGeometry::new(0.0, -1.0);
        let result = RadiantHeatModel::new(
            VegetationClass::forest(),
            FireWeather::catastrophic(),
            buried,
        );
        assert!(matches!(
            result,
            Err(ParameterError::OutOfRange { name: "receiver_height", .. })
        ));
    }

    #[test]
    fn test_rejects_invalid_flame_sheet() {
        let flame = FlameProperties {
            emissivity: 0.0,
            ..FlameProperties::default()
        };
        let result = RadiantHeatModel::with_flame_properties(
            VegetationClass::forest(),
            FireWeather::catastrophic(),
            SiteGeometry::flat(),
            flame,
        );
        assert!(matches!(
            result,
            Err(ParameterError::OutOfRange { name: "flame_emissivity", .. })
        ));
    }

    #[test]
    fn test_flux_profile_matches_pointwise_evaluation() {
        let model = forest_model();
        let separations = [20.0, 30.0, 50.0, 80.0];
        let profile = model.flux_profile(&separations).unwrap();
        assert_eq!(profile.len(), separations.len());
        for (&separation, &flux) in separations.iter().zip(&profile) {
            assert_eq!(flux, model.radiant_heat_flux(separation).unwrap());
        }
    }

    #[test]
    fn test_flux_profile_propagates_errors() {
        let model = forest_model();
        assert!(model.flux_profile(&[20.0, -1.0, 40.0]).is_err());
    }

    #[test]
    fn test_exposure_categories() {
        assert_eq!(exposure_category(8.0), "BAL-12.5");
        assert_eq!(exposure_category(12.5), "BAL-12.5");
        assert_eq!(exposure_category(15.0), "BAL-19");
        assert_eq!(exposure_category(25.0), "BAL-29");
        assert_eq!(exposure_category(35.0), "BAL-40");
        assert_eq!(exposure_category(55.0), "BAL-FZ");
    }

    #[test]
    fn test_error_display() {
        let error = ParameterError::OutOfRange {
            name: "fdi",
            value: -1.0,
            constraint: "must be non-negative",
        };
        assert_eq!(
            error.to_string(),
            "parameter fdi = -1 is out of range: must be non-negative"
        );
    }
}
