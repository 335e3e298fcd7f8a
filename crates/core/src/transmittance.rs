//! Atmospheric transmittance along the flame-receiver path
//!
//! Implements the page-6 model of Midgley & Tan (2006): a quartic polynomial
//! in the path length whose coefficients respond linearly to ambient
//! temperature, flame temperature and relative humidity. Radiation shed by
//! the flame is partially absorbed by water vapour and carbon dioxide in the
//! intervening air, so the transmittance drops below one for any real path.

use crate::constants::TRANSMITTANCE_COEFFICIENTS;

/// Derive the polynomial coefficients `a₀…a₄` for the given atmosphere
///
/// Each coefficient is the dot product of a row of the published table with
/// the driver vector `[1, T_ambient, T_flame, relative_humidity]`
/// (temperatures in Kelvin, humidity as a fraction).
pub fn transmittance_coefficients(
    ambient_temperature: f64,
    flame_temperature: f64,
    relative_humidity: f64,
) -> [f64; 5] {
    let drivers = [1.0, ambient_temperature, flame_temperature, relative_humidity];
    let mut coefficients = [0.0; 5];
    for (coefficient, row) in coefficients.iter_mut().zip(&TRANSMITTANCE_COEFFICIENTS) {
        *coefficient = row.iter().zip(&drivers).map(|(c, v)| c * v).sum();
    }
    coefficients
}

/// Evaluate the transmittance `τ = Σ aₙ·pⁿ` at a path length p (m)
pub fn transmittance(coefficients: &[f64; 5], path_length: f64) -> f64 {
    let mut tau = 0.0;
    let mut power = 1.0;
    for coefficient in coefficients {
        tau += coefficient * power;
        power *= path_length;
    }
    tau
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use crate::constants::{DEFAULT_AMBIENT_TEMPERATURE, DEFAULT_RELATIVE_HUMIDITY, DEFAULT_FLAME_TEMPERATURE};

    fn default_coefficients() -> [f64; 5] {
        transmittance_coefficients(
            DEFAULT_AMBIENT_TEMPERATURE,
            DEFAULT_FLAME_TEMPERATURE,
            DEFAULT_RELATIVE_HUMIDITY,
        )
    }

    #[test]
    fn test_coefficients_for_default_atmosphere() {
        let coefficients = default_coefficients();
        assert_relative_eq!(coefficients[0], 0.910106, max_relative = 1e-6);
        assert_relative_eq!(coefficients[1], -0.00436975, max_relative = 1e-6);
        assert_relative_eq!(coefficients[2], 4.55704e-5, max_relative = 1e-6);
        assert_relative_eq!(coefficients[3], -7.6094e-8, max_relative = 1e-5);
        assert_relative_eq!(coefficients[4], 4.75746e-10, max_relative = 1e-6);
    }

    #[test]
    fn test_transmittance_at_reference_path_lengths() {
        let coefficients = default_coefficients();
        assert_relative_eq!(transmittance(&coefficients, 10.0), 0.87089420346, max_relative = 1e-9);
        assert_relative_eq!(transmittance(&coefficients, 30.0), 0.81835767626, max_relative = 1e-9);
        assert_relative_eq!(transmittance(&coefficients, 60.0), 0.80170380416, max_relative = 1e-9);
    }

    #[test]
    fn test_transmittance_below_unity_over_working_range() {
        let coefficients = default_coefficients();
        for path in [5.0, 10.0, 25.0, 50.0, 75.0, 100.0] {
            let tau = transmittance(&coefficients, path);
            assert!(tau > 0.0 && tau < 1.0, "tau({path}) = {tau} out of (0, 1)");
        }
    }
}
