use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_AMBIENT_TEMPERATURE, DEFAULT_RELATIVE_HUMIDITY};

/// Fire weather driving the flame model
///
/// Carries the `McArthur` fire danger index together with the atmospheric
/// state the transmittance model depends on.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FireWeather {
    /// `McArthur` fire danger index (dimensionless, 0-100+)
    pub fdi: f64,

    /// Ambient air temperature (K)
    pub ambient_temperature: f64,

    /// Relative humidity (fraction, 0-1)
    pub relative_humidity: f64,
}

impl FireWeather {
    /// Create fire weather for a given danger index with the methodology's
    /// default atmosphere (308 K, 25% relative humidity)
    pub fn new(fdi: f64) -> Self {
        FireWeather {
            fdi,
            ambient_temperature: DEFAULT_AMBIENT_TEMPERATURE,
            relative_humidity: DEFAULT_RELATIVE_HUMIDITY,
        }
    }

    /// Severe design conditions (FDI 50)
    pub fn severe() -> Self {
        FireWeather::new(50.0)
    }

    /// Catastrophic design conditions (FDI 100)
    ///
    /// FDI 100 is the design value most Australian jurisdictions assess
    /// bushfire-prone construction against.
    pub fn catastrophic() -> Self {
        FireWeather::new(100.0)
    }
}
