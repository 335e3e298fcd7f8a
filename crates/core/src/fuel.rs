use serde::{Deserialize, Serialize};

/// Fuel load description for a vegetation community
///
/// Fuel loads drive the flame geometry: the surface fine fuel feeds the
/// spreading fire front while the overall fine fuel determines how tall the
/// flame sheet grows. Values for the preset communities come from Table 3 of
/// Midgley & Tan (2006).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VegetationClass {
    pub name: String,

    /// Total fine fuel load (t/ha) - drives flame length
    pub overall_fuel_load: f64,

    /// Surface fine fuel load (t/ha) - drives rate of spread
    pub surface_fuel_load: f64,
}

impl VegetationClass {
    /// Create a forest fuel class (overall 35 t/ha, surface 25 t/ha)
    pub fn forest() -> Self {
        VegetationClass {
            name: "Forest".to_string(),
            overall_fuel_load: 35.0,
            surface_fuel_load: 25.0,
        }
    }

    /// Create a woodland fuel class (overall 25 t/ha, surface 15 t/ha)
    pub fn woodland() -> Self {
        VegetationClass {
            name: "Woodland".to_string(),
            overall_fuel_load: 25.0,
            surface_fuel_load: 15.0,
        }
    }
}
