use serde::{Deserialize, Serialize};

/// Geometry of the site between the flame front and the receiver
///
/// The slope is the incline of the ground running from the flame toward the
/// receiver; a positive slope tilts the receiver above the flame base. The
/// receiver height is the elevation of the exposed point on the structure
/// above local ground level.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SiteGeometry {
    /// Slope between flame and receiver (radians)
    pub site_slope: f64,

    /// Height of the receiver above ground (m)
    pub receiver_height: f64,
}

impl SiteGeometry {
    pub fn new(site_slope: f64, receiver_height: f64) -> Self {
        SiteGeometry {
            site_slope,
            receiver_height,
        }
    }

    /// Level ground with the receiver at ground level
    pub fn flat() -> Self {
        SiteGeometry::default()
    }
}
