//! View factor between an inclined flame sheet and a receiver
//!
//! Implements the page-5 model of Midgley & Tan (2006). The flame is treated
//! as a flat radiating panel of fixed width tilted at an angle above the
//! horizontal; the receiver sees it through a rectangular view factor built
//! from four corner integrals. The flame angle is not an input: the
//! methodology takes the angle that maximises the view factor, so a bounded
//! one-dimensional search over [0, π] runs inside every evaluation.

use std::f64::consts::PI;

use tracing::debug;

use crate::site::SiteGeometry;

/// Number of intervals in the coarse angle scan
const SCAN_INTERVALS: usize = 64;

/// Bracket width below which the golden-section refinement stops (radians)
const ANGLE_TOLERANCE: f64 = 1e-10;

/// Iteration cap for the golden-section refinement
const MAX_REFINE_STEPS: usize = 100;

/// A view factor together with the flame angle that produced it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewFactor {
    /// View factor (dimensionless, 0-1)
    pub value: f64,

    /// Flame angle above horizontal that maximises the view factor (radians)
    pub flame_angle: f64,
}

/// Evaluate the view factor for a single flame angle
///
/// Returns `f64::NEG_INFINITY` when the path length from the flame centre to
/// the receiver is not positive (the receiver would sit inside the projected
/// flame sheet), which removes that angle from the maximisation.
pub fn panel_view_factor(
    flame_angle: f64,
    separation: f64,
    flame_length: f64,
    flame_width: f64,
    site: &SiteGeometry,
) -> f64 {
    let path_length = separation - 0.5 * flame_length * flame_angle.cos();
    if path_length <= 0.0 {
        return f64::NEG_INFINITY;
    }

    let slope_tan = site.site_slope.tan();
    let x_1 = (flame_length * flame_angle.sin()
        - 0.5 * flame_length * flame_angle.cos() * slope_tan
        - separation * slope_tan
        - site.receiver_height)
        / path_length;
    let x_2 = (site.receiver_height + path_length * slope_tan) / path_length;
    let y_1 = (0.5 * flame_width) / path_length;
    let y_2 = y_1;

    (corner_integral(x_1, y_1)
        + corner_integral(y_1, x_1)
        + corner_integral(x_2, y_2)
        + corner_integral(y_2, x_2))
        / PI
}

/// One corner term of the rectangular view factor
fn corner_integral(a: f64, b: f64) -> f64 {
    let root = (1.0 + a * a).sqrt();
    a / root * (b / root).atan()
}

/// Find the flame angle in [0, π] that maximises the view factor
///
/// A coarse scan brackets the maximum, then golden-section search refines the
/// bracket. For separations beyond half the flame length every angle has a
/// positive path length and the search covers the full interval.
pub fn max_view_factor(
    separation: f64,
    flame_length: f64,
    flame_width: f64,
    site: &SiteGeometry,
) -> ViewFactor {
    let evaluate =
        |angle: f64| panel_view_factor(angle, separation, flame_length, flame_width, site);

    let mut best_index = 0;
    let mut best_value = f64::NEG_INFINITY;
    for i in 0..=SCAN_INTERVALS {
        let angle = PI * (i as f64) / (SCAN_INTERVALS as f64);
        let value = evaluate(angle);
        if value > best_value {
            best_value = value;
            best_index = i;
        }
    }

    let mut lower = PI * (best_index.saturating_sub(1) as f64) / (SCAN_INTERVALS as f64);
    let mut upper = PI * ((best_index + 1).min(SCAN_INTERVALS) as f64) / (SCAN_INTERVALS as f64);

    let inv_phi = 0.5 * (5.0_f64.sqrt() - 1.0);
    let mut probe_low = upper - inv_phi * (upper - lower);
    let mut probe_high = lower + inv_phi * (upper - lower);
    let mut value_low = evaluate(probe_low);
    let mut value_high = evaluate(probe_high);

    for _ in 0..MAX_REFINE_STEPS {
        if upper - lower < ANGLE_TOLERANCE {
            break;
        }
        if value_low > value_high {
            upper = probe_high;
            probe_high = probe_low;
            value_high = value_low;
            probe_low = upper - inv_phi * (upper - lower);
            value_low = evaluate(probe_low);
        } else {
            lower = probe_low;
            probe_low = probe_high;
            value_low = value_high;
            probe_high = lower + inv_phi * (upper - lower);
            value_high = evaluate(probe_high);
        }
    }

    let flame_angle = 0.5 * (lower + upper);
    let value = evaluate(flame_angle);

    debug!(
        "view factor maximised: separation={separation} m, angle={flame_angle:.6} rad, phi={value:.6}"
    );

    ViewFactor { value, flame_angle }
}
