use crate::error::{Error, Result};
use crate::grid::EarthGrid;

/// Largest tolerated overshoot of |alpha| past 1 before it is treated as a
/// genuine computation error instead of rounding noise.
pub const ACOS_TOL: f64 = 1e-12;

/// Rectangular coordinates (x, y, z) in meters for the center of cell `i`.
pub fn position(i: usize, grid: &EarthGrid, r_earth_m: f64) -> Result<[f64; 3]> {
    let (lat, lon) = grid.cell_coords(i)?;
    Ok([
        r_earth_m * lat.cos() * lon.cos(),
        r_earth_m * lat.cos() * lon.sin(),
        r_earth_m * lat.sin(),
    ])
}

/// arccos that survives dot products drifting just past the [-1, 1] domain.
/// Within ACOS_TOL the argument is clamped to the exact boundary, so
/// coincident points come out at exactly 0 rather than a sub-meter phantom
/// distance. Deviations beyond the tolerance are reported, not swallowed.
pub fn safe_acos(alpha: f64) -> Result<f64> {
    if !alpha.is_finite() {
        return Err(Error::NumericDomain { alpha });
    }
    if alpha > 1.0 {
        if alpha - 1.0 > ACOS_TOL {
            return Err(Error::NumericDomain { alpha });
        }
        return Ok(0.0);
    }
    if alpha < -1.0 {
        if -1.0 - alpha > ACOS_TOL {
            return Err(Error::NumericDomain { alpha });
        }
        return Ok(std::f64::consts::PI);
    }
    Ok(alpha.acos())
}

/// Great-circle distance in meters between cells `i` and `j`, via the
/// spherical law of cosines. Symmetric in (i, j); zero when i == j.
pub fn geodesic(i: usize, j: usize, grid: &EarthGrid, r_earth_m: f64) -> Result<f64> {
    let pi = position(i, grid, r_earth_m)?;
    let pj = position(j, grid, r_earth_m)?;

    let alpha = (pi[0] * pj[0] + pi[1] * pj[1] + pi[2] * pj[2]) / (r_earth_m * r_earth_m);

    Ok(r_earth_m * safe_acos(alpha)?)
}
