use log::warn;
use rayon::prelude::*;

use crate::error::{Error, Result};

/// Row-major flat grid. No per-cell objects.
#[derive(Clone, Debug, PartialEq)]
pub struct Grid<T> {
    pub data: Vec<T>,
    pub w: usize,
    pub h: usize,
}

impl<T: Copy + Default> Grid<T> {
    pub fn new(w: usize, h: usize) -> Self {
        Self {
            data: vec![T::default(); w * h],
            w,
            h,
        }
    }

    #[inline]
    pub fn idx(&self, x: usize, y: usize) -> usize {
        debug_assert!(x < self.w && y < self.h);
        y * self.w + x
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> T {
        self.data[self.idx(x, y)]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, v: T) {
        let i = self.idx(x, y);
        self.data[i] = v;
    }
}

/// Number of midpoint anchors the arange rule produces over [start, stop).
#[inline]
fn anchor_count(start: f64, stop: f64, step: f64) -> usize {
    ((stop - start) / step).ceil().max(0.0) as usize
}

/// Regular midpoint grid over the Earth's surface: two parallel row-major
/// meshes of latitude and longitude in radians. Longitude is the row (outer)
/// dimension, latitude the column (inner) dimension. Immutable once built.
#[derive(Clone, Debug, PartialEq)]
pub struct EarthGrid {
    pub lat: Grid<f64>,
    pub lon: Grid<f64>,
}

impl EarthGrid {
    /// Build the grid for the given step sizes in degrees. Latitude covers
    /// [-90, 90), longitude [0, 360); each cell center sits half a step
    /// inside its bin. Steps that do not evenly divide the range are
    /// accepted with a warning: anchors are generated while they stay below
    /// the range end, so the trailing bin is truncated.
    pub fn build(dtheta_deg: f64, dphi_deg: f64) -> Result<EarthGrid> {
        if !(dtheta_deg > 0.0 && dphi_deg > 0.0)
            || !dtheta_deg.is_finite()
            || !dphi_deg.is_finite()
        {
            return Err(Error::InvalidGridStep {
                dtheta_deg,
                dphi_deg,
            });
        }

        let lat_rem = (180.0 / dtheta_deg).fract();
        if lat_rem.abs() > 1e-9 {
            warn!("Dtheta={dtheta_deg} does not evenly divide 180 degrees; trailing latitude bin is truncated");
        }
        let lon_rem = (360.0 / dphi_deg).fract();
        if lon_rem.abs() > 1e-9 {
            warn!("Dphi={dphi_deg} does not evenly divide 360 degrees; trailing longitude bin is truncated");
        }

        let n_lat = anchor_count(-90.0, 90.0, dtheta_deg);
        let n_lon = anchor_count(0.0, 360.0, dphi_deg);

        let theta: Vec<f64> = (0..n_lat)
            .map(|k| (-90.0 + dtheta_deg / 2.0 + k as f64 * dtheta_deg).to_radians())
            .collect();
        let phi: Vec<f64> = (0..n_lon)
            .map(|k| (dphi_deg / 2.0 + k as f64 * dphi_deg).to_radians())
            .collect();

        let mut lat = Grid::new(n_lat, n_lon);
        let mut lon = Grid::new(n_lat, n_lon);
        for y in 0..n_lon {
            for x in 0..n_lat {
                lat.set(x, y, theta[x]);
                lon.set(x, y, phi[y]);
            }
        }

        Ok(EarthGrid { lat, lon })
    }

    /// Total cell count, derived from the stored mesh shape. Canonical node
    /// count for everything downstream.
    #[inline]
    pub fn size(&self) -> usize {
        self.lat.w * self.lat.h
    }

    /// Latitude and longitude (radians) of cell `i`. Public cell labels are
    /// 1-based; this is the only place the 1-to-0 conversion happens.
    #[inline]
    pub fn cell_coords(&self, i: usize) -> Result<(f64, f64)> {
        let size = self.size();
        if i < 1 || i > size {
            return Err(Error::InvalidIndex { index: i, size });
        }
        Ok((self.lat.data[i - 1], self.lon.data[i - 1]))
    }

    /// Per-cell area in squared meters: R^2 * cos(lat) * Dtheta * Dphi, with
    /// both steps in degrees. The steps are recovered by differencing
    /// adjacent mesh entries, so the area stays consistent with whatever
    /// grid was actually built. Needs at least 2 rows and 2 columns.
    pub fn cell_area(&self, r_earth_m: f64) -> Result<Grid<f64>> {
        let w = self.lat.w;
        let h = self.lat.h;
        if w < 2 || h < 2 {
            return Err(Error::DegenerateGrid { rows: h, cols: w });
        }

        let dtheta_deg = (self.lat.get(1, 0) - self.lat.get(0, 0)).to_degrees();
        let dphi_deg = (self.lon.get(0, 1) - self.lon.get(0, 0)).to_degrees();
        let r2 = r_earth_m * r_earth_m;

        let mut area = Grid::new(w, h);
        area.data
            .par_chunks_mut(w)
            .enumerate()
            .for_each(|(y, row)| {
                for (x, cell) in row.iter_mut().enumerate() {
                    *cell = r2 * self.lat.get(x, y).cos() * dtheta_deg * dphi_deg;
                }
            });

        Ok(area)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_matches_step_counts() {
        for (dt, dp) in [(10.0, 10.0), (5.0, 5.0), (90.0, 180.0), (30.0, 45.0)] {
            let grid = EarthGrid::build(dt, dp).unwrap();
            let expected = (180.0 / dt) as usize * (360.0 / dp) as usize;
            assert_eq!(grid.size(), expected, "Dtheta={dt} Dphi={dp}");
        }
    }

    #[test]
    fn reference_shape_matches() {
        // 5x5 degrees: 72 longitude rows, 36 latitude columns.
        let grid = EarthGrid::build(5.0, 5.0).unwrap();
        assert_eq!(grid.lat.w, 36);
        assert_eq!(grid.lat.h, 72);
        assert_eq!(grid.size(), 2592);
    }

    #[test]
    fn centers_sit_at_bin_midpoints() {
        let grid = EarthGrid::build(10.0, 10.0).unwrap();
        let (lat1, lon1) = grid.cell_coords(1).unwrap();
        assert!((lat1 - (-85.0f64).to_radians()).abs() < 1e-12);
        assert!((lon1 - 5.0f64.to_radians()).abs() < 1e-12);
    }

    #[test]
    fn coarse_2x2_grid() {
        let grid = EarthGrid::build(90.0, 180.0).unwrap();
        assert_eq!(grid.size(), 4);
        let (lat1, lon1) = grid.cell_coords(1).unwrap();
        let (lat2, _) = grid.cell_coords(2).unwrap();
        let (_, lon3) = grid.cell_coords(3).unwrap();
        assert!((lat1 - (-45.0f64).to_radians()).abs() < 1e-12);
        assert!((lat2 - 45.0f64.to_radians()).abs() < 1e-12);
        assert!((lon1 - 90.0f64.to_radians()).abs() < 1e-12);
        assert!((lon3 - 270.0f64.to_radians()).abs() < 1e-12);
    }

    #[test]
    fn index_bounds_are_enforced() {
        let grid = EarthGrid::build(90.0, 180.0).unwrap();
        assert!(matches!(
            grid.cell_coords(0),
            Err(Error::InvalidIndex { index: 0, size: 4 })
        ));
        assert!(matches!(
            grid.cell_coords(5),
            Err(Error::InvalidIndex { index: 5, size: 4 })
        ));
        assert!(grid.cell_coords(4).is_ok());
    }

    #[test]
    fn rejects_non_positive_steps() {
        assert!(matches!(
            EarthGrid::build(0.0, 10.0),
            Err(Error::InvalidGridStep { .. })
        ));
        assert!(matches!(
            EarthGrid::build(10.0, -5.0),
            Err(Error::InvalidGridStep { .. })
        ));
    }

    #[test]
    fn area_depends_on_latitude_only() {
        let grid = EarthGrid::build(30.0, 30.0).unwrap();
        let area = grid.cell_area(6371e3).unwrap();
        // Same latitude column across all longitude rows.
        for x in 0..area.w {
            let first = area.get(x, 0);
            for y in 1..area.h {
                assert_eq!(area.get(x, y), first);
            }
        }
        // Symmetric about the equator.
        for x in 0..area.w / 2 {
            let north = area.get(area.w - 1 - x, 0);
            let south = area.get(x, 0);
            assert!((north - south).abs() / south.abs() < 1e-12);
        }
    }

    #[test]
    fn area_matches_formula() {
        let grid = EarthGrid::build(10.0, 10.0).unwrap();
        let r = 6371e3;
        let area = grid.cell_area(r).unwrap();
        let (lat1, _) = grid.cell_coords(1).unwrap();
        let expected = r * r * lat1.cos() * 10.0 * 10.0;
        assert!((area.data[0] - expected).abs() / expected < 1e-12);
    }

    #[test]
    fn degenerate_grid_has_no_area() {
        // Single longitude row: step recovery by differencing is impossible.
        let grid = EarthGrid::build(90.0, 360.0).unwrap();
        assert!(matches!(
            grid.cell_area(6371e3),
            Err(Error::DegenerateGrid { rows: 1, cols: 2 })
        ));
    }
}
