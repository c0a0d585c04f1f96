use serde::{Deserialize, Serialize};

/// All tunable physical and model constants, in one place instead of
/// per-function defaults.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Params {
    /// Latitude step in degrees. Must evenly divide 180 for a clean grid.
    pub dtheta_deg: f64,
    /// Longitude step in degrees. Must evenly divide 360 for a clean grid.
    pub dphi_deg: f64,
    /// Characteristic length scale of the edge-probability decay, meters.
    /// 1110 km yields an edge density of about 0.02 on the reference
    /// 10x10 degree grid.
    pub lambda_m: f64,
    /// Spherical Earth radius, meters.
    pub r_earth_m: f64,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            dtheta_deg: 10.0,
            dphi_deg: 10.0,
            lambda_m: 1110e3,
            r_earth_m: 6371e3,
        }
    }
}
