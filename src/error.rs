use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("grid step must be positive and finite: Dtheta={dtheta_deg}, Dphi={dphi_deg}")]
    InvalidGridStep { dtheta_deg: f64, dphi_deg: f64 },

    #[error("grid is {rows}x{cols}; step recovery needs at least 2 rows and 2 columns")]
    DegenerateGrid { rows: usize, cols: usize },

    #[error("cell index {index} out of range 1..={size}")]
    InvalidIndex { index: usize, size: usize },

    #[error("arccos argument {alpha} outside [-1, 1] beyond tolerance")]
    NumericDomain { alpha: f64 },

    #[error("serialization error: {0}")]
    Json(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
