pub mod config;
pub mod error;
pub mod export;
pub mod geo;
pub mod grid;
pub mod network;
pub mod rng;

use std::time::Instant;

pub use config::Params;
pub use error::{Error, Result};
pub use grid::EarthGrid;
pub use network::{BenchmarkGraph, make_network, make_network_par, probability};

pub struct Timing {
    pub name: &'static str,
    pub ms: f64,
}

/// Full pipeline: discretize the sphere at the resolution in `params`, then
/// sample the benchmark network with the given seed.
pub fn generate(seed: u64, params: &Params) -> Result<(BenchmarkGraph, Vec<Timing>)> {
    let mut timings = Vec::new();
    let total_start = Instant::now();

    let t = Instant::now();
    let grid = EarthGrid::build(params.dtheta_deg, params.dphi_deg)?;
    timings.push(Timing {
        name: "grid",
        ms: t.elapsed().as_secs_f64() * 1000.0,
    });

    let t = Instant::now();
    let graph = network::make_network(&grid, params, seed, false)?;
    timings.push(Timing {
        name: "network",
        ms: t.elapsed().as_secs_f64() * 1000.0,
    });

    timings.push(Timing {
        name: "TOTAL",
        ms: total_start.elapsed().as_secs_f64() * 1000.0,
    });

    Ok((graph, timings))
}
