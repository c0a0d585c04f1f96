use std::path::PathBuf;

use earthnet::config::Params;
use earthnet::export::EdgeList;

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    let seed: u64 = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(42);
    let dtheta_deg: f64 = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(10.0);
    let dphi_deg: f64 = args.get(3).and_then(|s| s.parse().ok()).unwrap_or(10.0);
    let out_path: Option<PathBuf> = args.get(4).map(PathBuf::from);

    let params = Params {
        dtheta_deg,
        dphi_deg,
        ..Params::default()
    };

    eprintln!(
        "Building benchmark network: Dtheta={}, Dphi={}, lambda={}km, seed={}",
        params.dtheta_deg,
        params.dphi_deg,
        params.lambda_m / 1000.0,
        seed
    );

    let (graph, timings) = earthnet::generate(seed, &params).expect("network construction failed");

    eprintln!("\nTimings:");
    for t in &timings {
        eprintln!("  {:20} {:8.1} ms", t.name, t.ms);
    }

    let n = graph.node_count() as f64;
    let density = 2.0 * graph.edge_count() as f64 / (n * (n - 1.0));
    eprintln!(
        "\nNodes: {}  Edges: {}  Density: {:.4}",
        graph.node_count(),
        graph.edge_count(),
        density
    );

    if let Some(path) = out_path {
        let json = EdgeList::from_graph(&graph)
            .to_json()
            .expect("failed to serialize edge list");
        std::fs::write(&path, json).expect("failed to write edge list");
        eprintln!("Saved {}", path.display());
    }

    eprintln!("\nDone.");
}
