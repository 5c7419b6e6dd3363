//! Demonstrates constructing, reconfiguring, and evaluating an MSM measure
//! against a stand-in kernel.
//!
//! Run with `cargo run --example configure_measure`.

use calluna_measures::{
    Cutoff, DistanceMeasure, MsmMeasure, MsmParams, ParamSet, TimeSeries,
};
use tracing::info;

/// Stand-in kernel: scaled L1 distance. A real deployment plugs in the MSM
/// recurrence here.
fn l1_kernel(a: &[f64], b: &[f64], params: MsmParams) -> f64 {
    a.iter().zip(b).map(|(x, y)| (x - y).abs()).sum::<f64>() * params.cost
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter("info")
        .with_writer(std::io::stderr)
        .init();

    let a = TimeSeries::new(vec![0.0, 1.0, 2.0, 1.0, 0.0]).expect("valid series");
    let b = TimeSeries::new(vec![0.0, 2.0, 4.0, 2.0, 0.0]).expect("valid series");

    let mut measure = MsmMeasure::new(l1_kernel);
    for (key, value) in measure.params().iter() {
        info!(key, value, "default parameter");
    }

    let dist = measure.distance(a.as_view(), b.as_view(), Cutoff::NoLimit);
    info!(%dist, cost = measure.cost(), "distance under defaults");

    measure.set_params(&ParamSet::new().with("cost", 0.1).with("w", 0.5));
    let dist = measure.distance(a.as_view(), b.as_view(), Cutoff::NoLimit);
    info!(%dist, cost = measure.cost(), "distance after reconfiguration");
}
