//! Generates random problem instances for testing and benchmarking.

#[cfg(test)]
#[path = "../../tests/unit/extensions/generate_test.rs"]
mod generate_test;

use daa_core::prelude::*;
use daa_core::utils::Random;
use daa_formats::tsp::TspInstance;

/// Generates a TSP instance with `size` vertices, edge costs in `[0, max_weight]` and the first
/// vertex as the source. Every edge is missing with `missing` probability, which should be
/// within `[0, 1]`.
pub fn generate_tsp_instance(
    random: &dyn Random,
    size: usize,
    max_weight: Cost,
    missing: f64,
) -> Result<TspInstance, GenericError> {
    if size == 0 {
        return Err("cannot generate tsp instance without vertices".into());
    }

    if max_weight < 0 {
        return Err(format!("max weight should be non-negative, got {max_weight}").into());
    }

    if !(0. ..=1.).contains(&missing) {
        return Err(format!("missing edge probability should be in [0, 1], got {missing}").into());
    }

    let rows = (0..size)
        .map(|row| {
            (0..size)
                .map(|column| {
                    if row == column || random.is_hit(missing) {
                        Weight::Infinite
                    } else {
                        Weight::Finite(random.uniform_int(0, max_weight))
                    }
                })
                .collect()
        })
        .collect();

    Ok(TspInstance { matrix: CostMatrix::new(rows)?, source: 0 })
}

/// Generates a directed graph with `size` vertices named by their 1-based indices and `edges`
/// edges with weights in `[min_weight, max_weight]`. Self loops and repeated edges are allowed.
pub fn generate_graph(
    random: &dyn Random,
    size: usize,
    edges: usize,
    min_weight: Cost,
    max_weight: Cost,
) -> Result<Graph, GenericError> {
    if size == 0 {
        return Err("cannot generate graph without vertices".into());
    }

    if min_weight > max_weight {
        return Err(format!("min weight {min_weight} is greater than max weight {max_weight}").into());
    }

    let vertices = (1..=size).map(|idx| idx.to_string()).collect::<Vec<_>>();
    let max_vertex = size as i64 - 1;

    let edges = (0..edges)
        .map(|_| {
            let source = random.uniform_int(0, max_vertex) as usize;
            let destination = random.uniform_int(0, max_vertex) as usize;

            Edge::new(source, destination, random.uniform_int(min_weight, max_weight))
        })
        .collect();

    Ok(Graph::new(vertices, edges)?)
}
