use rand::prelude::*;
use rand::rngs::StdRng;

use crate::graph::model::{Product, TransportMode};
use crate::graph::store::{NodePolicy, RouteGraph};
use crate::Result;

const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance between two coordinates in kilometers
pub fn great_circle_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let (phi1, phi2) = (lat1.to_radians(), lat2.to_radians());
    let dphi = (lat2 - lat1).to_radians();
    let dlambda = (lon2 - lon1).to_radians();
    let a = (dphi / 2.0).sin().powi(2) + phi1.cos() * phi2.cos() * (dlambda / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_KM * a.sqrt().asin()
}

/// Typical cruising speed (km/h) and freight rate (per ton per 1000 km) of each mode
fn mode_profile(mode: TransportMode) -> (f64, f64) {
    match mode {
        TransportMode::Air => (800.0, 45.0),
        TransportMode::Sea => (35.0, 4.0),
        TransportMode::Land => (60.0, 12.0),
        TransportMode::Mixed => (120.0, 18.0),
    }
}

/// Generates a random route network with `n` countries and `routes_per_node`
/// outgoing routes from each, deterministic for a given seed.
///
/// Countries are scattered over the globe; each route's distance is the
/// great-circle distance between its endpoints, and its duration and cost
/// follow the mode's speed and freight rate. Parallel routes are possible.
pub fn generate_route_network(n: usize, routes_per_node: usize, seed: u64) -> Result<RouteGraph> {
    let mut graph = RouteGraph::with_limits(NodePolicy::Strict, n.max(1));
    let mut rng = StdRng::seed_from_u64(seed);

    let mut coords = Vec::with_capacity(n);
    for i in 0..n {
        let lat = rng.gen_range(-60.0..70.0);
        let lon = rng.gen_range(-180.0..180.0);
        graph.add_node(&format!("N{:03}", i), &format!("Country {}", i), lat, lon)?;
        coords.push((lat, lon));
    }

    if n < 2 {
        return Ok(graph);
    }

    for from in 0..n {
        for _ in 0..routes_per_node {
            let mut to = rng.gen_range(0..n - 1);
            if to >= from {
                to += 1;
            }
            let mode = TransportMode::ALL[rng.gen_range(0..TransportMode::ALL.len())];
            let (speed, rate) = mode_profile(mode);
            let (lat1, lon1) = coords[from];
            let (lat2, lon2) = coords[to];
            let distance = great_circle_km(lat1, lon1, lat2, lon2);
            // Jitter so that parallel routes of the same mode still differ
            let jitter = rng.gen_range(0.9..1.1);

            graph.add_edge(
                &format!("N{:03}", from),
                &format!("N{:03}", to),
                mode,
                distance,
                distance / speed * jitter,
                distance / 1000.0 * rate * jitter,
            )?;
        }
    }

    Ok(graph)
}

/// A small catalogue of products covering the common mode restrictions
pub fn sample_products() -> Vec<Product> {
    vec![
        Product {
            id: "SOLAR_PANEL_STD".to_string(),
            name: "Solar panel 450W".to_string(),
            category: "solar_energy".to_string(),
            weight_kg: 25.0,
            volume_m3: 0.05,
            unit_price: 180.0,
            allowed_modes: vec![TransportMode::Sea, TransportMode::Land, TransportMode::Mixed],
        },
        Product {
            id: "LITHIUM_CELL".to_string(),
            name: "Lithium battery cell".to_string(),
            category: "energy_storage".to_string(),
            weight_kg: 0.5,
            volume_m3: 0.001,
            unit_price: 40.0,
            allowed_modes: vec![TransportMode::Sea],
        },
        Product {
            id: "PHARMA_KIT".to_string(),
            name: "Vaccine cold-chain kit".to_string(),
            category: "pharma".to_string(),
            weight_kg: 3.0,
            volume_m3: 0.02,
            unit_price: 900.0,
            allowed_modes: TransportMode::ALL.to_vec(),
        },
    ]
}
