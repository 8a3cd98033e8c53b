//! Weight policies: turn an optimization criterion and an optional cargo
//! product into a per-route cost.
//!
//! A [`WeightPolicy`] is an immutable value built once per query and passed by
//! reference into the search engines. Routes whose transport mode the product
//! may not use weigh `f64::INFINITY` and are treated as absent.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::graph::model::{Product, Route};
use crate::{Error, Result};

/// Optimization objective
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Criterion {
    /// Minimize travel time
    #[serde(rename = "rapidez", alias = "speed")]
    Speed,
    /// Minimize freight cost
    #[serde(rename = "economia", alias = "economy")]
    Economy,
}

impl Criterion {
    /// Accepts the API names (`rapidez`, `economia`) and their English equivalents
    pub fn parse(value: &str) -> Result<Self> {
        match value {
            "rapidez" | "speed" => Ok(Criterion::Speed),
            "economia" | "economy" => Ok(Criterion::Economy),
            other => Err(Error::InvalidCriterion(other.to_string())),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Criterion::Speed => "rapidez",
            Criterion::Economy => "economia",
        }
    }
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Key that fully identifies the weighting produced by a policy
pub type PolicyKey = (Criterion, Option<String>);

#[derive(Debug, Clone, Copy)]
struct Cargo {
    /// Product weight in tons
    tons: f64,
    allowed: [bool; 4],
}

/// Pure route -> cost function for one query
#[derive(Debug, Clone)]
pub struct WeightPolicy {
    criterion: Criterion,
    product_id: Option<String>,
    cargo: Option<Cargo>,
}

impl WeightPolicy {
    pub fn new(criterion: Criterion, product: Option<&Product>) -> Self {
        let cargo = product.map(|p| {
            let mut allowed = [false; 4];
            for mode in &p.allowed_modes {
                allowed[*mode as usize] = true;
            }
            Cargo {
                tons: p.weight_kg / 1000.0,
                allowed,
            }
        });

        WeightPolicy {
            criterion,
            product_id: product.map(|p| p.id.clone()),
            cargo,
        }
    }

    /// The economy policy for the same cargo, used to report freight cost
    pub fn economy_for(&self) -> Self {
        WeightPolicy {
            criterion: Criterion::Economy,
            ..self.clone()
        }
    }

    pub fn criterion(&self) -> Criterion {
        self.criterion
    }

    pub fn product_id(&self) -> Option<&str> {
        self.product_id.as_deref()
    }

    pub fn cache_key(&self) -> PolicyKey {
        (self.criterion, self.product_id.clone())
    }

    /// Whether the cargo may travel on this route
    pub fn is_eligible(&self, route: &Route) -> bool {
        match &self.cargo {
            Some(cargo) => cargo.allowed[route.mode as usize],
            None => true,
        }
    }

    /// Cost of traversing a route; `f64::INFINITY` when the route is not usable
    pub fn weight(&self, route: &Route) -> f64 {
        if !self.is_eligible(route) {
            return f64::INFINITY;
        }
        match (self.criterion, &self.cargo) {
            (Criterion::Speed, _) => route.hours,
            (Criterion::Economy, Some(cargo)) => route.cost_per_ton * cargo.tons,
            (Criterion::Economy, None) => route.cost_per_ton,
        }
    }
}
