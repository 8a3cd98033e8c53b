use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{Error, Result};

/// Transport mode of a route
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TransportMode {
    #[serde(rename = "aerea", alias = "air")]
    Air,
    #[serde(rename = "maritima", alias = "sea")]
    Sea,
    #[serde(rename = "terrestre", alias = "land")]
    Land,
    #[serde(rename = "mixta", alias = "mixed")]
    Mixed,
}

impl TransportMode {
    pub const ALL: [TransportMode; 4] = [
        TransportMode::Air,
        TransportMode::Sea,
        TransportMode::Land,
        TransportMode::Mixed,
    ];

    /// Wire name used by the route planning API
    pub fn as_str(&self) -> &'static str {
        match self {
            TransportMode::Air => "aerea",
            TransportMode::Sea => "maritima",
            TransportMode::Land => "terrestre",
            TransportMode::Mixed => "mixta",
        }
    }

    /// Parses either the wire name or the English name
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "aerea" | "air" => Some(TransportMode::Air),
            "maritima" | "sea" => Some(TransportMode::Sea),
            "terrestre" | "land" => Some(TransportMode::Land),
            "mixta" | "mixed" => Some(TransportMode::Mixed),
            _ => None,
        }
    }
}

impl fmt::Display for TransportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A country in the routing graph
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: String,
    pub name: String,
    pub lat: f64,
    pub lon: f64,
}

/// A directed transport link between two countries
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    pub origin: String,
    pub destination: String,
    pub mode: TransportMode,
    pub distance_km: f64,
    pub hours: f64,
    /// Base freight cost per ton on this leg
    pub cost_per_ton: f64,
}

impl Route {
    pub fn new(
        origin: impl Into<String>,
        destination: impl Into<String>,
        mode: TransportMode,
        distance_km: f64,
        hours: f64,
        cost_per_ton: f64,
    ) -> Self {
        Route {
            origin: origin.into(),
            destination: destination.into(),
            mode,
            distance_km,
            hours,
            cost_per_ton,
        }
    }

    pub(crate) fn validate(&self) -> Result<()> {
        let leg = format!("route {} -> {}", self.origin, self.destination);
        non_negative(&leg, "distance_km", self.distance_km)?;
        non_negative(&leg, "hours", self.hours)?;
        non_negative(&leg, "cost_per_ton", self.cost_per_ton)
    }
}

/// Cargo definition constraining transport modes and scaling freight cost
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub category: String,
    /// Weight per unit in kilograms
    pub weight_kg: f64,
    /// Volume per unit in cubic meters
    pub volume_m3: f64,
    pub unit_price: f64,
    pub allowed_modes: Vec<TransportMode>,
}

impl Product {
    pub fn allows(&self, mode: TransportMode) -> bool {
        self.allowed_modes.contains(&mode)
    }

    pub(crate) fn validate(&self) -> Result<()> {
        let what = format!("product {}", self.id);
        positive(&what, "weight_kg", self.weight_kg)?;
        positive(&what, "volume_m3", self.volume_m3)?;
        non_negative(&what, "unit_price", self.unit_price)?;
        if self.allowed_modes.is_empty() {
            return Err(Error::Validation(format!(
                "{} has no allowed transport modes",
                what
            )));
        }
        Ok(())
    }
}

fn non_negative(what: &str, field: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(Error::Validation(format!(
            "{}: {} must be a finite non-negative number, got {}",
            what, field, value
        )));
    }
    Ok(())
}

fn positive(what: &str, field: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(Error::Validation(format!(
            "{}: {} must be a finite positive number, got {}",
            what, field, value
        )));
    }
    Ok(())
}

pub(crate) fn finite_coordinate(id: &str, field: &str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(Error::Validation(format!(
            "node {}: {} must be finite, got {}",
            id, field, value
        )));
    }
    Ok(())
}
