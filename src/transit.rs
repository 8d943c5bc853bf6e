//! Named transit stops on top of the shortest path engine
//!
//! A [`TransitNetwork`] pairs an [`UndirectedGraph`] of fares with the stop
//! names its vertex indices stand for, and turns engine output into a
//! [`Route`] that a front end can print or serialize.

use std::fmt;

use log::debug;
use serde::Serialize;

use crate::algorithm::dijkstra::Dijkstra;
use crate::algorithm::ShortestPathAlgorithm;
use crate::graph::{Graph, MutableGraph, UndirectedGraph};
use crate::{Error, Result};

/// Stops of the built-in network, indexed by vertex
pub const EASYWAY_STOPS: [&str; 6] = [
    "GOVINDPURAM",
    "IMS",
    "ABES",
    "Purana Buss Adda",
    "Railway Station",
    "Metro",
];

/// Fares (Rs.) between connected stops of the built-in network
pub const EASYWAY_FARES: [(usize, usize, u32); 6] = [
    (0, 1, 10),
    (0, 3, 20),
    (1, 2, 20),
    (1, 3, 20),
    (3, 4, 10),
    (3, 5, 10),
];

/// Source stop selected when none is given (ABES)
pub const DEFAULT_SOURCE: usize = 2;

/// Destination stop selected when none is given (Railway Station)
pub const DEFAULT_DESTINATION: usize = 4;

/// A set of named stops connected by fares
#[derive(Debug, Clone)]
pub struct TransitNetwork {
    stops: Vec<String>,
    graph: UndirectedGraph<u32>,
}

/// One leg of a route between two adjacent stops
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteLeg {
    pub from: usize,
    pub to: usize,
    pub from_name: String,
    pub to_name: String,
    pub fare: u32,
}

impl fmt::Display for RouteLeg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}: Rs.{}", self.from_name, self.to_name, self.fare)
    }
}

/// The cheapest route between two stops, leg by leg
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Route {
    pub source: usize,
    pub destination: usize,
    pub legs: Vec<RouteLeg>,
}

impl Route {
    /// Sum of all leg fares, as `u64`
    pub fn total_fare(&self) -> u64 {
        self.legs.iter().map(|leg| u64::from(leg.fare)).sum()
    }

    /// True when there is nothing to travel: same stop, or no connection
    pub fn is_empty(&self) -> bool {
        self.legs.is_empty()
    }
}

impl TransitNetwork {
    /// Creates a network of unconnected stops
    ///
    /// Names must be unique ignoring case and surrounding whitespace.
    pub fn new<S: Into<String>>(stops: impl IntoIterator<Item = S>) -> Result<Self> {
        let stops: Vec<String> = stops.into_iter().map(Into::into).collect();

        for (i, name) in stops.iter().enumerate() {
            if stops[..i].iter().any(|other| same_stop(other, name)) {
                return Err(Error::DuplicateStop(name.clone()));
            }
        }

        let graph = UndirectedGraph::new(stops.len())?;
        Ok(TransitNetwork { stops, graph })
    }

    /// The six-stop network with its fares
    pub fn easyway() -> Result<Self> {
        let mut network = Self::new(EASYWAY_STOPS)?;
        for (a, b, fare) in EASYWAY_FARES {
            network.add_connection(a, b, fare)?;
        }
        Ok(network)
    }

    /// Connects two stops in both directions at the given fare
    pub fn add_connection(&mut self, a: usize, b: usize, fare: u32) -> Result<()> {
        self.graph.add_edge(a, b, fare)
    }

    /// Stop names in index order
    pub fn stops(&self) -> &[String] {
        &self.stops
    }

    /// The underlying fare graph
    pub fn graph(&self) -> &UndirectedGraph<u32> {
        &self.graph
    }

    /// Name of the stop at `index`
    pub fn stop_name(&self, index: usize) -> Result<&str> {
        self.stops
            .get(index)
            .map(String::as_str)
            .ok_or(Error::InvalidVertex {
                vertex: index,
                vertex_count: self.stops.len(),
            })
    }

    /// Finds a stop by name, ignoring case and surrounding whitespace
    pub fn stop_index(&self, name: &str) -> Result<usize> {
        self.stops
            .iter()
            .position(|stop| same_stop(stop, name))
            .ok_or_else(|| Error::UnknownStop(name.trim().to_string()))
    }

    /// Resolves either a numeric stop index or a stop name
    pub fn resolve(&self, stop: &str) -> Result<usize> {
        match stop.trim().parse::<usize>() {
            Ok(index) => {
                self.graph.check_vertex(index)?;
                Ok(index)
            }
            Err(_) => self.stop_index(stop),
        }
    }

    /// The cheapest route between two stops
    pub fn route(&self, source: usize, destination: usize) -> Result<Route> {
        let segments = Dijkstra::new().shortest_path(&self.graph, source, destination)?;

        let legs = segments
            .into_iter()
            .map(|segment| -> Result<RouteLeg> {
                Ok(RouteLeg {
                    from: segment.from,
                    to: segment.to,
                    from_name: self.stop_name(segment.from)?.to_string(),
                    to_name: self.stop_name(segment.to)?.to_string(),
                    fare: segment.cost,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let route = Route {
            source,
            destination,
            legs,
        };
        debug!(
            "route {} -> {}: {} legs, Rs.{} over {} connections",
            source,
            destination,
            route.legs.len(),
            route.total_fare(),
            self.graph.edge_count()
        );
        Ok(route)
    }

    /// The cheapest route between two stops given by index or name
    pub fn route_by_name(&self, source: &str, destination: &str) -> Result<Route> {
        let source = self.resolve(source)?;
        let destination = self.resolve(destination)?;
        self.route(source, destination)
    }
}

fn same_stop(a: &str, b: &str) -> bool {
    a.trim().eq_ignore_ascii_case(b.trim())
}
