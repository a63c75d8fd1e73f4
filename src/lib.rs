//! GraphCore - A generic in-memory graph library implemented in Rust
//!
//! This crate provides a single `Graph<N, E, D>` type whose node labels are any
//! hashable value, plus traversal, structural analysis, spanning-tree and
//! shortest-path algorithms built on top of it.
//!
//! ```
//! use graphcore::{DiGraph, UnGraph};
//!
//! let mut deps: DiGraph<&str> = DiGraph::new();
//! deps.add_nodes(["core", "graph", "algo"]);
//! deps.add_edge(&"core", &"graph").unwrap();
//! deps.add_edge(&"graph", &"algo").unwrap();
//! assert_eq!(deps.topo_sort(), vec!["core", "graph", "algo"]);
//!
//! let mut roads: UnGraph<char, u32> = UnGraph::new();
//! roads.add_nodes(['a', 'b', 'c']);
//! roads.add_weighted_edge(&'a', &'b', 3).unwrap();
//! roads.add_weighted_edge(&'b', &'c', 1).unwrap();
//! roads.add_weighted_edge(&'a', &'c', 5).unwrap();
//! assert_eq!(roads.kruskal_mst(|w: &u32| *w).unwrap().total_weight, 4);
//! ```

pub mod config;
pub mod core;
pub mod graph;
pub mod services;
pub mod utils;

pub use crate::core::{GraphError, GraphResult};
pub use graph::{
    DiGraph, Directed, Direction, FullEdge, Graph, Measure, MinimumSpanningTree, NodePair,
    ShortestPaths, Traversal, UnGraph, Undirected, Weight,
};
