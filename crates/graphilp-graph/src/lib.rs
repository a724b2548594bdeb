//! Undirected graphs and the DIMACS edge-list text format.
//!
//! - [`Graph`]: validated vertex count plus a set of unordered edges
//! - [`dimacs`]: reader and writer for `p edge V E` / `e i j` files
//! - [`GraphError`]: loader and construction errors

pub mod dimacs;
mod error;
mod graph;

pub use error::GraphError;
pub use graph::Graph;
