//! Pathkit Core Library
//!
//! Generic graph search (BFS, DFS, Dijkstra, A*) over caller-defined node
//! relations, a circular list with stable element handles, and the grid
//! adapter and ambient plumbing the `pathkit` binary is built on.

pub mod config;
pub mod error;
pub mod grid;
pub mod logging;
pub mod ring;
pub mod search;
