//! algotrace - instrumented graph algorithms for step-by-step visualisation
//!
//! Dijkstra, Prim and Kruskal share one weighted graph model and emit every
//! decision point as an ordered JSON-lines trace.

pub mod api;
pub mod config;
pub mod core;
pub mod services;
pub mod utils;
