pub mod edge;
pub mod error;
pub mod filter;
pub mod graph;
pub mod module_id;
pub mod ports;
pub mod resolver;
