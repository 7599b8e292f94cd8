//! ccan-depends library — dependency closure resolution for module archives.

pub mod adapters;
pub mod app;
pub mod cli;
pub mod domain;
