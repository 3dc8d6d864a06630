//! Adapters for the translator's ports: gateway configuration sources and raw
//! response printers.

pub mod config;
pub mod printer;
