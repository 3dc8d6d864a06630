//! Gateway-agnostic payment types and the ports the translator depends on.

pub mod money;
pub mod parameters;
pub mod ports;
pub mod response;
