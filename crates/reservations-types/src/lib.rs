//! reservations-types: shared reservation vocabulary and the provider port

pub mod domain;
pub mod ports;
