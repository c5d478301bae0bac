//! reservations-hex: reservation booking core (service + inbound HTTP)

pub mod config;
pub mod errors;

pub mod application;

pub use reservations_types::{domain, ports};

pub mod inbound; // HTTP adapter (server + handlers)
