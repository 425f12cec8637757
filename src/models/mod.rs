//! Diesel row models mapped to and from the domain layer.

pub mod client;
