//! Transfer objects used at the service boundary instead of the domain
//! entities.

pub mod client;
