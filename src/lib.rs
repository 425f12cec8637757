//! Data layer for a registry of client records.
//!
//! The crate is organized the same way front to back: [`domain`] holds the
//! `Client` entity, [`dto`] its transfer representation, [`models`] the
//! Diesel row types, [`repository`] the storage traits plus the SQLite
//! implementation, and [`services`] the CRUD operations callers use. Paged
//! query plumbing lives in [`pagination`].

pub mod db;
pub mod domain;
pub mod dto;
pub mod models;
pub mod pagination;
pub mod repository;
pub mod schema;
pub mod services;
