//! Infrastructure layer: database, cache, and outbound probing.

pub mod cache;
pub mod persistence;
pub mod validation;
