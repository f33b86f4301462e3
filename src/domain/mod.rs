//! Core business entities, storage traits, and the expiry reclaimer.

pub mod entities;
pub mod reclaimer;
pub mod repositories;
pub mod validator;
