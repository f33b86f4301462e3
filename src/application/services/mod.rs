//! Application services orchestrating the write and read paths.

mod resolution_service;
mod shortening_service;

pub use resolution_service::ResolutionService;
pub use shortening_service::ShorteningService;
