//! Repository traits implemented by the infrastructure layer.

mod url_repository;

pub use url_repository::{CodeFn, UrlRepository};

#[cfg(test)]
pub use url_repository::MockUrlRepository;
