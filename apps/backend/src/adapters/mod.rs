//! Adapters for external dependencies.

pub mod authors_sea;
pub mod posts_sea;
