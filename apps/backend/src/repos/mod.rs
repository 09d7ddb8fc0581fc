//! Repository functions for the domain layer.

pub mod authors;
pub mod posts;
