//! Logging helpers shared by services and infra.

pub mod pii;
