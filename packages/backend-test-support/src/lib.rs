//! Backend test support utilities
//!
//! Helpers shared by the backend integration tests: logging initialization,
//! error-body assertions and unique test data.

pub mod error_shape;
pub mod logging;
pub mod unique_helpers;
