// Common types and utilities shared across the application

pub mod error;
pub mod pdf;
pub mod pii;

pub use error::ApiError;
