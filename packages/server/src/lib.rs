// PII Shield - API Core
//
// This crate provides the backend API for detecting and masking personally
// identifiable information in free text and uploaded PDF documents.
// Detection logic lives in common/, service seams in kernel/, HTTP in server/.

pub mod common;
pub mod config;
pub mod kernel;
pub mod server;

pub use config::*;
