//! Kernel module - server infrastructure and dependencies.

pub mod deps;
pub mod document;
pub mod pii;
pub mod traits;

pub use deps::ServerDeps;
pub use document::LopdfExtractor;
pub use pii::{create_pii_analyzer, NoopPiiAnalyzer, PatternPiiAnalyzer};
pub use traits::*;
