// HTTP routes
pub mod analyze;
pub mod entities;
pub mod health;
pub mod mask;
pub mod upload;

pub use analyze::*;
pub use entities::*;
pub use health::*;
pub use mask::*;
pub use upload::*;
