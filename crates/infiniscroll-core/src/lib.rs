pub mod config;
pub mod error;
pub mod result;
pub mod viewport;

pub use config::{AppConfig, SourceKind};
pub use error::ScrollError;
pub use result::ScrollResult;
pub use viewport::{Viewport, VisibleWindow};
