pub mod math;
pub mod core;
pub mod debris;
pub mod collision;
pub mod forces;

/// Re-export common types for easier usage
pub use crate::core::{DebrisField, DebrisHandle, FieldConfig, FieldFeatures, FieldStats};
pub use crate::debris::{Debris, DebrisKind, MaterialProfile};
pub use crate::math::Vector2;

/// Error types for the debris field core
pub mod error {
    use thiserror::Error;

    #[derive(Error, Debug)]
    pub enum FieldError {
        #[error("Invalid parameter: {0}")]
        InvalidParameter(String),

        #[error("Debris not found: {0}")]
        DebrisNotFound(String),
    }
}

/// Result type for field operations
pub type Result<T> = std::result::Result<T, error::FieldError>;

/// Crate version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
