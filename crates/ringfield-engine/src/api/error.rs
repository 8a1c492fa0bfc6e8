use thiserror::Error;

/// Errors surfaced while building or configuring a field.
///
/// Per-frame updates never fail; everything here happens at setup time.
#[derive(Debug, Error)]
pub enum FieldError {
    /// An item's radius vector was zero, which would pin its orbit to the origin.
    #[error("item radius must be non-zero")]
    ZeroRadius,

    /// A mesh handle did not resolve in the scene it was used with.
    #[error("mesh {0} is not part of this scene")]
    UnknownMesh(u32),

    /// Configuration JSON could not be parsed.
    #[error("invalid field config: {0}")]
    Config(#[from] serde_json::Error),

    /// Configuration parsed but holds unusable values.
    #[error("invalid field config: {0}")]
    InvalidConfig(String),
}

pub type FieldResult<T> = Result<T, FieldError>;
