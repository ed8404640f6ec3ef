use thiserror::Error;

/// Errors from reading an external catalog (HTTP API or snapshot files).
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("network error: {0}")]
    Network(String),

    #[error("catalog returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("failed to decode catalog response: {0}")]
    Decode(String),

    #[error("failed to read catalog snapshot: {0}")]
    Io(String),
}

impl CatalogError {
    /// True for failures of the transport itself rather than of the payload.
    pub fn is_network(&self) -> bool {
        matches!(self, CatalogError::Network(_) | CatalogError::Status { .. })
    }
}

/// Errors from building a character profile.
#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("class \"{0}\" not found")]
    ClassNotFound(String),

    #[error("invalid level {0}: must be at least 1")]
    InvalidLevel(u32),

    #[error("invalid value '{value}' for stat '{stat}'")]
    InvalidStat { stat: String, value: String },

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// Errors related to playstyle lookup and validation.
#[derive(Debug, Error)]
pub enum PlaystyleError {
    #[error("unknown playstyle: '{0}'")]
    Unknown(String),

    #[error("invalid weight {weight} for stat '{stat}' in playstyle '{playstyle}'")]
    InvalidWeight {
        playstyle: String,
        stat: String,
        weight: f64,
    },
}

/// Errors from the build advisor's entry points.
#[derive(Debug, Error)]
pub enum AdvisorError {
    #[error(transparent)]
    Playstyle(#[from] PlaystyleError),

    #[error(transparent)]
    Profile(#[from] ProfileError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}
