use thiserror::Error;

/// Failures a component can hit while mounting.
///
/// None of these are fatal to the page: each component that fails simply
/// stays inert while the others keep running.
#[derive(Debug, Error)]
pub enum EffectError {
    /// An element the component needs is absent from the page.
    #[error("missing target element: {0}")]
    MissingTarget(&'static str),

    /// The drawing surface exists but cannot hand out a 2D context.
    #[error("drawing surface unavailable: {0}")]
    SurfaceUnavailable(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A host call was rejected.
    #[error("host error: {0}")]
    Host(String),
}

impl EffectError {
    /// Whether the failure should be swallowed without any report.
    pub fn is_silent(&self) -> bool {
        matches!(self, EffectError::MissingTarget(_))
    }
}
