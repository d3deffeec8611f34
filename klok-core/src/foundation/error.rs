/// Convenience result type used across Klok.
pub type KlokResult<T> = Result<T, KlokError>;

/// Top-level error taxonomy used by engine APIs.
///
/// The engine never terminates the process itself: a required-asset or
/// configuration failure comes back as a typed error and the decision to
/// exit belongs to the top-level caller.
#[derive(thiserror::Error, Debug)]
pub enum KlokError {
    /// Errors loading or persisting the preferences file.
    #[error("config error: {0}")]
    Config(String),

    /// Errors resolving a theme directory or loading a required layer.
    #[error("theme error: {0}")]
    Theme(String),

    /// Errors allocating or compositing render surfaces.
    #[error("render error: {0}")]
    Render(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl KlokError {
    /// Build a [`KlokError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build a [`KlokError::Theme`] value.
    pub fn theme(msg: impl Into<String>) -> Self {
        Self::Theme(msg.into())
    }

    /// Build a [`KlokError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
