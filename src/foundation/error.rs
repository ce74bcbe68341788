/// Convenience result alias used across the crate.
pub type SceneryResult<T> = Result<T, SceneryError>;

/// Errors surfaced by the geometry core.
///
/// Degenerate numeric input is never an error here; generators fall back to documented
/// policies instead. Only malformed external input (SVG markup, path data, hex colours) fails.
#[derive(thiserror::Error, Debug)]
pub enum SceneryError {
    /// A configuration value was rejected.
    #[error("validation error: {0}")]
    Validation(String),

    /// The SVG document is structurally unusable.
    #[error("svg error: {0}")]
    Svg(String),

    /// The XML layer could not parse the document.
    #[error("svg xml error: {0}")]
    Xml(#[from] roxmltree::Error),

    /// A `d` attribute could not be parsed as SVG path data.
    #[error("invalid path data \"{d}\": {source}")]
    PathData {
        /// The offending path data string.
        d: String,
        /// Underlying parser error.
        #[source]
        source: svgtypes::Error,
    },

    /// A colour string could not be parsed.
    #[error("color error: {0}")]
    Color(String),

    /// Reading an SVG asset from disk failed.
    #[error("io error reading \"{path}\": {source}")]
    Io {
        /// Path that was being read.
        path: String,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// Catch-all for errors raised by callers plugging into the core.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SceneryError {
    /// Build a [`SceneryError::Validation`].
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`SceneryError::Svg`].
    pub fn svg(msg: impl Into<String>) -> Self {
        Self::Svg(msg.into())
    }

    /// Build a [`SceneryError::Color`].
    pub fn color(msg: impl Into<String>) -> Self {
        Self::Color(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
