//! Crate-level error types.

use std::fmt;

/// Errors produced by the scene-camera crate.
///
/// The per-frame update never fails; these cover the setter preconditions
/// and option preset I/O.
#[derive(Debug)]
pub enum CameraError {
    /// Orthographic scale must be finite and strictly positive.
    InvalidOrthoScale(f32),
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
}

impl fmt::Display for CameraError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidOrthoScale(scale) => {
                write!(f, "orthographic scale must be > 0, got {scale}")
            }
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
        }
    }
}

impl std::error::Error for CameraError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for CameraError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_rejected_scale() {
        let msg = CameraError::InvalidOrthoScale(-2.0).to_string();
        assert!(msg.contains("-2"));
    }

    #[test]
    fn io_error_exposes_source() {
        use std::error::Error;
        let err = CameraError::from(std::io::Error::other("disk gone"));
        assert!(err.source().is_some());
        assert!(CameraError::OptionsParse("bad".into()).source().is_none());
    }
}
