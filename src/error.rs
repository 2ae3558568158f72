//! Error types for the cube widget.

use std::fmt;

/// Errors reported by cube construction and navigation.
///
/// Dropped activations (transition in flight, face already active) are not
/// errors; they are reported as `Ok(false)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CubeError {
    /// A face name that was never added.
    UnknownFace(String),
    /// `add_side` was called twice with the same name.
    DuplicateFace(String),
    /// The operation needs an active face, but no index face was designated yet.
    NoActiveFace,
    /// `home` was requested, but no face was designated as the index.
    NoIndexFace,
    /// A shell action name that does not map to any control.
    UnknownAction(String),
    /// A direction name outside left/right/top/bottom/front/back.
    InvalidDirection(String),
}

impl fmt::Display for CubeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CubeError::UnknownFace(name) => write!(f, "unknown face '{}'", name),
            CubeError::DuplicateFace(name) => write!(f, "face '{}' already exists", name),
            CubeError::NoActiveFace => write!(f, "cube has no active face"),
            CubeError::NoIndexFace => write!(f, "cube has no index face"),
            CubeError::UnknownAction(name) => write!(f, "unknown action '{}'", name),
            CubeError::InvalidDirection(name) => write!(f, "invalid direction '{}'", name),
        }
    }
}

impl std::error::Error for CubeError {}
