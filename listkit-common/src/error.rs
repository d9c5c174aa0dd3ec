//! Error taxonomy shared by every listkit component.
//!
//! Only two things can go wrong: a caller hands in an argument outside the
//! valid domain, or a per-element transform fails inside the parallel mapper.
//! Not finding a match is *not* an error and is reported as `None`.

use thiserror::Error;

/// Boxed error carried as the source of a [`ToolkitError::TransformFailure`].
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Convenience alias used throughout the toolkit.
pub type Result<T, E = ToolkitError> = std::result::Result<T, E>;

/// Errors produced by listkit operations.
///
/// # Example
/// ```
/// use listkit_common::ToolkitError;
///
/// let error = ToolkitError::invalid_argument("n", -3, "must be non-negative");
/// assert!(error.is_invalid_argument());
/// assert_eq!(error.to_string(), "invalid argument `n` = -3: must be non-negative");
/// ```
#[derive(Debug, Error)]
pub enum ToolkitError {
    /// Malformed input, detected before any work starts.
    #[error("invalid argument `{name}` = {value}: {reason}")]
    InvalidArgument {
        /// Parameter name as it appears in the public API
        name: &'static str,
        /// Rendered offending value
        value: String,
        /// Constraint the value violated
        reason: &'static str,
    },

    /// A per-element transform failed during a parallel map.
    ///
    /// `index` is the lowest failing position observed and `failures` counts
    /// every element that failed before the workers drained.
    #[error("transform failed at index {index} ({failures} failure(s) observed)")]
    TransformFailure {
        /// Lowest input position whose transform failed
        index: usize,
        /// Number of elements that failed before every worker joined
        failures: usize,
        /// Error returned by the transform, or the captured panic
        #[source]
        source: BoxError,
    },

    /// Not a single worker thread could be started.
    ///
    /// If at least one worker starts, the map continues on the workers it has.
    #[error("could not spawn any of {requested} worker thread(s)")]
    SpawnFailure {
        /// Worker count the map asked for
        requested: usize,
        /// Error reported by the operating system
        #[source]
        source: std::io::Error,
    },

    /// The indexed result buffer came back with empty slots.
    #[error("parallel map finished with {missing} unwritten result slot(s)")]
    Incomplete {
        /// Number of slots left unwritten
        missing: usize,
    },
}

impl ToolkitError {
    /// Builds an [`ToolkitError::InvalidArgument`] from any displayable value.
    pub fn invalid_argument(
        name: &'static str,
        value: impl std::fmt::Display,
        reason: &'static str,
    ) -> Self {
        ToolkitError::InvalidArgument {
            name,
            value: value.to_string(),
            reason,
        }
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, ToolkitError::InvalidArgument { .. })
    }

    pub fn is_transform_failure(&self) -> bool {
        matches!(self, ToolkitError::TransformFailure { .. })
    }

    /// Index of the failing element, if this is a transform failure.
    pub fn failed_index(&self) -> Option<usize> {
        match self {
            ToolkitError::TransformFailure { index, .. } => Some(*index),
            _ => None,
        }
    }
}
