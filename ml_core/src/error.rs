use std::fmt;

/// The result type shared by the evaluation core and its collaborators.
pub type Result<T> = std::result::Result<T, MlError>;

/// Errors produced by evaluation strategies, learners and metrics.
#[derive(Debug, Clone, PartialEq)]
pub enum MlError {
    /// An input is invalid for semantic or domain reasons.
    InvalidInput(&'static str),

    /// A shape invariant was violated (e.g. mismatched lengths).
    ShapeMismatch {
        /// Human-readable context for the mismatch (e.g. "labels", "weights").
        what: &'static str,
        /// Observed value.
        got: usize,
        /// Expected value.
        expected: usize,
    },

    /// The trained model was requested before any training succeeded.
    UninitializedModel,

    /// A linear system solved during training has no unique solution.
    SingularSystem,

    /// A configuration could not be parsed or holds invalid values.
    InvalidConfig(String),
}

impl fmt::Display for MlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MlError::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
            MlError::ShapeMismatch { what, got, expected } => {
                write!(f, "shape mismatch for {what}: got {got}, expected {expected}")
            }
            MlError::UninitializedModel => {
                write!(f, "attempted to access an uninitialized model")
            }
            MlError::SingularSystem => write!(f, "the linear system is singular"),
            MlError::InvalidConfig(msg) => write!(f, "invalid config: {msg}"),
        }
    }
}

impl std::error::Error for MlError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shape_mismatch_message_names_the_container() {
        let err = MlError::ShapeMismatch {
            what: "labels",
            got: 3,
            expected: 4,
        };

        assert_eq!(err.to_string(), "shape mismatch for labels: got 3, expected 4");
    }

    #[test]
    fn uninitialized_model_message() {
        assert_eq!(
            MlError::UninitializedModel.to_string(),
            "attempted to access an uninitialized model"
        );
    }
}
