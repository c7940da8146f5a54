mod accuracy;
mod mse;
mod r2_score;

pub use accuracy::Accuracy;
pub use mse::Mse;
pub use r2_score::R2Score;

use ml_core::{MlError, Result};

/// Asserts that there is one prediction per label and that there's
/// something to score.
fn assert_scorable(predictions: usize, labels: usize) -> Result<()> {
    if labels == 0 {
        return Err(MlError::InvalidInput("cannot score an empty validation set"));
    }

    if predictions != labels {
        return Err(MlError::ShapeMismatch {
            what: "predictions",
            got: predictions,
            expected: labels,
        });
    }

    Ok(())
}
