use log::debug;
use ml_core::{MlError, Result};

/// Computes how many of the `n_cols` points go to the training set when a
/// `validation_size` fraction of them is held out.
///
/// The amount is `n_cols * (1 - validation_size)` rounded half away from
/// zero. The range check accepts `0.0` and `1.0`, but those always round to
/// an empty training or validation set and are rejected by the last check.
///
/// # Args
/// * `n_cols` - The amount of points in the dataset.
/// * `validation_size` - The fraction of points held out for validation.
///
/// # Returns
/// The amount of training points `t`, with `0 < t < n_cols`.
///
/// # Errors
/// `MlError::InvalidInput` if `validation_size` is outside `[0, 1]` (or NaN),
/// if there are less than 2 points, or if either set would end up empty.
pub fn training_points(n_cols: usize, validation_size: f64) -> Result<usize> {
    if !(0.0..=1.0).contains(&validation_size) {
        return Err(MlError::InvalidInput(
            "the validation_size parameter should be more than 0 and less than 1",
        ));
    }

    if n_cols < 2 {
        return Err(MlError::InvalidInput("2 or more data points are expected"));
    }

    let training = (n_cols as f64 * (1.0 - validation_size)).round() as usize;

    if training == 0 || training == n_cols {
        return Err(MlError::InvalidInput(
            "the validation_size parameter is either too small or too big",
        ));
    }

    debug!(n_cols = n_cols, training = training, validation_size = validation_size; "computed hold-out split");
    Ok(training)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn invalid_input(res: Result<usize>) -> &'static str {
        match res {
            Err(MlError::InvalidInput(msg)) => msg,
            other => panic!("expected an invalid input error, got {other:?}"),
        }
    }

    #[test]
    fn twenty_percent_of_ten_points() {
        assert_eq!(training_points(10, 0.2).unwrap(), 8);
    }

    #[test]
    fn large_ratio_still_leaves_one_training_point() {
        // 10 * 0.09 = 0.8999... rounds up to a single training point.
        assert_eq!(training_points(10, 0.91).unwrap(), 1);
    }

    #[test]
    fn rounding_is_half_away_from_zero() {
        // 10 * (1 - 0.95) lands just above 0.5.
        assert_eq!(training_points(10, 0.95).unwrap(), 1);

        // 4 * 0.625 = 2.5 exactly.
        assert_eq!(training_points(4, 0.375).unwrap(), 3);
        // 4 * 0.375 = 1.5 exactly.
        assert_eq!(training_points(4, 0.625).unwrap(), 2);
    }

    #[test]
    fn a_single_point_is_rejected_for_any_ratio() {
        for ratio in [0.0, 0.1, 0.5, 0.9, 1.0] {
            let msg = invalid_input(training_points(1, ratio));
            assert_eq!(msg, "2 or more data points are expected");
        }

        invalid_input(training_points(0, 0.5));
    }

    #[test]
    fn out_of_range_ratio_is_rejected_first() {
        for ratio in [-0.1, 1.1, f64::NAN, f64::INFINITY] {
            let msg = invalid_input(training_points(1, ratio));
            assert!(msg.contains("validation_size"), "{msg}");
            assert!(msg.contains("more than 0 and less than 1"), "{msg}");
        }
    }

    #[test]
    fn boundary_ratios_pass_the_range_check_but_fail_the_split() {
        for ratio in [0.0, 1.0] {
            let msg = invalid_input(training_points(10, ratio));
            assert_eq!(msg, "the validation_size parameter is either too small or too big");
        }
    }

    #[test]
    fn tiny_ratios_that_round_to_everything_are_rejected() {
        let msg = invalid_input(training_points(10, 0.01));
        assert!(msg.contains("too small or too big"));
    }

    #[test]
    fn two_points_split_in_half() {
        assert_eq!(training_points(2, 0.5).unwrap(), 1);
    }
}
