use ndarray::Array2;

/// Fraction of predicted labels matching the truth.
///
/// Both matrices hold exact 0.0/1.0 labels with one example per column, as
/// produced by `predict`.
pub fn accuracy(y_true: &Array2<f64>, y_pred: &Array2<f64>) -> f64 {
    assert_eq!(
        y_true.dim(),
        y_pred.dim(),
        "accuracy: label matrices must have identical shapes"
    );
    let n_corrects = y_true
        .iter()
        .zip(y_pred.iter())
        .filter(|(t, p)| t == p)
        .count();
    n_corrects as f64 / y_true.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::arr2;

    #[test]
    fn test_accuracy() {
        let y_true = arr2(&[[0.0, 0.0, 1.0, 1.0]]);
        let y_pred = arr2(&[[0.0, 1.0, 1.0, 1.0]]);
        assert_relative_eq!(0.75, accuracy(&y_true, &y_pred));
    }

    #[test]
    fn perfect_predictions_score_one() {
        let y = arr2(&[[0.0, 1.0, 1.0, 0.0]]);
        assert_relative_eq!(1.0, accuracy(&y, &y.clone()));
    }
}
