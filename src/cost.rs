use ndarray::{Array2, Zip};

use crate::error::{Error, Result};

/// Clamp bound keeping both log terms and both divisions finite.
const CLAMP_EPSILON: f64 = 1e-8;

fn clamp_prob(a: f64) -> f64 {
    a.clamp(CLAMP_EPSILON, 1.0 - CLAMP_EPSILON)
}

/// Mean binary cross-entropy of predictions AL against labels Y:
/// -(1/m) Σ (Y·ln AL + (1−Y)·ln(1−AL)).
///
/// AL and Y must have identical shapes; an empty batch is rejected.
pub fn compute_cost(al: &Array2<f64>, y: &Array2<f64>) -> Result<f64> {
    assert_eq!(
        al.dim(),
        y.dim(),
        "compute_cost: AL and Y must have identical shapes"
    );
    let m = y.ncols();
    if m == 0 {
        return Err(Error::EmptyBatch);
    }
    let total = Zip::from(al).and(y).fold(0.0, |acc, &a, &y| {
        let a = clamp_prob(a);
        acc + y * a.ln() + (1.0 - y) * (1.0 - a).ln()
    });
    Ok(-total / m as f64)
}

/// Gradient of the cross-entropy cost with respect to AL:
/// dAL = −(Y/AL − (1−Y)/(1−AL)), clamped like `compute_cost` so neither
/// division can blow up.
pub fn cost_gradient(al: &Array2<f64>, y: &Array2<f64>) -> Array2<f64> {
    assert_eq!(
        al.dim(),
        y.dim(),
        "cost_gradient: AL and Y must have identical shapes"
    );
    Zip::from(al).and(y).map_collect(|&a, &y| {
        let a = clamp_prob(a);
        -(y / a - (1.0 - y) / (1.0 - a))
    })
}
