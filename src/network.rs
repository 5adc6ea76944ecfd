use ndarray::Array2;

use crate::backward::model_backward;
use crate::cost::compute_cost;
use crate::error::{Error, Result};
use crate::forward::model_forward;
use crate::optimizer::GradientDescent;
use crate::params::{LayerDims, Parameters};

/// Hyperparameters of one training run.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainConfig {
    pub learning_rate: f64,
    pub num_iterations: usize,
    /// Seed for parameter initialization; the same seed, dims, and data
    /// reproduce the same trained parameters.
    pub seed: u64,
}

/// Train an L-layer network by full-batch gradient descent.
///
/// X is (n_features, n_examples), Y is (output width, n_examples) with
/// values in {0, 1}. Runs exactly `num_iterations` cycles of
/// forward -> cost -> backward -> update; the cost is monitoring-only and
/// never affects the loop. `monitor`, if given, is called with
/// (iteration, cost) on every iteration; the caller picks its own cadence
/// by filtering on the iteration number.
pub fn train(
    x: &Array2<f64>,
    y: &Array2<f64>,
    dims: &LayerDims,
    config: &TrainConfig,
    mut monitor: Option<&mut dyn FnMut(usize, f64)>,
) -> Result<Parameters> {
    validate_batch(x, y, dims)?;
    let optimizer = GradientDescent::new(config.learning_rate)?;

    let mut params = Parameters::init(dims, config.seed);
    for iteration in 0..config.num_iterations {
        let (al, caches) = model_forward(x, &params)?;
        let cost = compute_cost(&al, y)?;
        let grads = model_backward(&al, y, caches)?;
        optimizer.step(&mut params, &grads)?;

        if let Some(hook) = monitor.as_mut() {
            hook(iteration, cost);
        }
    }
    Ok(params)
}

/// Forward-propagate X and threshold each output probability at 0.5.
/// Returns a (output width, n_examples) matrix of 0.0/1.0 labels.
pub fn predict(x: &Array2<f64>, params: &Parameters) -> Result<Array2<f64>> {
    let (probs, _) = model_forward(x, params)?;
    Ok(probs.map(|&p| if p > 0.5 { 1.0 } else { 0.0 }))
}

fn validate_batch(x: &Array2<f64>, y: &Array2<f64>, dims: &LayerDims) -> Result<()> {
    if x.ncols() != y.ncols() {
        return Err(Error::ExampleCountMismatch {
            x_examples: x.ncols(),
            y_examples: y.ncols(),
        });
    }
    if x.ncols() == 0 {
        return Err(Error::EmptyBatch);
    }
    if x.nrows() != dims.input_width() {
        return Err(Error::shape(
            "train X",
            0,
            (dims.input_width(), x.ncols()),
            x.dim(),
        ));
    }
    if y.nrows() != dims.output_width() {
        return Err(Error::shape(
            "train Y",
            dims.n_layers(),
            (dims.output_width(), y.ncols()),
            y.dim(),
        ));
    }
    Ok(())
}
