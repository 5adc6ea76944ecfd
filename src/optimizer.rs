use crate::backward::Gradients;
use crate::error::{Error, Result};
use crate::params::Parameters;

/// Vanilla gradient descent: θ ← θ − α·∇θ for every weight and bias.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientDescent {
    learning_rate: f64,
}

impl GradientDescent {
    /// Rejects non-positive (or non-finite) learning rates.
    pub fn new(learning_rate: f64) -> Result<Self> {
        if !learning_rate.is_finite() || learning_rate <= 0.0 {
            return Err(Error::InvalidLearningRate(learning_rate));
        }
        Ok(Self { learning_rate })
    }

    /// Apply one update step in place. Every gradient shape must match its
    /// parameter shape exactly.
    pub fn step(&self, params: &mut Parameters, grads: &Gradients) -> Result<()> {
        assert_eq!(
            params.n_layers(),
            grads.n_layers(),
            "step: parameter and gradient layer counts must agree"
        );
        for layer in 1..=params.n_layers() {
            let g = grads.layer(layer);
            let p = params.layer(layer);
            if g.dw.dim() != p.weights.dim() {
                return Err(Error::shape("update dW", layer, p.weights.dim(), g.dw.dim()));
            }
            if g.db.dim() != p.bias.dim() {
                return Err(Error::shape("update db", layer, p.bias.dim(), g.db.dim()));
            }
            let p = params.layer_mut(layer);
            p.weights.scaled_add(-self.learning_rate, &g.dw);
            p.bias.scaled_add(-self.learning_rate, &g.db);
        }
        Ok(())
    }
}
