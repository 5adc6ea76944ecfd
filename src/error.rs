use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by the engine.
///
/// Shape errors name the operation and the 1-based layer index so that a
/// misconfigured layer-dims sequence is diagnosable without dumping matrices.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("shape mismatch in {op} at layer {layer}: expected {expected:?}, got {actual:?}")]
    ShapeMismatch {
        op: &'static str,
        layer: usize,
        expected: (usize, usize),
        actual: (usize, usize),
    },

    #[error("learning rate must be positive, got {0}")]
    InvalidLearningRate(f64),

    #[error("layer dims need an input width and at least one layer, got {0} entries")]
    TooFewLayerDims(usize),

    #[error("layer dims entry {index} is zero; every width must be positive")]
    ZeroLayerWidth { index: usize },

    #[error("example count mismatch: X has {x_examples} columns, Y has {y_examples}")]
    ExampleCountMismatch { x_examples: usize, y_examples: usize },

    #[error("batch is empty: at least one example is required")]
    EmptyBatch,
}

impl Error {
    pub(crate) fn shape(
        op: &'static str,
        layer: usize,
        expected: (usize, usize),
        actual: (usize, usize),
    ) -> Self {
        Error::ShapeMismatch {
            op,
            layer,
            expected,
            actual,
        }
    }
}
