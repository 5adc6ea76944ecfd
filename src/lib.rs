//! An L-layer feedforward network for binary classification, trained by
//! full-batch gradient descent on a cross-entropy objective. Hidden layers
//! are ReLU, the output layer is sigmoid; gradients are derived by hand,
//! there is no autodiff.

pub mod activation;
pub mod backward;
pub mod cost;
pub mod error;
pub mod forward;
pub mod metrics;
pub mod network;
pub mod optimizer;
pub mod params;

pub use error::{Error, Result};
pub use network::{predict, train, TrainConfig};
pub use params::{LayerDims, Parameters};

#[macro_export]
macro_rules! assert_rel_eq_arr2 {
    ($actual:expr, $expected:expr) => {
        assert_eq!($actual.shape(), $expected.shape());
        ndarray::Zip::from(&$actual)
            .and(&$expected)
            .for_each(|v, w| {
                assert_relative_eq!(v, w);
            });
    };
}
