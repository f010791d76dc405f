#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod artifact;
pub mod error;
pub mod predictor;
pub mod regressor;

pub use artifact::ModelArtifact;
pub use error::{ArtifactError, PredictError, Result};
pub use predictor::PricePredictor;
pub use regressor::{
    ConstantRegressor, LinearRegressor, ModelSpec, Node, Regressor, Tree, TreeEnsemble,
};

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
