#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod global;
pub mod pipeline;
pub mod settings;

// Re-export main types from sub-crates
pub use resale_encoding as encoding;
pub use resale_model as model;
pub use resale_output as output;

pub use global::{global, init_global};
pub use pipeline::{Pipeline, PipelineError, Result};
pub use settings::{Settings, SettingsError};

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
