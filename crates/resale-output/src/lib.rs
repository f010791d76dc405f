#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod export;
pub mod price;

pub use export::{ExportError, ExportFormat, Exporter, PredictionRecord};
pub use price::{DEFAULT_CURRENCY, PriceEstimate, format_amount};
